use std::rc::Rc;

use learnings_and_code::config::{Config, SiteConfig};
use learnings_and_code::templates::NotFoundTemplate;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let site = use_memo((), |_| SiteConfig::default());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={site}>
            <NotFoundTemplate />

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(Config::MOUNT_ID));

    match mount {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
