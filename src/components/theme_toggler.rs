use yew::prelude::*;

use crate::hooks::use_theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeTogglerProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Light/dark switch: a hidden checkbox inside a label reading `<theme> mode`
#[function_component(ThemeToggler)]
pub fn theme_toggler(props: &ThemeTogglerProps) -> Html {
    let theme_handle = use_theme();

    let onclick = {
        let toggle = theme_handle.toggle;
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div class={props.class.clone()}>
            <label>
                <input type="checkbox" {onclick} hidden={true} />
                {" "}
                {theme_handle.theme.label()}
            </label>
        </div>
    }
}
