use yew::prelude::*;

use crate::config::MenuItem;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub menu: Vec<MenuItem>,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    html! {
        <nav class="menu">
            <ul class="menu__list">
                {
                    props.menu.iter().map(|item| html! {
                        <li class="menu__list-item" key={item.path.clone()}>
                            <a href={item.path.clone()} class="menu__list-item-link">
                                {item.label.clone()}
                            </a>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}
