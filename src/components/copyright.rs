use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CopyrightProps {
    pub copyright: AttrValue,
}

#[function_component(Copyright)]
pub fn copyright(props: &CopyrightProps) -> Html {
    html! {
        <div class="copyright">{props.copyright.clone()}</div>
    }
}
