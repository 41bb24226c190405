use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    html! {
        <div class="page">
            <div class="page__inner">
                <h1 class="page__title">{props.title.clone()}</h1>
                <div class="page__body">{props.children.clone()}</div>
            </div>
        </div>
    }
}
