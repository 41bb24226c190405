use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Page frame that also keeps the document title and description in sync
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    {
        let head = (props.title.clone(), props.description.clone());
        use_effect_with(head, |(title, description)| {
            apply_head(title, description);
            || ()
        });
    }

    html! {
        <div class="layout">{props.children.clone()}</div>
    }
}

fn apply_head(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);

    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", description);
        return;
    }
    if let (Ok(meta), Some(head)) = (document.create_element("meta"), document.head()) {
        let _ = meta.set_attribute("name", "description");
        let _ = meta.set_attribute("content", description);
        let _ = head.append_child(&meta);
    }
}
