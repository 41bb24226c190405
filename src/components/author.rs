use yew::prelude::*;

use crate::config::Author as AuthorInfo;

#[derive(Properties, PartialEq)]
pub struct AuthorProps {
    pub author: AuthorInfo,
    pub home: AttrValue,
    #[prop_or_default]
    pub is_index: bool,
}

/// Photo, name and bio. The name is the page heading on the index page.
#[function_component(Author)]
pub fn author(props: &AuthorProps) -> Html {
    let author = &props.author;
    let name = html! {
        <a class="author__title-link" href={props.home.clone()}>{author.name.clone()}</a>
    };

    html! {
        <div class="author">
            <a href={props.home.clone()}>
                <img
                    src={author.photo.clone()}
                    class="author__photo"
                    width="75"
                    height="75"
                    alt={author.name.clone()}
                />
            </a>
            if props.is_index {
                <h1 class="author__title">{name.clone()}</h1>
            } else {
                <h2 class="author__title">{name}</h2>
            }
            <p class="author__subtitle">{author.bio.clone()}</p>
        </div>
    }
}
