use yew::prelude::*;

use crate::config::{Contacts as ContactHandles, contact_href};

#[derive(Properties, PartialEq)]
pub struct ContactsProps {
    pub contacts: ContactHandles,
}

/// Links for every filled-in contact platform
#[function_component(Contacts)]
pub fn contacts(props: &ContactsProps) -> Html {
    html! {
        <div class="contacts">
            <ul class="contacts__list">
                {
                    props.contacts.entries().into_iter().map(|(platform, handle)| html! {
                        <li class="contacts__list-item" key={platform}>
                            <a
                                class="contacts__list-item-link"
                                href={contact_href(platform, handle)}
                                rel="noopener noreferrer"
                                target="_blank"
                                title={platform}
                            >
                                {platform}
                            </a>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
