use yew::prelude::*;

use crate::components::{Author, Contacts, Copyright, Menu, ThemeToggler};
use crate::hooks::use_site_metadata::use_site_metadata;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or_default]
    pub is_index: bool,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let site = use_site_metadata();
    let home = site.prefixed("/");

    html! {
        <div class="sidebar">
            <div class="sidebar__inner">
                <Author author={site.author.clone()} home={home} is_index={props.is_index} />
                <Menu menu={site.menu.clone()} />
            </div>
            <div>
                <ThemeToggler class="sidebar__toggler" />
                <Contacts contacts={site.author.contacts.clone()} />
                <Copyright copyright={site.copyright.clone()} />
            </div>
        </div>
    }
}
