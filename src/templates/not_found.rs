use yew::prelude::*;

use crate::components::{Layout, Page, Sidebar};
use crate::config::{Config, SiteConfig};
use crate::hooks::use_site_metadata::use_site_metadata;

/// Document title of the not-found page
pub fn not_found_title(site: &SiteConfig) -> String {
    format!("Page Not Found - {}", site.title)
}

#[function_component(NotFoundTemplate)]
pub fn not_found_template() -> Html {
    let site = use_site_metadata();

    html! {
        <Layout title={not_found_title(&site)} description={site.subtitle.clone()}>
            <Sidebar />
            <Page title={Config::NOT_FOUND_TITLE}>
                <p>{"This route doesn't exist."}</p>
            </Page>
        </Layout>
    }
}
