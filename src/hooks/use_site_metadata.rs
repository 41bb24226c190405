use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

/// Site configuration provided by the app root, or the built-in one
#[hook]
pub fn use_site_metadata() -> Rc<SiteConfig> {
    let fallback = use_memo((), |_| SiteConfig::default());
    use_context::<Rc<SiteConfig>>().unwrap_or(fallback)
}
