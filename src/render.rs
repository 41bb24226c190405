//! Build-time markup injected around every page.
//!
//! The theme is resolved by an inline script placed first in `<body>`, so
//! the root carries its `theme` attribute before any themed rule paints and
//! before the app hydrates.

use std::fmt::Write as _;

use crate::config::{Config, SiteConfig};
use crate::models::theme::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

/// Markup fragments contributed to a rendered page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderBody {
    /// Appended to `<head>`
    pub head_components: Vec<String>,
    /// Placed at the start of `<body>`, before the app mount
    pub pre_body_components: Vec<String>,
}

/// Source of the theme bootstrap script.
///
/// Same resolution as `services::theme::bootstrap`: a stored `light`/`dark`
/// wins, then the dark color-scheme query, then light. Storage access that
/// throws counts as no stored value.
pub fn bootstrap_script() -> String {
    format!(
        r"
(function() {{
  var root = document.documentElement;
  var mode = null;
  try {{
    mode = window.localStorage.getItem('{key}');
  }} catch (e) {{
    mode = null;
  }}
  if (mode === 'light' || mode === 'dark') {{
    root.setAttribute('{attr}', mode);
    return;
  }}

  var mql = typeof window.matchMedia === 'function' ? window.matchMedia('{query}') : null;
  var hasMediaQueryPreference = mql !== null && typeof mql.matches === 'boolean';
  if (hasMediaQueryPreference && mql.matches === true) {{
    root.setAttribute('{attr}', 'dark');
  }} else {{
    root.setAttribute('{attr}', 'light');
  }}
}})();
",
        key = THEME_STORAGE_KEY,
        attr = THEME_ATTRIBUTE,
        query = DARK_SCHEME_QUERY,
    )
}

/// Render hook run once per page.
///
/// With KaTeX on, the head gets a `<style>` that `@import`s the stylesheet
/// from the site's own path instead of inlining its text. The import is a
/// render-blocking request of its own.
pub fn on_render_body(config: &SiteConfig) -> RenderBody {
    let mut body = RenderBody::default();

    if config.use_katex {
        body.head_components.push(format!(
            "<style data-key=\"katex-inline-stylesheet\">@import url(\"{}\");</style>",
            escape_html(&config.prefixed(Config::KATEX_STYLESHEET))
        ));
    }

    // Blocking on purpose: no async/defer, no src.
    body.pre_body_components
        .push(format!("<script>{}</script>", bootstrap_script()));

    body
}

/// Full static HTML document for a page whose app markup is `body_html`
pub fn render_document(config: &SiteConfig, page_title: &str, body_html: &str) -> String {
    let parts = on_render_body(config);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page_title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(&config.subtitle)
    );
    for component in &parts.head_components {
        html.push_str(component);
        html.push('\n');
    }
    html.push_str("</head>\n<body>\n");
    for component in &parts.pre_body_components {
        html.push_str(component);
        html.push('\n');
    }
    let _ = writeln!(html, "<div id=\"{}\">{}</div>", Config::MOUNT_ID, body_html);
    html.push_str("</body>\n</html>\n");

    html
}

/// Escapes text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
