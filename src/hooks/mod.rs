pub mod use_site_metadata;
pub mod use_theme;
