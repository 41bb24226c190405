use serde::{Deserialize, Serialize};

use crate::models::error::AppError;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Id of the element the app mounts into
    pub const MOUNT_ID: &'static str = "app";

    /// Heading of the not-found page
    pub const NOT_FOUND_TITLE: &'static str = "404: PAGE NOT FOUND";

    /// Path of the KaTeX stylesheet, relative to the path prefix
    pub const KATEX_STYLESHEET: &'static str = "css/katex/katex.min.css";
}

/// Site-wide display data. Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub url: String,
    pub path_prefix: String,
    pub title: String,
    pub subtitle: String,
    pub copyright: String,
    pub disqus_shortname: String,
    pub posts_per_page: u32,
    pub google_analytics_id: String,
    pub use_katex: bool,
    pub menu: Vec<MenuItem>,
    pub author: Author,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub photo: String,
    pub bio: String,
    pub contacts: Contacts,
}

/// Contact handles; an empty string means the platform is not shown
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub soundcloud: String,
    pub medium: String,
}

impl Contacts {
    /// Filled-in contacts as `(platform, handle)`, in declaration order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("email", self.email.as_str()),
            ("facebook", self.facebook.as_str()),
            ("telegram", self.telegram.as_str()),
            ("twitter", self.twitter.as_str()),
            ("github", self.github.as_str()),
            ("rss", self.rss.as_str()),
            ("vkontakte", self.vkontakte.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
            ("line", self.line.as_str()),
            ("gitlab", self.gitlab.as_str()),
            ("weibo", self.weibo.as_str()),
            ("codepen", self.codepen.as_str()),
            ("soundcloud", self.soundcloud.as_str()),
            ("medium", self.medium.as_str()),
        ]
        .into_iter()
        .filter(|(_, handle)| !handle.is_empty())
        .collect()
    }
}

/// Link target for a contact handle. Unknown platforms link to the handle as is.
pub fn contact_href(platform: &str, handle: &str) -> String {
    match platform {
        "email" => format!("mailto:{handle}"),
        "facebook" => format!("https://www.facebook.com/{handle}"),
        "telegram" => format!("tg://resolve?domain={handle}"),
        "twitter" => format!("https://www.twitter.com/{handle}"),
        "github" => format!("https://github.com/{handle}"),
        "vkontakte" => format!("https://vk.com/{handle}"),
        "linkedin" => format!("https://www.linkedin.com/in/{handle}"),
        "instagram" => format!("https://www.instagram.com/{handle}"),
        "line" => format!("line://ti/p/{handle}"),
        "gitlab" => format!("https://www.gitlab.com/{handle}"),
        "weibo" => format!("https://weibo.com/{handle}"),
        "codepen" => format!("https://www.codepen.io/{handle}"),
        "soundcloud" => format!("https://soundcloud.com/{handle}"),
        "medium" => format!("https://medium.com/{handle}"),
        _ => handle.to_string(),
    }
}

impl SiteConfig {
    /// Parses a JSON site config. Top-level keys that are left out keep the
    /// values of [`SiteConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::ConfigError(e.to_string()))
    }

    /// `path` under the site's path prefix, with exactly one `/` between them
    pub fn prefixed(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.path_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://joammartins.github.io".to_string(),
            path_prefix: "/".to_string(),
            title: "Learnings and Code".to_string(),
            subtitle: "Things that I enjoy playing with, processes that I keep coming back to and learnings that I feel like sharing.".to_string(),
            copyright: "© All rights reserved.".to_string(),
            disqus_shortname: String::new(),
            posts_per_page: 4,
            google_analytics_id: String::new(),
            use_katex: false,
            menu: vec![
                MenuItem {
                    label: "Articles".to_string(),
                    path: "/".to_string(),
                },
                MenuItem {
                    label: "About me".to_string(),
                    path: "/pages/about".to_string(),
                },
                MenuItem {
                    label: "Contact me".to_string(),
                    path: "/pages/contacts".to_string(),
                },
            ],
            author: Author {
                name: "João M. Martins".to_string(),
                photo: "/photo.jpg".to_string(),
                bio: "Software developer, former researcher and teacher, with a penchant for learning and explaining concepts.".to_string(),
                contacts: Contacts {
                    email: "martins.joaomiguel@gmail.com".to_string(),
                    github: "joaommartins".to_string(),
                    linkedin: "joaommartins".to_string(),
                    ..Contacts::default()
                },
            },
        }
    }
}
