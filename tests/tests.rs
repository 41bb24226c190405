#[cfg(test)]
mod tests {
    use learnings_and_code::config::{Config, Contacts, SiteConfig, contact_href};
    use learnings_and_code::models::{
        error::AppError,
        theme::{THEME_STORAGE_KEY, ThemePreference},
    };
    use learnings_and_code::render::{bootstrap_script, escape_html, on_render_body, render_document};
    use learnings_and_code::services::storage::{KeyValueStore, MemoryStore, ThemeRoot};
    use learnings_and_code::services::theme::{
        bootstrap, commit, mounted_theme, resolve_theme, stored_theme, toggle,
    };
    use learnings_and_code::templates::not_found::not_found_title;
    use std::cell::{Cell, RefCell};

    // Stand-in for the <html> element
    #[derive(Default)]
    struct FakeRoot {
        theme: RefCell<Option<String>>,
    }

    impl FakeRoot {
        fn with_theme(value: &str) -> Self {
            Self {
                theme: RefCell::new(Some(value.to_string())),
            }
        }

        fn value(&self) -> Option<String> {
            self.theme.borrow().clone()
        }
    }

    impl ThemeRoot for FakeRoot {
        fn theme(&self) -> Option<String> {
            self.value()
        }

        fn stamp(&self, theme: ThemePreference) {
            *self.theme.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get(THEME_STORAGE_KEY).unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::InvalidTheme("blue".to_string());
        assert_eq!(error.to_string(), "Invalid theme: blue");

        let error = AppError::StorageUnavailable("storage disabled".to_string());
        assert_eq!(error.to_string(), "Storage unavailable: storage disabled");
    }

    // ===== ThemePreference Tests =====

    #[test]
    fn test_theme_parse_only_known_values() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("blue".parse::<ThemePreference>().is_err());
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_theme_toggle_is_a_swap() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_label_and_serde() {
        assert_eq!(ThemePreference::Dark.label(), "dark mode");
        assert_eq!(ThemePreference::Light.label(), "light mode");
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
        let theme: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, ThemePreference::Light);
    }

    // ===== Resolution Tests =====

    #[test]
    fn test_resolve_stored_value_wins() {
        assert_eq!(resolve_theme(Some("dark"), Some(false)), ThemePreference::Dark);
        assert_eq!(resolve_theme(Some("light"), Some(true)), ThemePreference::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_platform() {
        assert_eq!(resolve_theme(None, Some(true)), ThemePreference::Dark);
        assert_eq!(resolve_theme(None, Some(false)), ThemePreference::Light);
        assert_eq!(resolve_theme(None, None), ThemePreference::Light);
    }

    #[test]
    fn test_resolve_ignores_invalid_stored_value() {
        assert_eq!(resolve_theme(Some("blue"), Some(true)), ThemePreference::Dark);
        assert_eq!(resolve_theme(Some("blue"), None), ThemePreference::Light);
    }

    // ===== Bootstrap Tests =====

    #[test]
    fn test_bootstrap_never_stamps_invalid_value() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "blue");
        let root = FakeRoot::default();

        let theme = bootstrap(&store, &root, || Some(true));

        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(root.value().as_deref(), Some("dark"));
        // The bootstrap only reads the store
        assert_eq!(stored(&store).as_deref(), Some("blue"));
    }

    #[test]
    fn test_bootstrap_skips_platform_query_when_stored() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
        let root = FakeRoot::default();
        let queried = Cell::new(false);

        let theme = bootstrap(&store, &root, || {
            queried.set(true);
            Some(true)
        });

        assert_eq!(theme, ThemePreference::Light);
        assert!(!queried.get());
    }

    #[test]
    fn test_bootstrap_empty_store_follows_platform() {
        let root = FakeRoot::default();
        bootstrap(&MemoryStore::new(), &root, || Some(true));
        assert_eq!(root.value().as_deref(), Some("dark"));

        let root = FakeRoot::default();
        bootstrap(&MemoryStore::new(), &root, || Some(false));
        assert_eq!(root.value().as_deref(), Some("light"));

        let root = FakeRoot::default();
        bootstrap(&MemoryStore::new(), &root, || None);
        assert_eq!(root.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_bootstrap_unavailable_storage_is_absent() {
        let store = MemoryStore::unavailable();
        assert!(stored_theme(&store).is_none());

        let root = FakeRoot::default();
        let theme = bootstrap(&store, &root, || Some(true));
        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(root.value().as_deref(), Some("dark"));
    }

    // ===== Toggler Tests =====

    #[test]
    fn test_returning_visitor_scenario() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
        let root = FakeRoot::default();

        bootstrap(&store, &root, || Some(false));
        assert_eq!(root.value().as_deref(), Some("dark"));

        let theme = mounted_theme(&root, &store, || Some(false));
        assert_eq!(theme.label(), "dark mode");

        let theme = toggle(theme, &store, &root);
        assert_eq!(theme.label(), "light mode");
        assert_eq!(stored(&store).as_deref(), Some("light"));
        assert_eq!(root.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_first_time_visitor_with_dark_platform() {
        let store = MemoryStore::new();
        let root = FakeRoot::default();

        bootstrap(&store, &root, || Some(true));
        let theme = mounted_theme(&root, &store, || Some(true));

        assert_eq!(theme.label(), "dark mode");
        // Mounting alone persists nothing
        assert_eq!(stored(&store), None);
        assert_eq!(root.value().as_deref(), Some("dark"));
    }

    #[test]
    fn test_mount_is_not_a_change() {
        let store = MemoryStore::new();
        let root = FakeRoot::with_theme("light");

        let theme = mounted_theme(&root, &store, || Some(true));
        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(stored(&store), None);

        // The first write happens on the first toggle
        let theme = toggle(theme, &store, &root);
        assert_eq!(stored(&store).as_deref(), Some(theme.as_str()));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
        let root = FakeRoot::with_theme("light");
        let theme = mounted_theme(&root, &store, || None);

        let theme = toggle(toggle(theme, &store, &root), &store, &root);

        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(stored(&store).as_deref(), Some("light"));
        assert_eq!(root.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_from_empty_store_persists() {
        let store = MemoryStore::new();
        let root = FakeRoot::with_theme("dark");
        let theme = mounted_theme(&root, &store, || None);

        let theme = toggle(toggle(theme, &store, &root), &store, &root);

        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(stored(&store).as_deref(), Some("dark"));
    }

    #[test]
    fn test_surfaces_consistent_after_every_toggle() {
        let store = MemoryStore::new();
        let root = FakeRoot::default();
        bootstrap(&store, &root, || None);
        let mut theme = mounted_theme(&root, &store, || None);

        for _ in 0..5 {
            theme = toggle(theme, &store, &root);
            assert_eq!(stored(&store).as_deref(), Some(theme.as_str()));
            assert_eq!(root.value().as_deref(), Some(theme.as_str()));
        }
    }

    #[test]
    fn test_toggle_with_failing_storage_keeps_session_state() {
        let store = MemoryStore::new();
        let root = FakeRoot::with_theme("dark");
        let theme = mounted_theme(&root, &store, || None);

        store.set_unavailable(true);
        let theme = toggle(theme, &store, &root);

        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(root.value().as_deref(), Some("light"));

        store.set_unavailable(false);
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn test_commit_reports_failed_write_but_stamps_root() {
        let store = MemoryStore::unavailable();
        let root = FakeRoot::default();

        let result = commit(ThemePreference::Dark, &store, &root);

        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
        assert_eq!(root.value().as_deref(), Some("dark"));
    }

    #[test]
    fn test_mount_without_stamped_root_resolves_like_bootstrap() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
        let root = FakeRoot::with_theme("null");

        let theme = mounted_theme(&root, &store, || Some(false));
        assert_eq!(theme, ThemePreference::Dark);

        let empty = MemoryStore::new();
        let root = FakeRoot::default();
        let theme = mounted_theme(&root, &empty, || Some(true));
        assert_eq!(theme, ThemePreference::Dark);
        // Mount reads the root but does not stamp it
        assert_eq!(root.value(), None);
    }

    // ===== Render Hook Tests =====

    #[test]
    fn test_bootstrap_script_shape() {
        let script = bootstrap_script();

        assert!(script.trim_start().starts_with("(function() {"));
        assert!(script.trim_end().ends_with("})();"));
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("mode === 'light' || mode === 'dark'"));
        assert!(script.contains("(prefers-color-scheme: dark)"));
        assert!(script.contains("setAttribute('theme', 'light')"));
        assert!(script.contains("try {"));
    }

    #[test]
    fn test_render_body_single_blocking_script() {
        let body = on_render_body(&SiteConfig::default());

        assert!(body.head_components.is_empty());
        assert_eq!(body.pre_body_components.len(), 1);

        let script = &body.pre_body_components[0];
        assert!(script.starts_with("<script>"));
        assert!(script.ends_with("</script>"));
        assert!(!script.contains("defer"));
        assert!(!script.contains("async"));
        assert!(!script.contains("src="));
    }

    #[test]
    fn test_render_body_katex_stylesheet() {
        let config = SiteConfig {
            use_katex: true,
            path_prefix: "/blog/".to_string(),
            ..SiteConfig::default()
        };
        let body = on_render_body(&config);

        assert_eq!(body.head_components.len(), 1);
        assert!(body.head_components[0].starts_with("<style"));
        assert!(body.head_components[0].contains("/blog/css/katex/katex.min.css"));
        assert_eq!(body.pre_body_components.len(), 1);
    }

    #[test]
    fn test_render_document_orders_script_before_app() {
        let site = SiteConfig::default();
        let html = render_document(&site, &not_found_title(&site), "<p>hi</p>");

        let script_at = html.find("<script>").unwrap();
        let mount_at = html.find(&format!("<div id=\"{}\">", Config::MOUNT_ID)).unwrap();
        assert!(script_at < mount_at);
        assert!(html.find("<body>").unwrap() < script_at);
        assert!(html.contains("<title>Page Not Found - Learnings and Code</title>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    // ===== Site Config Tests =====

    #[test]
    fn test_default_site_config() {
        let site = SiteConfig::default();
        assert_eq!(site.title, "Learnings and Code");
        assert!(!site.use_katex);
        assert_eq!(site.menu.len(), 3);
        assert_eq!(site.menu[1].path, "/pages/about");
        assert_eq!(site.posts_per_page, 4);
    }

    #[test]
    fn test_site_config_from_partial_json() {
        let json = r#"{
            "title": "Another Blog",
            "useKatex": true,
            "menu": [{ "label": "Home", "path": "/" }]
        }"#;

        let site = SiteConfig::from_json(json).unwrap();
        assert_eq!(site.title, "Another Blog");
        assert!(site.use_katex);
        assert_eq!(site.menu.len(), 1);
        // Untouched keys keep their defaults
        assert_eq!(site.copyright, "© All rights reserved.");
        assert_eq!(site.author.name, "João M. Martins");
    }

    #[test]
    fn test_site_config_invalid_json() {
        let result = SiteConfig::from_json("{ \"title\": 3 }");
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_contacts_entries_skip_empty() {
        let site = SiteConfig::default();
        let entries = site.author.contacts.entries();
        let platforms: Vec<&str> = entries.iter().map(|(platform, _)| *platform).collect();
        assert_eq!(platforms, vec!["email", "github", "linkedin"]);

        assert!(Contacts::default().entries().is_empty());
    }

    #[test]
    fn test_contact_href() {
        assert_eq!(contact_href("email", "me@example.com"), "mailto:me@example.com");
        assert_eq!(contact_href("github", "joaommartins"), "https://github.com/joaommartins");
        assert_eq!(
            contact_href("linkedin", "joaommartins"),
            "https://www.linkedin.com/in/joaommartins"
        );
        assert_eq!(contact_href("rss", "/rss.xml"), "/rss.xml");
    }

    #[test]
    fn test_prefixed_paths() {
        let mut site = SiteConfig::default();
        assert_eq!(site.prefixed("/"), "/");
        site.path_prefix = "/blog".to_string();
        assert_eq!(site.prefixed("/pages/about"), "/blog/pages/about");
    }
}
