mod common;

#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use portfolio::common::*;
    use portfolio::config::*;
    use portfolio::frontend::motion::*;
    use portfolio::types::ViewState;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.site_root.to_str(), Some(DEFAULT_SITE_ROOT));
        assert!(config.index_file().ends_with("index.html"));
    }

    #[test]
    fn test_server_config_from_environment_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", " 127.0.0.1:3000 "),
            ("SITE_ROOT", "/srv/site"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.site_root.to_str(), Some("/srv/site"));
    }

    #[test]
    fn test_server_config_rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr(ref raw, _) if raw == "localhost"));
    }

    #[test]
    fn test_server_config_validate_requires_directory() {
        let missing = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", "./no/such/dir")])).unwrap();
        assert!(matches!(missing.validate(), Err(ConfigError::SiteRoot(_))));

        let here = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", ".")])).unwrap();
        assert!(here.validate().is_ok());
    }

    #[test]
    fn test_mailto_falls_back_to_site_address() {
        let site = SiteConfig::default();
        assert_eq!(site.mailto(Some("a@b.c")), "mailto:a@b.c");
        assert_eq!(site.mailto(Some("  ")), format!("mailto:{}", site.contact_email));
        assert_eq!(site.mailto(None), format!("mailto:{}", site.contact_email));
    }

    #[test]
    fn test_motion_staggers_items() {
        let motion = MotionConfig::default();
        assert_eq!(
            motion.item_style(0),
            "--reveal-offset: 20px; animation: reveal 500ms ease-out 0ms both;"
        );
        assert_eq!(
            motion.item_style(3),
            "--reveal-offset: 20px; animation: reveal 500ms ease-out 300ms both;"
        );
        assert!(motion.header_style().starts_with("--reveal-offset: -20px;"));
        assert!(motion.section_style(2).contains("400ms ease-out 200ms"));
    }

    #[test]
    fn test_view_state_transitions() {
        let loading: ViewState<u8> = ViewState::default();
        assert!(loading.is_loading());

        let ready = ViewState::from_result(Ok::<_, FetchError>(1u8)).map(|n| n + 1);
        assert_eq!(ready.ready(), Some(&2));

        let missing: ViewState<u8> = ViewState::from_lookup(Ok(None));
        assert!(missing.is_not_found());
        assert_eq!(missing.error(), None);
    }
}
