//! Tests for CLI vs TOML precedence rules.

use super::*;

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_ip_addresses_replace_toml() {
        let cli = cli(&["--ip-addresses", "10.0.0.1"]);
        let toml = toml(
            r#"
            dnsbl_files = ["drop.txt"]
            ip_addresses = ["192.0.2.1", "198.51.100.0/24"]
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(targets(&config), vec!["10.0.0.1"]);
    }

    #[test]
    fn cli_dnsbl_files_replace_toml() {
        let cli = cli(&["--dnsbl-files", "cli.txt"]);
        let toml = toml(
            r#"
            dnsbl_files = ["a.txt", "b.txt"]
            ip_addresses = ["10.0.0.1"]
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.dnsbl_files, vec![PathBuf::from("cli.txt")]);
    }

    #[test]
    fn lists_resolve_independently() {
        // CLI files replace TOML files, TOML addresses are still used.
        let cli = cli(&["--dnsbl-files", "cli.txt"]);
        let toml = toml(
            r#"
            dnsbl_files = ["toml.txt"]
            ip_addresses = ["10.0.0.0/8"]
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.dnsbl_files, vec![PathBuf::from("cli.txt")]);
        assert_eq!(targets(&config), vec!["10.0.0.0/8"]);
    }
}

mod toml_fallback {
    use super::*;

    #[test]
    fn everything_from_toml() {
        let cli = cli(&[]);
        let toml = toml(
            r#"
            dnsbl_files = ["a.txt", "b.txt"]
            ip_addresses = ["::ffff:10.0.0.1", "2001:db8::/32"]
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(
            config.dnsbl_files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(targets(&config), vec!["10.0.0.1", "2001:db8::/32"]);
    }

    #[test]
    fn toml_addresses_are_trimmed() {
        let cli = cli(&["--dnsbl-files", "a.txt"]);
        let toml = toml(r#"ip_addresses = [" 10.0.0.1 "]"#);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(targets(&config), vec!["10.0.0.1"]);
    }

    #[test]
    fn tilde_in_toml_paths_is_expanded() {
        let cli = cli(&["--ip-addresses", "10.0.0.1"]);
        let toml = toml(r#"dnsbl_files = ["~/lists/drop.txt"]"#);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.dnsbl_files, vec![home.join("lists/drop.txt")]);
        }
    }
}

mod verbose_flag {
    use super::*;

    #[test]
    fn verbose_from_toml() {
        let cli = cli(&["--ip-addresses", "10.0.0.1", "--dnsbl-files", "a.txt"]);
        let toml = toml("verbose = true");

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert!(config.verbose);
    }

    #[test]
    fn verbose_from_cli_wins_over_false_toml() {
        let cli = cli(&["--ip-addresses", "10.0.0.1", "--dnsbl-files", "a.txt", "-v"]);
        let toml = toml("verbose = false");

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert!(config.verbose);
    }

    #[test]
    fn verbose_off_by_default() {
        let cli = cli(&["--ip-addresses", "10.0.0.1", "--dnsbl-files", "a.txt"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert!(!config.verbose);
    }
}
