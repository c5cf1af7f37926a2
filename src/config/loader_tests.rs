//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_memview_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("memview") && path_str.ends_with("config.toml"),
            "Path should contain 'memview' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("memview_test_config.toml");
    fs::write(
        &config_path,
        r#"
source_url = "http://localhost:8080/members.json"
page_size = 25
confirm_policy = "when-empty"
fetch_timeout_secs = 5
log_file_path = "/tmp/memview-test.log"
"#,
    )
    .unwrap();

    let result = load_config_file(&config_path);
    let _ = fs::remove_file(&config_path);

    let config = result.expect("valid config").expect("file exists");
    assert_eq!(
        config.source_url.as_deref(),
        Some("http://localhost:8080/members.json")
    );
    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.confirm_policy, Some(ConfirmPolicy::WhenEmpty));
    assert_eq!(config.fetch_timeout_secs, Some(5));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/memview-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("memview_test_invalid.toml");
    fs::write(&config_path, "page_size = [not toml").unwrap();

    let result = load_config_file(&config_path);
    let _ = fs::remove_file(&config_path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn unknown_confirm_policy_is_a_parse_error() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"confirm_policy = "always""#);
    assert!(result.is_err());
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "monokai""#);
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        source_url: Some("http://example.invalid/m.json".to_string()),
        page_size: Some(20),
        confirm_policy: Some(ConfirmPolicy::WhenEmpty),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.source_url, "http://example.invalid/m.json");
    assert_eq!(resolved.page_size, 20);
    assert_eq!(resolved.confirm_policy, ConfirmPolicy::WhenEmpty);
    assert_eq!(resolved.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
}

#[test]
fn merge_config_raises_zero_page_size() {
    let config_file = ConfigFile {
        page_size: Some(0),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(config_file)).page_size, 1);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.confirm_policy, ConfirmPolicy::WhenSelected);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(memview_env)]
fn apply_env_overrides_respects_memview_url() {
    let _guard = EnvGuard::new("MEMVIEW_URL");
    env::set_var("MEMVIEW_URL", "http://localhost/env.json");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.source_url, "http://localhost/env.json");
}

#[test]
#[serial(memview_env)]
fn apply_env_overrides_parses_page_size() {
    let _guard = EnvGuard::new("MEMVIEW_PAGE_SIZE");
    env::set_var("MEMVIEW_PAGE_SIZE", "15");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.page_size, 15);
}

#[test]
#[serial(memview_env)]
fn apply_env_overrides_ignores_invalid_page_size() {
    let _guard = EnvGuard::new("MEMVIEW_PAGE_SIZE");
    for raw in ["zero", "0", "-3"] {
        env::set_var("MEMVIEW_PAGE_SIZE", raw);
        let result = apply_env_overrides(ResolvedConfig::default());
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE, "{:?} should be ignored", raw);
    }
}

#[test]
#[serial(memview_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _url = EnvGuard::new("MEMVIEW_URL");
    let _size = EnvGuard::new("MEMVIEW_PAGE_SIZE");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(memview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("MEMVIEW_CONFIG");
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("memview_explicit.toml");
    fs::write(&explicit_path, "page_size = 3").unwrap();
    let env_path = temp_dir.join("memview_env.toml");
    fs::write(&env_path, "page_size = 7").unwrap();
    env::set_var("MEMVIEW_CONFIG", env_path.to_str().unwrap());

    let result = load_config_with_precedence(Some(explicit_path.clone()));
    let _ = fs::remove_file(&explicit_path);
    let _ = fs::remove_file(&env_path);

    assert_eq!(result.unwrap().unwrap().page_size, Some(3));
}

#[test]
#[serial(memview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("MEMVIEW_CONFIG");
    let env_path = env::temp_dir().join("memview_env_only.toml");
    fs::write(&env_path, r#"confirm_policy = "when-empty""#).unwrap();
    env::set_var("MEMVIEW_CONFIG", env_path.to_str().unwrap());

    let result = load_config_with_precedence(None);
    let _ = fs::remove_file(&env_path);

    assert_eq!(
        result.unwrap().unwrap().confirm_policy,
        Some(ConfirmPolicy::WhenEmpty)
    );
}

#[test]
fn apply_cli_overrides_all_fields() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some("http://cli/m.json".to_string()),
        Some(5),
        Some(ConfirmPolicy::WhenEmpty),
    );
    assert_eq!(result.source_url, "http://cli/m.json");
    assert_eq!(result.page_size, 5);
    assert_eq!(result.confirm_policy, ConfirmPolicy::WhenEmpty);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}

#[test]
#[serial(memview_env)]
fn precedence_chain_cli_beats_env_beats_file() {
    let _guard = EnvGuard::new("MEMVIEW_PAGE_SIZE");
    let file = ConfigFile {
        page_size: Some(20),
        source_url: Some("http://file/m.json".to_string()),
        ..ConfigFile::default()
    };
    env::set_var("MEMVIEW_PAGE_SIZE", "30");

    let merged = merge_config(Some(file));
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.page_size, 30);
    assert_eq!(with_env.source_url, "http://file/m.json");

    let with_cli = apply_cli_overrides(with_env, None, Some(40), None);
    assert_eq!(with_cli.page_size, 40);
}
