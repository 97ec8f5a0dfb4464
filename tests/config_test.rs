// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件读取、默认值、覆写与校验
// ==========================================


use std::sync::Mutex;

use restaurant_status::api::RequestContext;
use restaurant_status::config::{ConfigError, ConfigManager, CONFIG_PATH_ENV, LOCALE_ENV};
use restaurant_status::domain::StatusDomain;
use restaurant_status::engine::StatusClassifier;
use restaurant_status::AppState;
use test_helpers::create_config_file;

// 环境变量为进程级状态，相关测试串行执行
static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_load_config_file() {
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "en", "badge_class": "badge rounded-pill" }"#)
            .expect("Failed to create config file");

    let manager = ConfigManager::load(&path).expect("Failed to load config");
    assert_eq!(manager.config().default_locale, "en");
    assert_eq!(manager.config().badge_class, "badge rounded-pill");
    assert_eq!(manager.path().map(|p| p.to_string_lossy().to_string()), Some(path));
}

#[test]
fn test_partial_config_uses_defaults() {
    let (_temp_file, path) =
        create_config_file(r#"{ "badge_class": "tag" }"#).expect("Failed to create config file");

    let manager = ConfigManager::load(&path).expect("Failed to load config");
    assert_eq!(manager.config().default_locale, "es");
    assert_eq!(manager.config().badge_class, "tag");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.json");

    let manager = ConfigManager::load(&path).expect("Missing file should fall back to defaults");
    assert_eq!(manager.config().default_locale, "es");
    assert_eq!(manager.config().badge_class, "badge");
}

#[test]
fn test_malformed_file_is_error() {
    let (_temp_file, path) =
        create_config_file("{ default_locale: es").expect("Failed to create config file");

    let err = ConfigManager::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&path));
}

#[test]
fn test_unsupported_locale_in_file_is_error() {
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "pt-BR" }"#)
            .expect("Failed to create config file");

    let err = ConfigManager::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedLocale(ref l) if l == "pt-BR"));
}

#[test]
fn test_locale_override() {
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "es" }"#).expect("Failed to create config file");

    let manager = ConfigManager::load_with_overrides(&path, Some("en_GB")).unwrap();
    assert_eq!(manager.config().default_locale, "en");

    // 空白覆写视为未指定
    let manager = ConfigManager::load_with_overrides(&path, Some("  ")).unwrap();
    assert_eq!(manager.config().default_locale, "es");

    assert!(ConfigManager::load_with_overrides(&path, Some("it")).is_err());
}

#[test]
fn test_loaded_config_drives_classifier() {
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "en", "badge_class": "chip" }"#)
            .expect("Failed to create config file");

    let manager = ConfigManager::load(&path).unwrap();
    let classifier = StatusClassifier::new(manager.config());
    assert_eq!(
        classifier.badge_markup(StatusDomain::Table, "Reservada", false),
        r#"<span class="chip btn-info">Reserved</span>"#
    );
}

#[test]
fn test_directory_path_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let err = ConfigManager::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn test_load_from_env_applies_path_and_locale() {
    let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "es", "badge_class": "chip" }"#)
            .expect("Failed to create config file");

    std::env::set_var(CONFIG_PATH_ENV, &path);
    std::env::set_var(LOCALE_ENV, "en");
    let manager = ConfigManager::load_from_env();
    let state = AppState::from_env();
    std::env::remove_var(CONFIG_PATH_ENV);
    std::env::remove_var(LOCALE_ENV);

    let manager = manager.expect("Failed to load config from env");
    assert_eq!(manager.path().map(|p| p.to_string_lossy().to_string()), Some(path));
    assert_eq!(manager.config().default_locale, "en");
    assert_eq!(manager.config().badge_class, "chip");

    let state = state.expect("Failed to build AppState from env");
    let badge = state
        .status_api
        .get_badge(&RequestContext::default(), "table", "Pagada", false)
        .expect("Failed to render badge");
    assert_eq!(badge, r#"<span class="chip btn-success">Paid</span>"#);
}

#[test]
fn test_load_from_env_rejects_unsupported_locale() {
    let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (_temp_file, path) =
        create_config_file(r#"{ "default_locale": "en" }"#).expect("Failed to create config file");

    std::env::set_var(CONFIG_PATH_ENV, &path);
    std::env::set_var(LOCALE_ENV, "pt");
    let result = ConfigManager::load_from_env();
    std::env::remove_var(CONFIG_PATH_ENV);
    std::env::remove_var(LOCALE_ENV);

    assert!(matches!(result, Err(ConfigError::UnsupportedLocale(ref l)) if l == "pt"));
}
