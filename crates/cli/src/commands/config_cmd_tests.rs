use super::*;
use tempfile::tempdir;

#[test]
fn test_get_config_value_for_every_key() {
    let config = AppConfig::default();

    assert_eq!(
        get_config_value(&config, "aggregation.page_size").unwrap(),
        "100"
    );
    assert_eq!(
        get_config_value(&config, "aggregation.cache_ttl_seconds").unwrap(),
        "3600"
    );
    assert_eq!(
        get_config_value(&config, "aggregation.language_percentage").unwrap(),
        "running-average"
    );
    assert_eq!(
        get_config_value(&config, "authentication.auth_method").unwrap(),
        "token"
    );
}

#[test]
fn test_get_config_value_unknown_key() {
    let config = AppConfig::default();

    for key in ["aggregation", "aggregation.unknown", "rules.page_size", ""] {
        assert!(
            matches!(get_config_value(&config, key), Err(CliError::InvalidArguments(_))),
            "'{}' should be rejected",
            key
        );
    }
}

#[test]
fn test_set_config_value() {
    let mut config = AppConfig::default();

    set_config_value(&mut config, "aggregation.page_size", "25").unwrap();
    set_config_value(&mut config, "aggregation.cache_ttl_seconds", "0").unwrap();
    set_config_value(&mut config, "aggregation.language_percentage", "size-weighted").unwrap();
    set_config_value(&mut config, "authentication.auth_method", "env").unwrap();

    assert_eq!(config.aggregation.page_size, 25);
    assert_eq!(config.aggregation.cache_ttl_seconds, 0);
    assert_eq!(
        config.aggregation.language_percentage,
        LanguagePercentagePolicy::SizeWeighted
    );
    assert_eq!(config.authentication.auth_method, AuthMethod::Env);
}

#[test]
fn test_set_config_value_rejects_invalid_values() {
    let mut config = AppConfig::default();

    assert!(set_config_value(&mut config, "aggregation.page_size", "0").is_err());
    assert!(set_config_value(&mut config, "aggregation.page_size", "101").is_err());
    assert!(set_config_value(&mut config, "aggregation.cache_ttl_seconds", "-1").is_err());
    assert!(set_config_value(&mut config, "aggregation.language_percentage", "median").is_err());
    assert!(set_config_value(&mut config, "authentication.auth_method", "app").is_err());

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".gh-stats.toml");
    let path = path.to_str().unwrap();

    init_config(Some(path)).unwrap();
    let result = init_config(Some(path));

    assert!(matches!(result, Err(CliError::ConfigError(ref m)) if m.contains("already exists")));
}

#[test]
fn test_set_then_validate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".gh-stats.toml");
    let path = path.to_str().unwrap();

    set_config(Some(path), "aggregation.page_size", "10").unwrap();

    validate_config(Some(path)).unwrap();
    assert_eq!(
        AppConfig::load(std::path::Path::new(path))
            .unwrap()
            .aggregation
            .page_size,
        10
    );
}

#[test]
fn test_validate_rejects_out_of_range_page_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".gh-stats.toml");
    std::fs::write(&path, "[aggregation]\npage_size = 500\n").unwrap();

    let result = validate_config(path.to_str());

    assert!(matches!(result, Err(CliError::ConfigError(_))));
}
