use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_DB_CONNECTIONS)
    );
    assert_that!(config.idempotency.enabled, eq(true));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("config");
    let _dir = EnvGuard::set("MG_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [database]
            path = "tenants.db"
            max_connections = 8

            [logging]
            level = "debug"
            colored = false

            [validation]
            max_name_length = 80
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path, eq("tenants.db"));
    assert_that!(config.database.max_connections, eq(8));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.validation.max_name_length, eq(80));
    // Unspecified values keep their defaults
    assert_that!(
        config.validation.max_description_length,
        eq(crate::validation_config::DEFAULT_MAX_DESCRIPTION_LENGTH)
    );
}

#[test]
#[serial]
fn given_toml_and_env_override_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [database]
            path = "from-toml.db"
        "#,
    )
    .unwrap();
    let _path = EnvGuard::set("MG_DATABASE_PATH", "from-env.db");
    let _idem = EnvGuard::set("MG_IDEMPOTENCY_ENABLED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path, eq("from-env.db"));
    assert_that!(config.idempotency.enabled, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _conn = EnvGuard::set("MG_DATABASE_MAX_CONNECTIONS", "many");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_DB_CONNECTIONS)
    );
}

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME)));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("MG_LOG_FILE", "mg.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(
        path,
        some(eq(&temp.path().join(crate::DEFAULT_LOG_DIRECTORY).join("mg.log")))
    );
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[database\npath = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("MG_DATABASE_PATH", "/etc/projects.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("MG_DATABASE_PATH", "../outside.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _conn = EnvGuard::set("MG_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_log_file_with_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("MG_LOG_FILE", "logs/mg.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_retention_below_minimum_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _ret = EnvGuard::set("MG_IDEMPOTENCY_RETENTION_SECS", "1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
