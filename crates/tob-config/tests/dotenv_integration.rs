//! `.env` loading through `TobConfig::load_with_dotenv`.
//!
//! `dotenvy` writes straight into the process environment, so these tests
//! live in their own binary and each touches a different variable.

use figment::Jail;
use pretty_assertions::assert_eq;
use tob_config::TobConfig;

#[test]
fn dotenv_values_flow_through_figment() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TOB_DATASTORE__PROJECT_ID=from-dotenv\n")?;

        let config = TobConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.datastore.project_id, "from-dotenv");
        Ok(())
    });
}

#[test]
fn process_env_beats_dotenv() {
    Jail::expect_with(|jail| {
        jail.set_env("TOB_DATASTORE__DATABASE_ID", "from-env");
        jail.create_file(".env", "TOB_DATASTORE__DATABASE_ID=from-dotenv\n")?;

        let config = TobConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.datastore.database_id, "from-env");
        Ok(())
    });
}

#[test]
fn missing_dotenv_is_not_an_error() {
    Jail::expect_with(|_jail| {
        assert!(TobConfig::load_with_dotenv().is_ok());
        Ok(())
    });
}
