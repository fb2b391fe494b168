use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shoplist.db";
pub const DEFAULT_STORAGE_KEY: &str = "list:items";
pub const DEFAULT_LOG_FILE: &str = "shoplist.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, layered from defaults, an optional `shoplist.toml` and
/// `SHOPLIST_*` environment variables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub storage_key: String,
    pub log_file: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

pub fn get_configuration() -> Result<Settings> {
    build_configuration(
        File::new("shoplist", FileFormat::Toml).required(false),
        Environment::with_prefix("SHOPLIST"),
    )
}

fn build_configuration(
    file: File<config::FileSourceFile, FileFormat>,
    environment: Environment,
) -> Result<Settings> {
    let settings = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("storage_key", DEFAULT_STORAGE_KEY)?
        .set_default("log_file", DEFAULT_LOG_FILE)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .add_source(file)
        .add_source(environment)
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use std::io::Write;

    fn missing_file() -> File<config::FileSourceFile, FileFormat> {
        File::new("does/not/exist/shoplist", FileFormat::Toml).required(false)
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix("SHOPLIST").source(Some(source))
    }

    #[test]
    fn test_defaults_when_no_file() {
        let settings = build_configuration(missing_file(), environment(&[]))
            .expect("Failed to build configuration");

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("shoplist-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
        let path = dir.join("shoplist.toml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(file, "storage_key = \"list:pharmacy\"\nlog_level = \"debug\"")
            .expect("Failed to write config file");

        let settings = build_configuration(
            File::from(path.clone()).format(FileFormat::Toml),
            environment(&[("SHOPLIST_LOG_LEVEL", "trace")]),
        )
        .expect("Failed to build configuration");

        assert_eq!(settings.storage_key, "list:pharmacy");
        // environment wins over the file
        assert_eq!(settings.log_level, "trace");
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);

        std::fs::remove_dir_all(&dir).expect("Failed to remove temp dir");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = build_configuration(
            missing_file(),
            environment(&[
                ("SHOPLIST_DATABASE_URL", "sqlite://elsewhere.db"),
                ("SHOPLIST_STORAGE_KEY", "list:weekend"),
                ("OTHER_LOG_FILE", "ignored.log"),
            ]),
        )
        .expect("Failed to build configuration");

        assert_eq!(settings.database_url, "sqlite://elsewhere.db");
        assert_eq!(settings.storage_key, "list:weekend");
        assert_eq!(settings.log_file, DEFAULT_LOG_FILE);
        assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
    }
}
