use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default so a bare checkout starts against a local file database.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub environment: String,
    pub rust_log: String,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", "sqlite://data/profile.db"),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            frontend_url: env_or("FRONTEND_URL", "http://localhost:3000"),
            environment: env_or("APP_ENV", "development"),
            rust_log: env_or("RUST_LOG", "info"),
            seed_sample_data: parse_flag(&env_or("SEED_SAMPLE_DATA", "false"))
                .context("SEED_SAMPLE_DATA must be true or false")?,
        })
    }

    /// Internal error details are only ever exposed outside production.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognised boolean value '{other}'"),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            frontend_url: "http://localhost:3000".to_string(),
            environment: "test".to_string(),
            rust_log: "debug".to_string(),
            seed_sample_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy() {
        for v in ["1", "true", "TRUE", "yes", "on", " true "] {
            assert!(parse_flag(v).unwrap(), "{v} should parse as true");
        }
    }

    #[test]
    fn test_parse_flag_falsy() {
        for v in ["0", "false", "no", "off", ""] {
            assert!(!parse_flag(v).unwrap(), "{v} should parse as false");
        }
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_production_detection() {
        let mut config = Config::for_tests();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
