//! Configuration for the result aggregation service.
use std::env;

const DEFAULT_POSTGRES_HOST: &str = "db";
const DEFAULT_POSTGRES_PORT: u16 = 5432;
const DEFAULT_POSTGRES_USER: &str = "postgres";
const DEFAULT_POSTGRES_PASSWORD: &str = "postgres";
const DEFAULT_POSTGRES_DB: &str = "votes";
const DEFAULT_POOL_SIZE: u32 = 5;
const DEFAULT_PORT: u16 = 5001;

/// Runtime configuration for the results process.
#[derive(Debug, Clone)]
pub struct ResultsConfig {
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_db: String,
    pub pool_size: u32,
    pub port: u16,
}

impl ResultsConfig {
    /// Reads configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `POSTGRES_HOST`: store host (default: db)
    /// - `POSTGRES_PORT`: store port (default: 5432)
    /// - `POSTGRES_USER`: store user (default: postgres)
    /// - `POSTGRES_PASSWORD`: store password (default: postgres)
    /// - `POSTGRES_DB`: database name (default: votes)
    /// - `POSTGRES_POOL_SIZE`: store connection pool size (default: 5)
    /// - `PORT`: HTTP listen port (default: 5001)
    pub fn from_env() -> Self {
        Self {
            postgres_host: env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| DEFAULT_POSTGRES_HOST.to_string()),
            postgres_port: env::var("POSTGRES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POSTGRES_PORT),
            postgres_user: env::var("POSTGRES_USER")
                .unwrap_or_else(|_| DEFAULT_POSTGRES_USER.to_string()),
            postgres_password: env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_POSTGRES_PASSWORD.to_string()),
            postgres_db: env::var("POSTGRES_DB").unwrap_or_else(|_| DEFAULT_POSTGRES_DB.to_string()),
            pool_size: env::var("POSTGRES_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POOL_SIZE),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Connection string for the vote store.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_db
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env_vars() {
        for key in [
            "POSTGRES_HOST",
            "POSTGRES_PORT",
            "POSTGRES_USER",
            "POSTGRES_PASSWORD",
            "POSTGRES_DB",
            "POSTGRES_POOL_SIZE",
            "PORT",
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_unset() {
        clear_env_vars();

        let config = ResultsConfig::from_env();
        assert_eq!(config.database_url(), "postgres://postgres:postgres@db:5432/votes");
        assert_eq!(config.port, 5001);
        assert_eq!(config.pool_size, 5);
    }

    #[test]
    #[serial]
    fn listen_port_is_overridable() {
        clear_env_vars();
        unsafe {
            env::set_var("PORT", "8080");
        }

        let config = ResultsConfig::from_env();
        assert_eq!(config.port, 8080);

        clear_env_vars();
    }
}
