use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8010`).
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var | Default   |
    /// |---------|-----------|
    /// | `HOST`  | `0.0.0.0` |
    /// | `PORT`  | `8010`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8010".into())
            .parse()
            .expect("PORT must be a valid u16");

        Self { host, port }
    }
}

/// Database connection parameters.
///
/// TLS negotiation is always disabled when connecting.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database name.
    pub name: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    /// Load database parameters from environment variables with defaults.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | (empty)     |
    /// | `DB_NAME`            | `people`    |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());

        let port: u16 = lookup("DB_PORT")
            .unwrap_or_else(|| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        let user = lookup("DB_USER").unwrap_or_else(|| "postgres".into());
        let password = lookup("DB_PASSWORD").unwrap_or_default();
        let name = lookup("DB_NAME").unwrap_or_else(|| "people".into());

        let max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            user,
            password,
            name,
            max_connections,
        }
    }

    /// Build sqlx connect options with TLS disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults_bind_all_interfaces_on_8010() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8010);
    }

    #[test]
    fn server_reads_overrides() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "9000")]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn server_rejects_non_numeric_port() {
        ServerConfig::from_lookup(lookup_from(&[("PORT", "http")]));
    }

    #[test]
    fn db_defaults() {
        let config = DbConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "");
        assert_eq!(config.name, "people");
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn db_connect_options_carry_credentials() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("DB_USER", "svc"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "directory"),
        ]));
        let options = config.connect_options();
        assert_eq!(options.get_username(), "svc");
        assert_eq!(options.get_database(), Some("directory"));
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
    }
}
