use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Connection parameters for the student database.
///
/// The URL may also arrive through the `DATABASE_URL` environment variable;
/// the binary resolves that override before handing the settings to the
/// store, so an empty value here is only an error at connect time.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string (e.g. "postgres://user@localhost/school").
    #[serde(default)]
    pub url: String,

    /// Upper bound on pooled connections. The tool is single-user, so the
    /// default is generous rather than tuned.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long to wait for a connection from the pool before giving up.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}
