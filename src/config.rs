use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub environment: Environment,
    pub db_max_connections: u32,
}

/// Runtime profile selected by the `ENV` variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("DEVELOPMENT") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => url,
            _ => postgres_url(&lookup)?,
        };

        let server_port = match lookup("HTTP_PORT") {
            Some(port) => parse_port(&port)?,
            None => 8080,
        };

        let environment = Environment::parse(lookup("ENV").as_deref());

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Config {
            database_url,
            server_port,
            environment,
            db_max_connections,
        })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }

    /// Origin allowed by the CORS layer.
    pub fn allowed_origin(&self) -> String {
        format!("http://localhost:{}", self.server_port)
    }
}

fn postgres_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

    let user = var("POSTGRES_USER")?;
    let password = var("POSTGRES_PASSWORD")?;
    let host = var("POSTGRES_HOSTNAME")?;
    let port = var("POSTGRES_PORT")?;
    let database = var("POSTGRES_DB")?;
    let ssl_mode = lookup("POSTGRES_SSL").unwrap_or_else(|| "disable".to_string());

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        user, password, host, port, database, ssl_mode
    ))
}

// Accepts both "8080" and the listen-address form ":8080".
fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .trim_start_matches(':')
        .parse()
        .map_err(|_| ConfigError::InvalidPort(value.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}
