use crate::auth::jwt::JwtConfig;

/// Default maximum number of pooled database connections.
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
        }
    }
}

/// Database connection settings shared by the server and the seeding tool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// | Env Var              | Required | Default |
    /// |----------------------|----------|---------|
    /// | `DATABASE_URL`       | **yes**  | --      |
    /// | `DB_MAX_CONNECTIONS` | no       | `10`    |
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is not set.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            max_connections,
        }
    }
}

/// Bootstrap admin credentials, read only by the `folio-seed` tool.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl SeedConfig {
    /// | Env Var                  | Required | Default             |
    /// |--------------------------|----------|---------------------|
    /// | `ADMIN_DEFAULT_EMAIL`    | no       | `admin@example.com` |
    /// | `ADMIN_DEFAULT_PASSWORD` | **yes**  | --                  |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_DEFAULT_PASSWORD` is not set or is empty.
    pub fn from_env() -> Self {
        let admin_email =
            std::env::var("ADMIN_DEFAULT_EMAIL").unwrap_or_else(|_| "admin@example.com".into());

        let admin_password = std::env::var("ADMIN_DEFAULT_PASSWORD")
            .expect("ADMIN_DEFAULT_PASSWORD must be set in the environment");
        assert!(
            !admin_password.is_empty(),
            "ADMIN_DEFAULT_PASSWORD must not be empty"
        );

        Self {
            admin_email,
            admin_password,
        }
    }
}
