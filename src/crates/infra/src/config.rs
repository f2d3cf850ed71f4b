use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("database_url is not set (APP__DATABASE_URL or DATABASE_URL)")]
    MissingDatabaseUrl,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 连接池配置
    database: RawDatabaseConfig,
    /// 服务器配置
    server: RawServerConfig,
    /// 允许跨域的来源，为空时放行全部
    cors_allowed_origins: Vec<String>,
    /// 启动时执行未应用的迁移
    auto_migrate: bool,
    /// 日志文件路径
    log_file: String,
}

/// 连接池配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDatabaseConfig {
    max_connections: u32,
    min_connections: u32,
    connect_timeout_secs: u64,
    acquire_timeout_secs: u64,
    idle_timeout_secs: u64,
    sqlx_logging: bool,
}

impl Default for RawDatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 3,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 60,
            sqlx_logging: false,
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            database: RawDatabaseConfig::default(),
            server: RawServerConfig::default(),
            cors_allowed_origins: Vec::new(),
            auto_migrate: true,
            log_file: "app.log".to_string(),
        }
    }
}

/// 连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    database: DatabaseConfig,
    server: ServerConfig,
    cors_allowed_origins: Vec<String>,
    auto_migrate: bool,
    log_file: String,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let database = DatabaseConfig {
            url: data.database_url,
            max_connections: data.database.max_connections,
            min_connections: data.database.min_connections,
            connect_timeout: Duration::from_secs(data.database.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(data.database.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(data.database.idle_timeout_secs),
            sqlx_logging: data.database.sqlx_logging,
        };
        let server = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        AppConfigImpl {
            database,
            server,
            cors_allowed_origins: data.cors_allowed_origins,
            auto_migrate: data.auto_migrate,
            log_file: data.log_file,
        }
    }

    /// Reads `config.toml` (optional) then `APP__*` environment variables.
    /// A bare `DATABASE_URL` is accepted when `database_url` is not configured.
    pub fn load() -> Result<AppConfigImpl, ConfigError> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            )
            .build()?;

        Self::from_config(config, std::env::var("DATABASE_URL").ok())
    }

    fn from_config(
        config: Config,
        fallback_database_url: Option<String>,
    ) -> Result<AppConfigImpl, ConfigError> {
        let mut raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        if raw.database_url.is_empty() {
            raw.database_url = fallback_database_url.unwrap_or_default();
        }
        if raw.database_url.is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(AppConfigImpl::new(raw))
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone()
    }

    pub fn database_url(&self) -> String {
        self.database.url.clone()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn cors_allowed_origins(&self) -> &[String] {
        &self.cors_allowed_origins
    }

    pub fn auto_migrate(&self) -> bool {
        self.auto_migrate
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}
