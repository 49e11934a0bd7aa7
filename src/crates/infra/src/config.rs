use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::sync::RwLock;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 开发模式下错误响应携带详细信息
    dev_mode: bool,
    /// 统计配置
    stats: RawStatsConfig,
    /// 服务器配置
    server: RawServerConfig,
}

/// 统计配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawStatsConfig {
    /// 详情页统计来源："mock" 或 "persisted"
    mode: String,
    /// stats 接口响应缓存窗口（秒）
    cache_max_age_secs: u64,
    /// stale-while-revalidate 窗口（秒）
    cache_swr_secs: u64,
}

impl Default for RawStatsConfig {
    fn default() -> Self {
        Self {
            mode: "mock".to_string(),
            cache_max_age_secs: 10,
            cache_swr_secs: 30,
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
            port: 5641,
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            dev_mode: false,
            stats: RawStatsConfig::default(),
            server: RawServerConfig::default(),
        }
    }
}

/// 统计配置
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub mode: String,
    pub cache_max_age_secs: u64,
    pub cache_swr_secs: u64,
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
    pub database_url: Arc<RwLock<String>>,
    pub dev_mode: Arc<AtomicBool>,
    pub stats: Arc<RwLock<StatsConfig>>,
    pub server: Arc<RwLock<ServerConfig>>,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let stats_config = StatsConfig {
            mode: data.stats.mode,
            cache_max_age_secs: data.stats.cache_max_age_secs,
            cache_swr_secs: data.stats.cache_swr_secs,
        };
        let server_config = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        AppConfigImpl {
            database_url: Arc::new(RwLock::new(data.database_url)),
            dev_mode: Arc::new(AtomicBool::new(data.dev_mode)),
            stats: Arc::new(RwLock::new(stats_config)),
            server: Arc::new(RwLock::new(server_config)),
        }
    }

    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }

    pub fn database_url(&self) -> String {
        let cfg_val = self.database_url.read().unwrap();
        (*cfg_val).clone()
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> StatsConfig {
        let cfg_val = self.stats.read().unwrap();
        cfg_val.clone()
    }

    pub fn server(&self) -> ServerConfig {
        let cfg_val = self.server.read().unwrap();
        cfg_val.clone()
    }
}
