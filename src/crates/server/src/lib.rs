pub mod admin;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod middleware;

use application::stats::StatsMode;
use infra::config::AppConfigImpl;
use sea_orm::DatabaseConnection;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, Statement};

pub struct AppState {
    pub app_cfg: AppConfigImpl,
    pub db: DatabaseConnection,
    pub stats_mode: StatsMode,
}

impl AppState {
    pub async fn init_db(db_url: &str) -> DatabaseConnection {
        use log::info;
        use std::time::Duration;

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(50)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(3))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(300))
            .sqlx_logging(false)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        let backend = DbBackend::Postgres;
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await
            .expect("Failed to execute test query");

        info!("Database connection pool initialized successfully");
        db
    }

    pub fn new(db: DatabaseConnection, app_cfg: AppConfigImpl) -> Self {
        let stats_mode = app_cfg
            .stats()
            .mode
            .parse::<StatsMode>()
            .expect("invalid stats.mode in config");
        error::set_dev_mode(app_cfg.dev_mode());
        Self {
            app_cfg,
            db,
            stats_mode,
        }
    }
}
