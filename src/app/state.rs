// ==========================================
// ISO 8573 压缩空气配置工具 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, CatalogApi, ConfigurationApi};
use crate::config::{ConfigManager, EngineConfig};
use crate::engine::ConfigurationService;
use crate::repository::SqliteCatalogStore;

/// 应用状态
///
/// 所有仓储、配置管理器共享同一 SQLite 连接
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 目录存储
    pub catalog: Arc<SqliteCatalogStore>,

    /// 生效的引擎参数
    pub engine_config: EngineConfig,

    /// 配置生成API
    pub configuration_api: Arc<ConfigurationApi<SqliteCatalogStore>>,

    /// 目录浏览API
    pub catalog_api: Arc<CatalogApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 1. 打开数据库并确保表结构存在
    /// 2. 读取引擎参数 (默认值 + config_kv 覆写)
    /// 3. 创建引擎与API实例
    pub fn new(db_path: String) -> ApiResult<Self> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let catalog = Arc::new(SqliteCatalogStore::open(&db_path)?);

        let config_manager = ConfigManager::from_connection(catalog.connection())?;
        let engine_config = config_manager.load_engine_config()?;

        let service = Arc::new(ConfigurationService::new(catalog.clone(), &engine_config));
        let configuration_api = Arc::new(ConfigurationApi::new(service));
        let catalog_api = Arc::new(CatalogApi::new(
            catalog.purity_level_repo.clone(),
            catalog.application_repo.clone(),
            catalog.iso_configuration_repo.clone(),
        ));

        let schema_version = catalog.schema_version()?;
        tracing::info!(
            schema_version = ?schema_version,
            dryer_type_codes = engine_config.dryer_type_codes.len(),
            "AppState初始化完成"
        );

        Ok(Self {
            db_path,
            catalog,
            engine_config,
            configuration_api,
            catalog_api,
        })
    }
}

/// 获取默认数据库路径
///
/// 优先级: 环境变量 ISO_AIR_CONFIGURATOR_DB_PATH > 用户数据目录 > 当前目录
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("ISO_AIR_CONFIGURATOR_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./iso_air_configurator.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("iso-air-configurator");
        // 目录创建失败时退回当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("iso_air_configurator.db");
        }
    }

    path.to_string_lossy().to_string()
}
