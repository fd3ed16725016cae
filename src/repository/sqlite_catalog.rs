// ==========================================
// ISO 8573 压缩空气配置工具 - SQLite 目录存储
// ==========================================
// 职责: 聚合各表仓储,实现 CatalogStore
// 目标: 引擎只依赖 trait,不感知存储引擎
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::domain::catalog::{BaseConfiguration, FlowRange};
use crate::domain::types::IsoClass;
use crate::repository::catalog_store::{CatalogStore, FlowRangeQuery};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{
    ApplicationRepository, FlowRangeRepository, IsoConfigurationRepository, PurityLevelRepository,
};

/// SQLite 目录存储
///
/// 四个仓储共享同一连接。
#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
    /// 基础配置仓储
    pub iso_configuration_repo: Arc<IsoConfigurationRepository>,
    /// 流量区间仓储
    pub flow_range_repo: Arc<FlowRangeRepository>,
    /// 行业/应用仓储
    pub application_repo: Arc<ApplicationRepository>,
    /// 纯度描述仓储
    pub purity_level_repo: Arc<PurityLevelRepository>,
}

impl SqliteCatalogStore {
    /// 打开数据库文件并确保表结构存在
    pub fn open(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        crate::db::init_catalog_schema(&conn)?;
        Ok(Self::from_connection(Arc::new(Mutex::new(conn))))
    }

    /// 内存数据库（测试/临时使用）
    pub fn open_in_memory() -> RepositoryResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::configure_sqlite_connection(&conn)?;
        crate::db::init_catalog_schema(&conn)?;
        Ok(Self::from_connection(Arc::new(Mutex::new(conn))))
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            iso_configuration_repo: Arc::new(IsoConfigurationRepository::from_connection(
                conn.clone(),
            )),
            flow_range_repo: Arc::new(FlowRangeRepository::from_connection(conn.clone())),
            application_repo: Arc::new(ApplicationRepository::from_connection(conn.clone())),
            purity_level_repo: Arc::new(PurityLevelRepository::from_connection(conn.clone())),
            conn,
        }
    }

    /// 共享连接（供 ConfigManager 复用）
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    /// 当前库的 schema_version
    pub fn schema_version(&self) -> RepositoryResult<Option<i64>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(crate::db::read_schema_version(&conn)?)
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn find_base_configuration(&self, iso_class: &str) -> RepositoryResult<Option<BaseConfiguration>> {
        self.iso_configuration_repo.find_by_iso_class(iso_class)
    }

    fn find_flow_ranges(&self, query: &FlowRangeQuery) -> RepositoryResult<Vec<FlowRange>> {
        self.flow_range_repo.find_matching(query)
    }

    fn find_application(
        &self,
        industry_name: &str,
        application_name: &str,
    ) -> RepositoryResult<Option<IsoClass>> {
        self.application_repo
            .find_iso_class(industry_name, application_name)
    }
}
