// ==========================================
// ISO 8573 压缩空气配置工具 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供目录数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod application_repo;
pub mod catalog_store;
pub mod error;
pub mod flow_range_repo;
pub mod iso_configuration_repo;
pub mod memory_catalog;
pub mod purity_level_repo;
pub mod sqlite_catalog;

// 重导出核心仓储
pub use application_repo::ApplicationRepository;
pub use catalog_store::{CatalogStore, FlowRangeQuery};
pub use error::{RepositoryError, RepositoryResult};
pub use flow_range_repo::FlowRangeRepository;
pub use iso_configuration_repo::IsoConfigurationRepository;
pub use memory_catalog::InMemoryCatalogStore;
pub use purity_level_repo::PurityLevelRepository;
pub use sqlite_catalog::SqliteCatalogStore;
