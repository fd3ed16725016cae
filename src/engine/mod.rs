// ==========================================
// ISO 8573 压缩空气配置工具 - 引擎层
// ==========================================
// 职责: 干燥机规格解析、产品区间匹配、配置组装
// 红线: Engine 不拼 SQL,目录访问只经 CatalogStore
// ==========================================

pub mod assembler;
pub mod configuration_service;
pub mod dryer_spec;
pub mod range_matcher;

// 重导出核心引擎
pub use assembler::ConfigurationAssembler;
pub use configuration_service::ConfigurationService;
pub use dryer_spec::{DryerOption, DryerSpec, DryerSpecParser};
pub use range_matcher::ProductRangeMatcher;
