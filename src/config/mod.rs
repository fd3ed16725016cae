// ==========================================
// ISO 8573 压缩空气配置工具 - 配置层
// ==========================================
// 职责: 引擎参数（干燥机类型代码、水分等级别名）
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod engine_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager};
pub use engine_config::{EngineConfig, DEFAULT_DRYER_TYPE_CODES};
