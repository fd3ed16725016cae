// ==========================================
// ISO 8573 压缩空气配置工具 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 纯度等级 → 设备配置 的生成引擎
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 目录数据访问
pub mod repository;

// 引擎层 - 配置生成
pub mod engine;

// 配置层 - 引擎参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/表结构）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 输入校验与错误转换
pub mod api;

// 应用层 - 状态组装与报告
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Dewpoint, IsoClass, PurityClassType};

// 领域实体
pub use domain::{
    BaseConfiguration, ComponentConfiguration, FlowOption, FlowRange, GeneratedConfiguration,
    GenerationResult, SlotPosition,
};

// 仓储
pub use repository::{CatalogStore, InMemoryCatalogStore, SqliteCatalogStore};

// 引擎
pub use engine::{ConfigurationAssembler, ConfigurationService, DryerSpecParser, ProductRangeMatcher};

// API
pub use api::{ApiError, ApiResult, ConfigurationApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "ISO 8573 压缩空气配置工具";
