// ==========================================
// ISO 8573 压缩空气配置工具 - 领域模型层
// ==========================================
// 职责: 定义目录实体、值对象、生成结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod catalog;
pub mod configuration;
pub mod types;

// 重导出核心类型
pub use catalog::{
    format_flow, Application, BaseConfiguration, FlowBounds, FlowRange, Industry, PurityLevel,
    PurityLevelEntry, PurityLevelsGrouped, SlotPosition, SLOT_COUNT,
};
pub use configuration::{
    ComponentConfiguration, FlowOption, GeneratedConfiguration, GenerationResult,
    NO_DRYER_CONFIGURATION_NAME, NO_DRYER_PRODUCT_RANGE, NO_DRYER_TYPE,
};
pub use types::{Dewpoint, IsoClass, PurityClassType, NOT_SPECIFIED};
