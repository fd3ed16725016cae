// ==========================================
// ISO 8573 压缩空气配置工具 - API 层
// ==========================================
// 职责: 输入校验、错误转换,供命令行与嵌入方调用
// ==========================================

pub mod catalog_api;
pub mod configuration_api;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use catalog_api::CatalogApi;
pub use configuration_api::{ConfigurationApi, GenerateRequest, GenerateResponse};
pub use error::{ApiError, ApiResult};
