// ==========================================
// ISO 8573 压缩空气配置工具 - 应用层
// ==========================================
// 职责: 组装共享状态,渲染命令行输出
// ==========================================

pub mod report;
pub mod state;

// 重导出
pub use report::render_result;
pub use state::{get_default_db_path, AppState};
