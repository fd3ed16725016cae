// ==========================================
// ISO 8573 压缩空气配置工具 - 输入校验
// ==========================================
// 职责: 调用方输入在进入引擎之前的边界校验
// 规则:
// - 纯度等级: "-" 或数字 (键以 "." 分隔,不允许出现 ".")
// - 流量: 有限数值且 >= 0
// - 行业/应用名称: 非空
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::{PurityClassType, NOT_SPECIFIED};

/// 校验单个纯度等级，返回去除首尾空白后的值
pub fn validate_purity_class(class_type: PurityClassType, value: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidInput(format!("{}等级不能为空", class_type)));
    }

    if value == NOT_SPECIFIED || value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(ApiError::InvalidInput(format!(
            "{}等级无效: {} (应为数字或 \"-\")",
            class_type, value
        )))
    }
}

/// 校验流量 (CFM)
pub fn validate_flow(flow: Option<f64>) -> ApiResult<Option<f64>> {
    match flow {
        None => Ok(None),
        Some(value) if !value.is_finite() => {
            Err(ApiError::InvalidInput(format!("流量必须为有限数值: {}", value)))
        }
        Some(value) if value < 0.0 => {
            Err(ApiError::InvalidInput(format!("流量不能为负数: {}", value)))
        }
        Some(value) => Ok(Some(value)),
    }
}

/// 解析命令行/文本形式的流量
pub fn parse_flow(text: &str) -> ApiResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidInput(format!("流量不是数值: {}", text)))?;
    validate_flow(Some(value))?;
    Ok(value)
}

/// 校验名称类字段 (行业、应用)
pub fn validate_name(field: &str, value: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidInput(format!("{}不能为空", field)));
    }
    Ok(value.to_string())
}
