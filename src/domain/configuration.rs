// ==========================================
// ISO 8573 压缩空气配置工具 - 生成结果
// ==========================================
// 职责: 配置生成引擎的唯一输出契约
// 红线: 每次请求新建,构造后不再修改
// ==========================================

use crate::domain::catalog::FlowRange;
use crate::domain::types::Dewpoint;
use serde::{Deserialize, Serialize};

/// 无干燥机分支的干燥机类型
pub const NO_DRYER_TYPE: &str = "N/A";
/// 无干燥机分支的配置名
pub const NO_DRYER_CONFIGURATION_NAME: &str = "No Dryer Required";
/// 无干燥机分支的流量选项名
pub const NO_DRYER_PRODUCT_RANGE: &str = "No dryer required";

// ==========================================
// FlowOption - 流量选项
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowOption {
    pub product_range: String,
    pub flow_range: String,
    pub min_flow: Option<f64>,
    pub max_flow: Option<f64>,
}

impl FlowOption {
    pub fn from_range(range: &FlowRange) -> Self {
        Self {
            product_range: range.product_range.clone(),
            flow_range: range.flow_range_label(),
            min_flow: Some(range.min_flow),
            max_flow: Some(range.max_flow),
        }
    }

    pub fn no_dryer() -> Self {
        Self {
            product_range: NO_DRYER_PRODUCT_RANGE.to_string(),
            flow_range: "N/A".to_string(),
            min_flow: None,
            max_flow: None,
        }
    }
}

// ==========================================
// ComponentConfiguration - 有序组件列表
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfiguration {
    pub components: Vec<String>,
    /// 替换到干燥机槽位的产品系列名；无干燥机时为 None
    pub product_range_name: Option<String>,
}

// ==========================================
// GeneratedConfiguration - 单个干燥机类型分支
// ==========================================
/// `flow_options` 与 `component_configurations` 等长，按下标一一对应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedConfiguration {
    pub dryer_type: String,
    pub dewpoint: Option<Dewpoint>,
    pub configuration_name: String,
    pub flow_options: Vec<FlowOption>,
    pub component_configurations: Vec<ComponentConfiguration>,
    pub compressor: String,
    pub iso_class: String,
}

impl GeneratedConfiguration {
    /// "QCMD (-40F)"，无露点时仅为类型名
    pub fn configuration_name_for(dryer_type: &str, dewpoint: Option<Dewpoint>) -> String {
        match dewpoint {
            Some(dp) => format!("{} ({})", dryer_type, dp),
            None => dryer_type.to_string(),
        }
    }

    pub fn is_no_dryer(&self) -> bool {
        self.dryer_type == NO_DRYER_TYPE
    }

    /// (流量选项, 组件列表) 成对遍历
    pub fn options(&self) -> impl Iterator<Item = (&FlowOption, &ComponentConfiguration)> {
        self.flow_options
            .iter()
            .zip(self.component_configurations.iter())
    }
}

// ==========================================
// GenerationResult - 生成结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_class: Option<String>,
    #[serde(default)]
    pub flow: Option<f64>,
    pub configurations: Vec<GeneratedConfiguration>,
}

impl GenerationResult {
    /// 未找到 (软失败)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            iso_class: None,
            flow: None,
            configurations: Vec::new(),
        }
    }

    /// ISO 等级已找到：按分支数量生成提示信息
    pub fn found(
        iso_class: impl Into<String>,
        flow: Option<f64>,
        configurations: Vec<GeneratedConfiguration>,
    ) -> Self {
        let message = if configurations.is_empty() {
            "No compatible configurations found for this flow".to_string()
        } else {
            format!("Found {} configuration(s)", configurations.len())
        };

        Self {
            success: true,
            message,
            iso_class: Some(iso_class.into()),
            flow,
            configurations,
        }
    }

    /// ISO 等级已找到但不含干燥机
    pub fn no_dryer(
        iso_class: impl Into<String>,
        flow: Option<f64>,
        configuration: GeneratedConfiguration,
    ) -> Self {
        Self {
            success: true,
            message: "Configuration found (no dryer specified)".to_string(),
            iso_class: Some(iso_class.into()),
            flow,
            configurations: vec![configuration],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
