// ==========================================
// ISO 8573 压缩空气配置工具 - 干燥机规格解析器
// ==========================================
// 文法:
//   slot    := option ("/" option)*
//   option  := prefix (ws | "(") ...
//   露点标注 := "(-100F)" | "(-100)" | "(-40F)" | "(-40)" | "(-5F)" | "(-5)"
// 规则: 露点从整个槽位文本解析一次,所有选项共用
// ==========================================

use crate::config::EngineConfig;
use crate::domain::catalog::{BaseConfiguration, SlotPosition};
use crate::domain::types::Dewpoint;
use serde::{Deserialize, Serialize};

/// 干燥机备选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryerOption {
    /// 类型前缀，用于流量区间匹配 (如 "QCMD")
    pub type_prefix: String,
    pub raw_option: String,
}

/// 解析后的干燥机槽位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryerSpec {
    pub raw_text: String,
    pub position: SlotPosition,
    pub options: Vec<DryerOption>,
    pub dewpoint: Option<Dewpoint>,
}

impl DryerSpec {
    /// 解析槽位原文
    pub fn parse(raw_text: &str, position: SlotPosition) -> Self {
        let options = split_options(raw_text)
            .into_iter()
            .map(|raw_option| DryerOption {
                type_prefix: extract_type_prefix(&raw_option),
                raw_option,
            })
            .collect();

        Self {
            raw_text: raw_text.to_string(),
            position,
            options,
            dewpoint: extract_dewpoint(raw_text),
        }
    }

    /// 去重后的类型前缀（保持首次出现顺序，忽略空前缀）
    pub fn distinct_type_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = Vec::new();
        for option in &self.options {
            let prefix = option.type_prefix.as_str();
            if !prefix.is_empty() && !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
        prefixes
    }
}

// ==========================================
// DryerSpecParser - 干燥机槽位定位
// ==========================================
pub struct DryerSpecParser {
    dryer_type_codes: Vec<String>,
}

impl DryerSpecParser {
    pub fn new(dryer_type_codes: Vec<String>) -> Self {
        Self { dryer_type_codes }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.dryer_type_codes.clone())
    }

    /// 槽位文本是否编码了干燥机备选
    ///
    /// 条件: 含 "/" 或 "(-"，且含任一已知干燥机代码
    pub fn is_dryer_slot(&self, raw_text: &str) -> bool {
        let has_marker = raw_text.contains('/') || raw_text.contains("(-");
        has_marker
            && self
                .dryer_type_codes
                .iter()
                .any(|code| !code.is_empty() && raw_text.contains(code.as_str()))
    }

    /// 按 QAS1..QAS9 顺序扫描，返回第一个干燥机槽位
    pub fn locate(&self, base: &BaseConfiguration) -> Option<DryerSpec> {
        base.occupied_slots()
            .find(|(_, raw)| self.is_dryer_slot(raw))
            .map(|(position, raw)| DryerSpec::parse(raw, position))
    }
}

/// 按优先级提取露点: -100F > -40F > -5F
pub fn extract_dewpoint(raw_text: &str) -> Option<Dewpoint> {
    Dewpoint::PRIORITY.into_iter().find(|dp| {
        dp.annotations()
            .iter()
            .any(|annotation| raw_text.contains(annotation))
    })
}

/// 按 "/" 拆分备选项，去除首尾空白，丢弃空项
pub fn split_options(raw_text: &str) -> Vec<String> {
    raw_text
        .split('/')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// 类型前缀: 截取到第一个空白或 "(" 之前
pub fn extract_type_prefix(option: &str) -> String {
    option
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
