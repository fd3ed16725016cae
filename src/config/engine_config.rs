use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 默认可识别的干燥机类型代码
pub const DEFAULT_DRYER_TYPE_CODES: [&str; 9] = [
    "QCMD", "QHD", "QHP", "QBP", "QED", "QPVS", "COOL", "QPNC", "QMD",
];

/// 配置生成引擎参数
///
/// 默认值覆盖全部目录数据；可由 config_kv（scope_id='global'）覆写
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 可识别的干燥机类型代码（封闭集合）
    #[serde(default = "default_dryer_type_codes")]
    pub dryer_type_codes: Vec<String>,

    /// 水分等级查询别名（"5" 复用 "4" 的产品区间）
    #[serde(default = "default_water_class_aliases")]
    pub water_class_aliases: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dryer_type_codes: default_dryer_type_codes(),
            water_class_aliases: default_water_class_aliases(),
        }
    }
}

fn default_dryer_type_codes() -> Vec<String> {
    DEFAULT_DRYER_TYPE_CODES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_water_class_aliases() -> BTreeMap<String, String> {
    BTreeMap::from([("5".to_string(), "4".to_string())])
}
