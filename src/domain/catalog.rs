// ==========================================
// ISO 8573 压缩空气配置工具 - 目录实体
// ==========================================
// 职责: 基础配置 (9 槽位)、流量区间、行业应用、纯度描述
// 红线: 槽位顺序即输出顺序,不允许重排
// ==========================================

use crate::domain::types::{Dewpoint, IsoClass, PurityClassType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 基础配置槽位数量
pub const SLOT_COUNT: usize = 9;

// ==========================================
// SlotPosition - 槽位位置 (QAS1..QAS9)
// ==========================================
/// 1 起始的槽位编号，内部数组下标为 `number - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotPosition(usize);

impl SlotPosition {
    pub const QAS1: SlotPosition = SlotPosition(1);
    pub const QAS2: SlotPosition = SlotPosition(2);
    pub const QAS3: SlotPosition = SlotPosition(3);
    pub const QAS4: SlotPosition = SlotPosition(4);
    pub const QAS5: SlotPosition = SlotPosition(5);
    pub const QAS6: SlotPosition = SlotPosition(6);
    pub const QAS7: SlotPosition = SlotPosition(7);
    pub const QAS8: SlotPosition = SlotPosition(8);
    pub const QAS9: SlotPosition = SlotPosition(9);

    /// 由 1 起始编号构造
    pub fn from_number(number: usize) -> Option<Self> {
        (1..=SLOT_COUNT).contains(&number).then_some(Self(number))
    }

    /// 由 0 起始下标构造
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_number(index + 1)
    }

    pub fn number(self) -> usize {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// 数据库列名 (qas1..qas9)
    pub fn column_name(self) -> String {
        format!("qas{}", self.0)
    }

    /// 按顺序遍历全部槽位
    pub fn all() -> impl Iterator<Item = SlotPosition> {
        (1..=SLOT_COUNT).map(SlotPosition)
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QAS{}", self.0)
    }
}

// ==========================================
// BaseConfiguration - ISO 等级基础配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConfiguration {
    pub iso_class: IsoClass,
    /// 压缩机代码 (QOF / OIS)
    pub compressor: String,
    pub slots: [Option<String>; SLOT_COUNT],
}

impl BaseConfiguration {
    pub fn new(iso_class: IsoClass, compressor: impl Into<String>) -> Self {
        Self {
            iso_class,
            compressor: compressor.into(),
            slots: Default::default(),
        }
    }

    /// 构造器写法设置槽位
    pub fn with_slot(mut self, position: SlotPosition, value: impl Into<String>) -> Self {
        self.set_slot(position, Some(value.into()));
        self
    }

    pub fn set_slot(&mut self, position: SlotPosition, value: Option<String>) {
        self.slots[position.index()] = value;
    }

    /// 读取槽位原文，空白视为空槽
    pub fn slot(&self, position: SlotPosition) -> Option<&str> {
        self.slots[position.index()]
            .as_deref()
            .filter(|v| !v.trim().is_empty())
    }

    /// 按槽位顺序遍历非空槽位
    pub fn occupied_slots(&self) -> impl Iterator<Item = (SlotPosition, &str)> + '_ {
        SlotPosition::all().filter_map(move |p| self.slot(p).map(|v| (p, v)))
    }
}

// ==========================================
// FlowBounds - 文本流量区间解析
// ==========================================
/// 闭区间 [min, max] (CFM)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowBounds {
    pub min: f64,
    pub max: f64,
}

impl FlowBounds {
    /// 解析 "2-11" 形式；缺失上界时按单点处理 (max = min)
    ///
    /// 无法解析的数值、负数、或 min > max 返回 None
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.splitn(2, '-');
        let min: f64 = parts.next()?.trim().parse().ok()?;
        let max = match parts.next().map(str::trim) {
            Some(upper) if !upper.is_empty() => upper.parse().ok()?,
            _ => min,
        };

        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return None;
        }

        Some(Self { min, max })
    }
}

// ==========================================
// FlowRange - 产品流量区间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRange {
    pub water_class: String,
    /// 产品系列名,以干燥机类型前缀开头 (如 "QCMD 12-64")
    pub product_range: String,
    pub dewpoint: Option<Dewpoint>,
    pub min_flow: f64,
    pub max_flow: f64,
    pub inlet_filters: Option<String>,
    pub outlet_filters: Option<String>,
    pub comment: Option<String>,
}

impl FlowRange {
    pub fn new(
        water_class: impl Into<String>,
        product_range: impl Into<String>,
        dewpoint: Option<Dewpoint>,
        min_flow: f64,
        max_flow: f64,
    ) -> Self {
        Self {
            water_class: water_class.into(),
            product_range: product_range.into(),
            dewpoint,
            min_flow,
            max_flow,
            inlet_filters: None,
            outlet_filters: None,
            comment: None,
        }
    }

    pub fn from_bounds(
        water_class: impl Into<String>,
        product_range: impl Into<String>,
        dewpoint: Option<Dewpoint>,
        bounds: FlowBounds,
    ) -> Self {
        Self::new(water_class, product_range, dewpoint, bounds.min, bounds.max)
    }

    /// 闭区间包含判断
    pub fn contains_flow(&self, flow: f64) -> bool {
        self.min_flow <= flow && flow <= self.max_flow
    }

    /// "4-11" 形式的区间文本
    pub fn flow_range_label(&self) -> String {
        format!("{}-{}", format_flow(self.min_flow), format_flow(self.max_flow))
    }
}

/// 整数流量去掉小数部分
pub fn format_flow(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

// ==========================================
// 行业 / 应用预设
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub industry_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub iso_class: IsoClass,
}

// ==========================================
// 纯度等级描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityLevel {
    pub class_type: PurityClassType,
    pub level: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityLevelEntry {
    pub level: String,
    pub description: String,
}

/// 按类型分组的纯度描述 (表单选项数据)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityLevelsGrouped {
    pub particle: Vec<PurityLevelEntry>,
    pub water: Vec<PurityLevelEntry>,
    pub oil: Vec<PurityLevelEntry>,
}

impl PurityLevelsGrouped {
    pub fn push(&mut self, level: PurityLevel) {
        let entry = PurityLevelEntry {
            level: level.level,
            description: level.description,
        };
        match level.class_type {
            PurityClassType::Particle => self.particle.push(entry),
            PurityClassType::Water => self.water.push(entry),
            PurityClassType::Oil => self.oil.push(entry),
        }
    }
}
