// ==========================================
// ISO 8573 压缩空气配置工具 - 领域类型定义
// ==========================================
// 职责: 纯度等级类型、露点、ISO 等级等值对象
// 红线: 值对象不可变,由目录数据提供
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// "未指定" 哨兵值
pub const NOT_SPECIFIED: &str = "-";

// ==========================================
// 纯度等级类型 (Purity Class Type)
// ==========================================
// 序列化格式: lowercase (与数据库 iso_class_type 列一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurityClassType {
    Particle, // 固体颗粒
    Water,    // 水分
    Oil,      // 油分
}

impl PurityClassType {
    pub const ALL: [PurityClassType; 3] = [
        PurityClassType::Particle,
        PurityClassType::Water,
        PurityClassType::Oil,
    ];

    /// 转换为数据库存储值
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PurityClassType::Particle => "particle",
            PurityClassType::Water => "water",
            PurityClassType::Oil => "oil",
        }
    }

    /// 从数据库存储值解析（兼容 "particulate" 写法）
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "particle" | "particulate" => Some(PurityClassType::Particle),
            "water" => Some(PurityClassType::Water),
            "oil" => Some(PurityClassType::Oil),
            _ => None,
        }
    }
}

impl fmt::Display for PurityClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 露点 (Dewpoint)
// ==========================================
// 顺序即解析优先级: -100F > -40F > -5F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dewpoint {
    #[serde(rename = "-100F")]
    Minus100F,
    #[serde(rename = "-40F")]
    Minus40F,
    #[serde(rename = "-5F")]
    Minus5F,
}

impl Dewpoint {
    /// 按解析优先级排列
    pub const PRIORITY: [Dewpoint; 3] = [Dewpoint::Minus100F, Dewpoint::Minus40F, Dewpoint::Minus5F];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dewpoint::Minus100F => "-100F",
            Dewpoint::Minus40F => "-40F",
            Dewpoint::Minus5F => "-5F",
        }
    }

    /// 从目录字面值解析（"-40F"，容忍省略 F 的 "-40"）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "-100F" | "-100" => Some(Dewpoint::Minus100F),
            "-40F" | "-40" => Some(Dewpoint::Minus40F),
            "-5F" | "-5" => Some(Dewpoint::Minus5F),
            _ => None,
        }
    }

    /// 干燥机槽位文本中的括号标注形式
    pub fn annotations(&self) -> [&'static str; 2] {
        match self {
            Dewpoint::Minus100F => ["(-100F)", "(-100)"],
            Dewpoint::Minus40F => ["(-40F)", "(-40)"],
            Dewpoint::Minus5F => ["(-5F)", "(-5)"],
        }
    }
}

impl fmt::Display for Dewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// ISO 等级 (particulate.water.oil)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoClass {
    pub particulate: String,
    pub water: String,
    pub oil: String,
}

impl IsoClass {
    pub fn new(
        particulate: impl Into<String>,
        water: impl Into<String>,
        oil: impl Into<String>,
    ) -> Self {
        Self {
            particulate: particulate.into(),
            water: water.into(),
            oil: oil.into(),
        }
    }

    /// 规范键 "{particulate}.{water}.{oil}"
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.particulate, self.water, self.oil)
    }

    /// 解析 "1.2.1"，缺失部分按 "-" 处理
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let mut parts = s.split('.').map(str::trim);
        let mut next = || {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .unwrap_or(NOT_SPECIFIED)
                .to_string()
        };
        let particulate = next();
        let water = next();
        let oil = next();

        Some(Self {
            particulate,
            water,
            oil,
        })
    }

    /// 展示格式: "1.2.1" -> "[1;2;1]"
    pub fn bracketed(&self) -> String {
        format!("[{};{};{}]", self.particulate, self.water, self.oil)
    }

    /// 按类型取等级值
    pub fn class_of(&self, class_type: PurityClassType) -> &str {
        match class_type {
            PurityClassType::Particle => &self.particulate,
            PurityClassType::Water => &self.water,
            PurityClassType::Oil => &self.oil,
        }
    }
}

impl fmt::Display for IsoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.particulate, self.water, self.oil)
    }
}
