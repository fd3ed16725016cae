// ==========================================
// ISO 8573 压缩空气配置工具 - 目录存储契约
// ==========================================
// 职责: 引擎依赖的三种只读查询
// 红线: 无副作用,引擎从不修改目录数据
// ==========================================

use crate::domain::catalog::{BaseConfiguration, FlowRange};
use crate::domain::types::{Dewpoint, IsoClass};
use crate::repository::error::RepositoryResult;

// ==========================================
// FlowRangeQuery - 流量区间查询条件
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRangeQuery {
    /// 查询用水分等级（已做别名替换）
    pub water_class: String,
    pub dryer_type_prefix: String,
    /// None 表示不按露点过滤
    pub dewpoint: Option<Dewpoint>,
    /// None 表示不按流量过滤
    pub flow: Option<f64>,
}

impl FlowRangeQuery {
    pub fn new(water_class: impl Into<String>, dryer_type_prefix: impl Into<String>) -> Self {
        Self {
            water_class: water_class.into(),
            dryer_type_prefix: dryer_type_prefix.into(),
            dewpoint: None,
            flow: None,
        }
    }

    pub fn with_dewpoint(mut self, dewpoint: Option<Dewpoint>) -> Self {
        self.dewpoint = dewpoint;
        self
    }

    pub fn with_flow(mut self, flow: Option<f64>) -> Self {
        self.flow = flow;
        self
    }

    /// 匹配谓词（与 SQL 实现语义一致）
    pub fn matches(&self, range: &FlowRange) -> bool {
        if range.water_class != self.water_class {
            return false;
        }
        if !range.product_range.starts_with(&self.dryer_type_prefix) {
            return false;
        }
        if let Some(dewpoint) = self.dewpoint {
            if range.dewpoint != Some(dewpoint) {
                return false;
            }
        }
        match self.flow {
            Some(flow) => range.contains_flow(flow),
            None => true,
        }
    }
}

// ==========================================
// CatalogStore - 目录存储 trait
// ==========================================
/// 配置生成引擎对目录数据的全部依赖
pub trait CatalogStore: Send + Sync {
    /// 按规范 ISO 键 ("1.2.1") 精确查找基础配置
    fn find_base_configuration(&self, iso_class: &str) -> RepositoryResult<Option<BaseConfiguration>>;

    /// 按条件查询流量区间
    fn find_flow_ranges(&self, query: &FlowRangeQuery) -> RepositoryResult<Vec<FlowRange>>;

    /// 行业/应用预设 -> ISO 等级
    fn find_application(
        &self,
        industry_name: &str,
        application_name: &str,
    ) -> RepositoryResult<Option<IsoClass>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qcmd(water: &str, name: &str, dp: Option<Dewpoint>, min: f64, max: f64) -> FlowRange {
        FlowRange::new(water, name, dp, min, max)
    }

    #[test]
    fn test_query_matches_prefix_and_water_class() {
        let q = FlowRangeQuery::new("2", "QCMD");
        assert!(q.matches(&qcmd("2", "QCMD 4-11", None, 4.0, 11.0)));
        assert!(!q.matches(&qcmd("3", "QCMD 4-11", None, 4.0, 11.0)));
        assert!(!q.matches(&qcmd("2", "QHD 4-11", None, 4.0, 11.0)));
        // 前缀大小写敏感
        assert!(!q.matches(&qcmd("2", "qcmd 4-11", None, 4.0, 11.0)));
    }

    #[test]
    fn test_query_dewpoint_filter_only_when_given() {
        let any = FlowRangeQuery::new("2", "QCMD");
        let strict = FlowRangeQuery::new("2", "QCMD").with_dewpoint(Some(Dewpoint::Minus40F));

        let r40 = qcmd("2", "QCMD 4-11", Some(Dewpoint::Minus40F), 4.0, 11.0);
        let r100 = qcmd("2", "QCMD 4-11", Some(Dewpoint::Minus100F), 4.0, 11.0);
        let none = qcmd("2", "QCMD 4-11", None, 4.0, 11.0);

        assert!(any.matches(&r40) && any.matches(&r100) && any.matches(&none));
        assert!(strict.matches(&r40));
        assert!(!strict.matches(&r100));
        assert!(!strict.matches(&none));
    }

    #[test]
    fn test_query_flow_inclusive() {
        let r = qcmd("2", "QCMD 4-11", None, 4.0, 11.0);
        let at = |f: f64| FlowRangeQuery::new("2", "QCMD").with_flow(Some(f)).matches(&r);
        assert!(at(4.0));
        assert!(at(11.0));
        assert!(!at(3.99));
        assert!(!at(11.01));
    }
}
