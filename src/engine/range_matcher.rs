// ==========================================
// ISO 8573 压缩空气配置工具 - 产品区间匹配器
// ==========================================
// 输入: 水分等级、干燥机类型前缀、露点、流量
// 输出: 兼容的流量区间,按 min_flow 升序
// 规则: 水分等级按别名替换后查询 (5 -> 4)
// ==========================================

use crate::config::EngineConfig;
use crate::domain::catalog::FlowRange;
use crate::domain::types::Dewpoint;
use crate::repository::{CatalogStore, FlowRangeQuery, RepositoryResult};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

pub struct ProductRangeMatcher {
    water_class_aliases: BTreeMap<String, String>,
}

impl ProductRangeMatcher {
    pub fn new(water_class_aliases: BTreeMap<String, String>) -> Self {
        Self {
            water_class_aliases,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.water_class_aliases.clone())
    }

    /// 查询时实际使用的水分等级
    pub fn lookup_water_class<'a>(&'a self, water_class: &'a str) -> &'a str {
        self.water_class_aliases
            .get(water_class)
            .map(String::as_str)
            .unwrap_or(water_class)
    }

    /// 构造目录查询条件（已做水分等级别名替换）
    pub fn build_query(
        &self,
        water_class: &str,
        dryer_type_prefix: &str,
        dewpoint: Option<Dewpoint>,
        flow: Option<f64>,
    ) -> FlowRangeQuery {
        FlowRangeQuery::new(self.lookup_water_class(water_class), dryer_type_prefix)
            .with_dewpoint(dewpoint)
            .with_flow(flow)
    }

    /// 查询兼容区间并按 min_flow 升序（稳定排序）
    pub fn find_ranges<S>(
        &self,
        store: &S,
        water_class: &str,
        dryer_type_prefix: &str,
        dewpoint: Option<Dewpoint>,
        flow: Option<f64>,
    ) -> RepositoryResult<Vec<FlowRange>>
    where
        S: CatalogStore + ?Sized,
    {
        let query = self.build_query(water_class, dryer_type_prefix, dewpoint, flow);
        let mut ranges = store.find_flow_ranges(&query)?;
        sort_by_min_flow(&mut ranges);

        debug!(
            water_class = %water_class,
            lookup_water_class = %query.water_class,
            dryer_type = %dryer_type_prefix,
            dewpoint = ?dewpoint,
            flow = ?flow,
            matched = ranges.len(),
            "产品区间匹配完成"
        );
        Ok(ranges)
    }
}

/// 按 min_flow 升序，相同者保持原顺序
pub fn sort_by_min_flow(ranges: &mut [FlowRange]) {
    ranges.sort_by(|a, b| a.min_flow.partial_cmp(&b.min_flow).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCatalogStore;

    fn store() -> InMemoryCatalogStore {
        InMemoryCatalogStore::new()
            .with_flow_range(FlowRange::new("4", "QHD 100-200", Some(Dewpoint::Minus40F), 100.0, 200.0))
            .with_flow_range(FlowRange::new("4", "QHD 10-99", Some(Dewpoint::Minus40F), 10.0, 99.0))
            .with_flow_range(FlowRange::new("4", "QHD 10-99", Some(Dewpoint::Minus100F), 10.0, 99.0))
            .with_flow_range(FlowRange::new("2", "QCMD 12-64", Some(Dewpoint::Minus40F), 12.0, 64.0))
            .with_flow_range(FlowRange::new("2", "QCMD 4-11", Some(Dewpoint::Minus40F), 4.0, 11.0))
    }

    fn matcher() -> ProductRangeMatcher {
        ProductRangeMatcher::from_config(&EngineConfig::default())
    }

    #[test]
    fn test_sorted_ascending_by_min_flow() {
        let ranges = matcher()
            .find_ranges(&store(), "2", "QCMD", Some(Dewpoint::Minus40F), None)
            .unwrap();
        let names: Vec<&str> = ranges.iter().map(|r| r.product_range.as_str()).collect();
        assert_eq!(names, vec!["QCMD 4-11", "QCMD 12-64"]);
    }

    #[test]
    fn test_water_class_5_behaves_like_4() {
        let m = matcher();
        let s = store();
        let five = m.find_ranges(&s, "5", "QHD", Some(Dewpoint::Minus40F), None).unwrap();
        let four = m.find_ranges(&s, "4", "QHD", Some(Dewpoint::Minus40F), None).unwrap();
        assert_eq!(five, four);
        assert_eq!(five.len(), 2);
        assert_eq!(five[0].product_range, "QHD 10-99");
    }

    #[test]
    fn test_flow_filter_inclusive() {
        let m = matcher();
        let s = store();
        let at = |flow: f64| {
            m.find_ranges(&s, "2", "QCMD", Some(Dewpoint::Minus40F), Some(flow))
                .unwrap()
                .into_iter()
                .map(|r| r.product_range)
                .collect::<Vec<_>>()
        };
        assert_eq!(at(4.0), vec!["QCMD 4-11"]);
        assert_eq!(at(11.0), vec!["QCMD 4-11"]);
        assert!(at(11.5).is_empty());
        assert_eq!(at(64.0), vec!["QCMD 12-64"]);
        assert!(at(3.99).is_empty());
    }

    #[test]
    fn test_without_dewpoint_returns_all_dewpoints() {
        let ranges = matcher().find_ranges(&store(), "4", "QHD", None, Some(50.0)).unwrap();
        assert_eq!(ranges.len(), 2);
        // 同 min_flow 保持插入顺序
        assert_eq!(ranges[0].dewpoint, Some(Dewpoint::Minus40F));
        assert_eq!(ranges[1].dewpoint, Some(Dewpoint::Minus100F));
    }

    #[test]
    fn test_custom_alias_map() {
        let m = ProductRangeMatcher::new(BTreeMap::new());
        assert_eq!(m.lookup_water_class("5"), "5");
        assert!(m.find_ranges(&store(), "5", "QHD", None, None).unwrap().is_empty());
    }
}
