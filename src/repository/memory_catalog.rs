// ==========================================
// ISO 8573 压缩空气配置工具 - 内存目录存储
// ==========================================
// 职责: 不依赖数据库的 CatalogStore 实现
// 用途: 嵌入式调用、单元测试
// ==========================================

use std::collections::BTreeMap;

use crate::domain::catalog::{BaseConfiguration, FlowRange};
use crate::domain::types::IsoClass;
use crate::repository::catalog_store::{CatalogStore, FlowRangeQuery};
use crate::repository::error::RepositoryResult;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    base_configurations: BTreeMap<String, BaseConfiguration>,
    flow_ranges: Vec<FlowRange>,
    /// (行业名, 应用名) -> ISO 等级
    applications: BTreeMap<(String, String), IsoClass>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一 ISO 键重复写入时覆盖
    pub fn with_base_configuration(mut self, config: BaseConfiguration) -> Self {
        self.base_configurations
            .insert(config.iso_class.key(), config);
        self
    }

    pub fn with_flow_range(mut self, range: FlowRange) -> Self {
        self.flow_ranges.push(range);
        self
    }

    pub fn with_application(
        mut self,
        industry_name: impl Into<String>,
        application_name: impl Into<String>,
        iso_class: IsoClass,
    ) -> Self {
        self.applications
            .insert((industry_name.into(), application_name.into()), iso_class);
        self
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn find_base_configuration(&self, iso_class: &str) -> RepositoryResult<Option<BaseConfiguration>> {
        Ok(self.base_configurations.get(iso_class).cloned())
    }

    /// 结果保持插入顺序，排序由调用方负责
    fn find_flow_ranges(&self, query: &FlowRangeQuery) -> RepositoryResult<Vec<FlowRange>> {
        Ok(self
            .flow_ranges
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect())
    }

    fn find_application(
        &self,
        industry_name: &str,
        application_name: &str,
    ) -> RepositoryResult<Option<IsoClass>> {
        Ok(self
            .applications
            .get(&(industry_name.to_string(), application_name.to_string()))
            .cloned())
    }
}
