// ==========================================
// ISO 8573 压缩空气配置工具 - 目录浏览 API
// ==========================================
// 职责: 表单选项数据 (纯度描述、行业、应用、基础配置)
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::catalog::{Application, BaseConfiguration, Industry, PurityLevelsGrouped};
use crate::repository::{ApplicationRepository, IsoConfigurationRepository, PurityLevelRepository};

/// 目录浏览API
pub struct CatalogApi {
    purity_level_repo: Arc<PurityLevelRepository>,
    application_repo: Arc<ApplicationRepository>,
    iso_configuration_repo: Arc<IsoConfigurationRepository>,
}

impl CatalogApi {
    pub fn new(
        purity_level_repo: Arc<PurityLevelRepository>,
        application_repo: Arc<ApplicationRepository>,
        iso_configuration_repo: Arc<IsoConfigurationRepository>,
    ) -> Self {
        Self {
            purity_level_repo,
            application_repo,
            iso_configuration_repo,
        }
    }

    /// 按 particle / water / oil 分组的纯度描述
    pub fn purity_levels(&self) -> ApiResult<PurityLevelsGrouped> {
        Ok(self.purity_level_repo.list_grouped()?)
    }

    /// 全部行业 (按名称排序)
    pub fn list_industries(&self) -> ApiResult<Vec<Industry>> {
        Ok(self.application_repo.list_industries()?)
    }

    /// 行业下的应用 (按名称排序)
    pub fn list_applications(&self, industry_id: i64) -> ApiResult<Vec<Application>> {
        if industry_id <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "行业ID无效: {}",
                industry_id
            )));
        }
        Ok(self.application_repo.list_applications(industry_id)?)
    }

    /// 按行业名称查询应用
    pub fn list_applications_by_industry_name(
        &self,
        industry_name: &str,
    ) -> ApiResult<Vec<Application>> {
        let industry = self
            .list_industries()?
            .into_iter()
            .find(|industry| industry.name == industry_name.trim())
            .ok_or_else(|| ApiError::NotFound(format!("行业不存在: {}", industry_name)))?;
        self.list_applications(industry.id)
    }

    /// 全部基础配置 (按 ISO 键排序)
    pub fn list_base_configurations(&self) -> ApiResult<Vec<BaseConfiguration>> {
        Ok(self.iso_configuration_repo.list_all()?)
    }
}
