// ==========================================
// ISO 8573 压缩空气配置工具 - 配置生成 API
// ==========================================
// 职责: 校验调用方输入,调用 ConfigurationService,回显已校验的输入
// 模式: iso (显式纯度等级) / industry (行业应用预设)
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::validator::{validate_flow, validate_name, validate_purity_class};
use crate::domain::configuration::GenerationResult;
use crate::domain::types::PurityClassType;
use crate::engine::ConfigurationService;
use crate::repository::CatalogStore;

// ==========================================
// 请求 / 响应
// ==========================================

/// 配置生成请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerateRequest {
    Iso {
        particulate_class: String,
        water_class: String,
        oil_class: String,
        #[serde(default)]
        flow: Option<f64>,
    },
    Industry {
        industry: String,
        application: String,
        #[serde(default)]
        flow: Option<f64>,
    },
}

impl GenerateRequest {
    pub fn iso(particulate: &str, water: &str, oil: &str, flow: Option<f64>) -> Self {
        GenerateRequest::Iso {
            particulate_class: particulate.to_string(),
            water_class: water.to_string(),
            oil_class: oil.to_string(),
            flow,
        }
    }

    pub fn industry(industry: &str, application: &str, flow: Option<f64>) -> Self {
        GenerateRequest::Industry {
            industry: industry.to_string(),
            application: application.to_string(),
            flow,
        }
    }

    pub fn flow(&self) -> Option<f64> {
        match self {
            GenerateRequest::Iso { flow, .. } | GenerateRequest::Industry { flow, .. } => *flow,
        }
    }

    /// 校验并规范化 (去除首尾空白)
    pub fn validated(&self) -> ApiResult<Self> {
        let flow = validate_flow(self.flow())?;
        match self {
            GenerateRequest::Iso {
                particulate_class,
                water_class,
                oil_class,
                ..
            } => Ok(GenerateRequest::Iso {
                particulate_class: validate_purity_class(
                    PurityClassType::Particle,
                    particulate_class,
                )?,
                water_class: validate_purity_class(PurityClassType::Water, water_class)?,
                oil_class: validate_purity_class(PurityClassType::Oil, oil_class)?,
                flow,
            }),
            GenerateRequest::Industry {
                industry,
                application,
                ..
            } => Ok(GenerateRequest::Industry {
                industry: validate_name("行业", industry)?,
                application: validate_name("应用", application)?,
                flow,
            }),
        }
    }
}

/// 生成结果 + 已校验的输入回显
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub result: GenerationResult,
    pub input: GenerateRequest,
}

// ==========================================
// ConfigurationApi - 配置生成 API
// ==========================================

pub struct ConfigurationApi<S>
where
    S: CatalogStore,
{
    service: Arc<ConfigurationService<S>>,
}

impl<S> ConfigurationApi<S>
where
    S: CatalogStore,
{
    pub fn new(service: Arc<ConfigurationService<S>>) -> Self {
        Self { service }
    }

    /// 生成配置
    ///
    /// # 返回
    /// - Ok(GenerateResponse): 包括 success=false 的未找到结果
    /// - Err(ApiError): 输入无效或存储错误
    pub fn generate(&self, request: &GenerateRequest) -> ApiResult<GenerateResponse> {
        let input = request.validated()?;

        let result = match &input {
            GenerateRequest::Iso {
                particulate_class,
                water_class,
                oil_class,
                flow,
            } => self.service.generate_from_iso_class(
                particulate_class,
                water_class,
                oil_class,
                *flow,
            )?,
            GenerateRequest::Industry {
                industry,
                application,
                flow,
            } => self
                .service
                .generate_from_industry_application(industry, application, *flow)?,
        };

        info!(
            success = result.success,
            configurations = result.configurations.len(),
            "配置生成请求完成"
        );
        Ok(GenerateResponse { result, input })
    }

    pub fn generate_from_iso_class(
        &self,
        particulate: &str,
        water: &str,
        oil: &str,
        flow: Option<f64>,
    ) -> ApiResult<GenerateResponse> {
        self.generate(&GenerateRequest::iso(particulate, water, oil, flow))
    }

    pub fn generate_from_industry_application(
        &self,
        industry: &str,
        application: &str,
        flow: Option<f64>,
    ) -> ApiResult<GenerateResponse> {
        self.generate(&GenerateRequest::industry(industry, application, flow))
    }
}
