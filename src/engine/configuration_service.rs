// ==========================================
// ISO 8573 压缩空气配置工具 - 配置生成服务
// ==========================================
// 用途: 协调 解析器 → 区间匹配 → 组装 的执行顺序
// 入口:
// - generate_from_iso_class: 按 ISO 三元组生成
// - generate_from_industry_application: 按行业/应用预设生成
// 红线: 只读目录数据,每次调用构造全新结果
// ==========================================

use crate::config::EngineConfig;
use crate::domain::configuration::{GeneratedConfiguration, GenerationResult};
use crate::domain::types::IsoClass;
use crate::engine::assembler::ConfigurationAssembler;
use crate::engine::dryer_spec::DryerSpecParser;
use crate::engine::range_matcher::ProductRangeMatcher;
use crate::repository::{CatalogStore, RepositoryResult};
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// ConfigurationService - 配置生成服务
// ==========================================

pub struct ConfigurationService<S>
where
    S: CatalogStore,
{
    store: Arc<S>,
    parser: DryerSpecParser,
    matcher: ProductRangeMatcher,
    assembler: ConfigurationAssembler,
}

impl<S> ConfigurationService<S>
where
    S: CatalogStore,
{
    /// 创建服务实例
    ///
    /// # 参数
    /// - store: 目录存储
    /// - config: 引擎参数
    pub fn new(store: Arc<S>, config: &EngineConfig) -> Self {
        Self {
            store,
            parser: DryerSpecParser::from_config(config),
            matcher: ProductRangeMatcher::from_config(config),
            assembler: ConfigurationAssembler::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// 按 ISO 等级生成配置
    ///
    /// # 返回
    /// - ISO 等级不存在: success=false
    /// - 无干燥机槽位: 一个 "No Dryer Required" 配置
    /// - 其余情况: 每个存活的干燥机类型一个配置 (可能为空)
    ///
    /// 仅存储层 I/O 错误通过 Err 返回
    pub fn generate_from_iso_class(
        &self,
        particulate: &str,
        water: &str,
        oil: &str,
        flow: Option<f64>,
    ) -> RepositoryResult<GenerationResult> {
        let iso = IsoClass::new(particulate, water, oil);
        let iso_key = iso.key();

        info!(iso_class = %iso_key, flow = ?flow, "开始生成配置");

        // ==========================================
        // 步骤1: 读取基础配置
        // ==========================================
        let base = match self.store.find_base_configuration(&iso_key)? {
            Some(base) => base,
            None => {
                info!(iso_class = %iso_key, "ISO 配置不存在");
                return Ok(GenerationResult::not_found(format!(
                    "ISO configuration not found: {}",
                    iso_key
                )));
            }
        };

        // ==========================================
        // 步骤2: 定位干燥机槽位
        // ==========================================
        let spec = match self.parser.locate(&base) {
            Some(spec) => spec,
            None => {
                debug!(iso_class = %iso_key, "未找到干燥机槽位");
                let config = self.assembler.assemble_no_dryer(&base);
                return Ok(GenerationResult::no_dryer(iso_key, flow, config));
            }
        };

        debug!(
            iso_class = %iso_key,
            position = %spec.position,
            dewpoint = ?spec.dewpoint,
            options = spec.options.len(),
            "干燥机槽位解析完成"
        );

        // ==========================================
        // 步骤3: 按干燥机类型匹配区间并组装
        // ==========================================
        let mut configurations: Vec<GeneratedConfiguration> = Vec::new();
        for dryer_type in spec.distinct_type_prefixes() {
            // 先枚举全部区间,再按流量过滤
            let mut ranges =
                self.matcher
                    .find_ranges(self.store.as_ref(), water, dryer_type, spec.dewpoint, None)?;
            if let Some(flow) = flow {
                ranges.retain(|range| range.contains_flow(flow));
            }

            match self.assembler.assemble_branch(
                &base,
                spec.position,
                dryer_type,
                spec.dewpoint,
                &ranges,
            ) {
                Some(config) => configurations.push(config),
                None => debug!(dryer_type = %dryer_type, flow = ?flow, "干燥机类型无兼容区间,跳过"),
            }
        }

        info!(
            iso_class = %iso_key,
            configurations = configurations.len(),
            "配置生成完成"
        );
        Ok(GenerationResult::found(iso_key, flow, configurations))
    }

    /// 按行业/应用预设生成配置
    pub fn generate_from_industry_application(
        &self,
        industry_name: &str,
        application_name: &str,
        flow: Option<f64>,
    ) -> RepositoryResult<GenerationResult> {
        let iso = match self
            .store
            .find_application(industry_name, application_name)?
        {
            Some(iso) => iso,
            None => {
                info!(
                    industry = %industry_name,
                    application = %application_name,
                    "行业应用不存在"
                );
                return Ok(GenerationResult::not_found(format!(
                    "Application not found: {} / {}",
                    industry_name, application_name
                )));
            }
        };

        debug!(
            industry = %industry_name,
            application = %application_name,
            iso_class = %iso.key(),
            "行业应用解析完成"
        );
        self.generate_from_iso_class(&iso.particulate, &iso.water, &iso.oil, flow)
    }
}
