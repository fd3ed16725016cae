// ==========================================
// ISO 8573 压缩空气配置工具 - 配置组装器
// ==========================================
// 职责: 按槽位顺序组装组件列表
// 规则:
// - 干燥机槽位替换为产品系列名 (不附加露点)
// - 其余非空槽位原样复制,空槽位省略
// - 同一干燥机类型的全部区间归入一个 GeneratedConfiguration
// ==========================================

use crate::domain::catalog::{BaseConfiguration, FlowRange, SlotPosition};
use crate::domain::configuration::{
    ComponentConfiguration, FlowOption, GeneratedConfiguration, NO_DRYER_CONFIGURATION_NAME,
    NO_DRYER_TYPE,
};
use crate::domain::types::Dewpoint;

pub struct ConfigurationAssembler {
    // 无状态组装器
}

impl Default for ConfigurationAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationAssembler {
    pub fn new() -> Self {
        Self {}
    }

    /// 单个区间的组件列表
    pub fn assemble(
        &self,
        base: &BaseConfiguration,
        dryer_position: SlotPosition,
        range: &FlowRange,
    ) -> ComponentConfiguration {
        let components = SlotPosition::all()
            .filter_map(|position| {
                if position == dryer_position {
                    Some(range.product_range.clone())
                } else {
                    base.slot(position).map(str::to_string)
                }
            })
            .collect();

        ComponentConfiguration {
            components,
            product_range_name: Some(range.product_range.clone()),
        }
    }

    /// 无替换的组件列表
    pub fn assemble_base(&self, base: &BaseConfiguration) -> ComponentConfiguration {
        ComponentConfiguration {
            components: base
                .occupied_slots()
                .map(|(_, raw)| raw.to_string())
                .collect(),
            product_range_name: None,
        }
    }

    /// 一个干燥机类型分支；区间为空时返回 None
    pub fn assemble_branch(
        &self,
        base: &BaseConfiguration,
        dryer_position: SlotPosition,
        dryer_type: &str,
        dewpoint: Option<Dewpoint>,
        ranges: &[FlowRange],
    ) -> Option<GeneratedConfiguration> {
        if ranges.is_empty() {
            return None;
        }

        let flow_options = ranges.iter().map(FlowOption::from_range).collect();
        let component_configurations = ranges
            .iter()
            .map(|range| self.assemble(base, dryer_position, range))
            .collect();

        Some(GeneratedConfiguration {
            dryer_type: dryer_type.to_string(),
            dewpoint,
            configuration_name: GeneratedConfiguration::configuration_name_for(dryer_type, dewpoint),
            flow_options,
            component_configurations,
            compressor: base.compressor.clone(),
            iso_class: base.iso_class.key(),
        })
    }

    /// 无干燥机分支
    pub fn assemble_no_dryer(&self, base: &BaseConfiguration) -> GeneratedConfiguration {
        GeneratedConfiguration {
            dryer_type: NO_DRYER_TYPE.to_string(),
            dewpoint: None,
            configuration_name: NO_DRYER_CONFIGURATION_NAME.to_string(),
            flow_options: vec![FlowOption::no_dryer()],
            component_configurations: vec![self.assemble_base(base)],
            compressor: base.compressor.clone(),
            iso_class: base.iso_class.key(),
        }
    }
}
