// ==========================================
// ISO 8573 压缩空气配置工具 - 文本报告
// ==========================================
// 职责: 将 GenerationResult 渲染为命令行文本
// 说明: 干燥机组件的露点后缀只在此处追加,核心组件列表不含露点
// ==========================================

use crate::domain::catalog::format_flow;
use crate::domain::configuration::{ComponentConfiguration, GeneratedConfiguration, GenerationResult};
use crate::domain::types::IsoClass;

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// 渲染完整结果
pub fn render_result(result: &GenerationResult) -> String {
    let mut out = String::new();

    if !result.success {
        out.push_str(&format!("ERROR: {}\n", result.message));
        return out;
    }

    out.push_str(&format!("{}\n", result.message));
    if let Some(iso_class) = &result.iso_class {
        out.push_str(&format!("ISO Class: {}\n", display_iso_class(iso_class)));
    }
    match result.flow {
        Some(flow) => out.push_str(&format!("Flow: {} CFM\n", format_flow(flow))),
        None => out.push_str("Flow: ALL (showing all product ranges)\n"),
    }
    out.push('\n');

    if result.configurations.is_empty() {
        out.push_str("No compatible configurations found!\n");
        if let Some(flow) = result.flow {
            out.push_str(&format!(
                "The flow of {} CFM does not match any available product ranges.\n",
                format_flow(flow)
            ));
        }
        return out;
    }

    for (index, config) in result.configurations.iter().enumerate() {
        out.push_str(&render_configuration(index + 1, config));
    }
    out
}

fn render_configuration(number: usize, config: &GeneratedConfiguration) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Configuration #{}: {}\n", number, config.configuration_name));
    out.push_str(&format!("Dryer Type: {}\n", config.dryer_type));
    out.push_str(&format!("Compressor: {}\n", config.compressor));

    for (option, components) in config.options() {
        out.push('\n');
        out.push_str(&format!(
            "  {} | Flow Range: {} CFM\n",
            option.product_range, option.flow_range
        ));
        out.push_str(&format!("  {}\n", component_chain(config, components)));
    }
    out.push('\n');
    out
}

/// "compressor → c1 → c2 …",干燥机组件附加露点
pub fn component_chain(config: &GeneratedConfiguration, components: &ComponentConfiguration) -> String {
    let mut chain = vec![config.compressor.clone()];
    for component in &components.components {
        let is_dryer = components.product_range_name.as_deref() == Some(component.as_str());
        match config.dewpoint {
            Some(dewpoint) if is_dryer => chain.push(format!("{} ({})", component, dewpoint)),
            _ => chain.push(component.clone()),
        }
    }
    chain.join(" → ")
}

/// 能解析时显示为 "[p;w;o]"
fn display_iso_class(key: &str) -> String {
    match IsoClass::parse(key) {
        Some(iso) => format!("{} {}", key, iso.bracketed()),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::FlowRange;
    use crate::domain::configuration::FlowOption;
    use crate::domain::types::Dewpoint;

    fn qcmd_config() -> GeneratedConfiguration {
        let range = FlowRange::new("2", "QCMD 4-11", Some(Dewpoint::Minus40F), 4.0, 11.0);
        GeneratedConfiguration {
            dryer_type: "QCMD".to_string(),
            dewpoint: Some(Dewpoint::Minus40F),
            configuration_name: "QCMD (-40F)".to_string(),
            flow_options: vec![FlowOption::from_range(&range)],
            component_configurations: vec![ComponentConfiguration {
                components: vec!["QMF".to_string(), "QCMD 4-11".to_string()],
                product_range_name: Some("QCMD 4-11".to_string()),
            }],
            compressor: "QOF".to_string(),
            iso_class: "1.2.1".to_string(),
        }
    }

    #[test]
    fn test_chain_appends_dewpoint_to_dryer_only() {
        let config = qcmd_config();
        let chain = component_chain(&config, &config.component_configurations[0]);
        assert_eq!(chain, "QOF → QMF → QCMD 4-11 (-40F)");
        // 核心数据不受影响
        assert_eq!(config.component_configurations[0].components[1], "QCMD 4-11");
    }

    #[test]
    fn test_render_found() {
        let result = GenerationResult::found("1.2.1", Some(8.0), vec![qcmd_config()]);
        let text = render_result(&result);
        assert!(text.contains("Found 1 configuration(s)"));
        assert!(text.contains("ISO Class: 1.2.1 [1;2;1]"));
        assert!(text.contains("Flow: 8 CFM"));
        assert!(text.contains("Configuration #1: QCMD (-40F)"));
        assert!(text.contains("QCMD 4-11 | Flow Range: 4-11 CFM"));
    }

    #[test]
    fn test_render_empty_and_not_found() {
        let text = render_result(&GenerationResult::found("1.2.1", Some(500.0), vec![]));
        assert!(text.contains("No compatible configurations found!"));
        assert!(text.contains("The flow of 500 CFM"));

        let text = render_result(&GenerationResult::not_found("ISO configuration not found: 9.9.9"));
        assert_eq!(text, "ERROR: ISO configuration not found: 9.9.9\n");
    }
}
