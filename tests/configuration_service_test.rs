// ==========================================
// 配置生成服务集成测试
// ==========================================
// 测试目标: SQLite 目录 → 解析 → 区间匹配 → 组装 全流程
// ==========================================


use iso_air_configurator::config::EngineConfig;
use iso_air_configurator::domain::{Dewpoint, FlowOption, GenerationResult};
use iso_air_configurator::engine::ConfigurationService;
use iso_air_configurator::logging;
use iso_air_configurator::repository::SqliteCatalogStore;
use std::sync::Arc;

fn create_service(db_path: &str) -> ConfigurationService<SqliteCatalogStore> {
    let store = SqliteCatalogStore::open(db_path).expect("Failed to open catalog");
    ConfigurationService::new(Arc::new(store), &EngineConfig::default())
}

fn range_names(result: &GenerationResult, index: usize) -> Vec<String> {
    result.configurations[index]
        .flow_options
        .iter()
        .map(|o| o.product_range.clone())
        .collect()
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_reference_configuration_with_flow() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("1", "2", "1", Some(8.0))
        .expect("generation failed");

    assert!(result.success);
    assert_eq!(result.iso_class.as_deref(), Some("1.2.1"));
    assert_eq!(result.flow, Some(8.0));
    assert_eq!(result.configurations.len(), 1);

    let config = &result.configurations[0];
    assert_eq!(config.dryer_type, "QCMD");
    assert_eq!(config.dewpoint, Some(Dewpoint::Minus40F));
    assert_eq!(config.compressor, "QOF");
    assert_eq!(range_names(&result, 0), vec!["QCMD 4-11"]);
    assert_eq!(config.flow_options[0].min_flow, Some(4.0));
    assert_eq!(config.flow_options[0].max_flow, Some(11.0));
    assert_eq!(
        config.component_configurations[0].components,
        vec!["QMF", "QCMD 4-11"]
    );
}

#[test]
fn test_all_ranges_sorted_when_flow_absent() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("1", "2", "1", None)
        .expect("generation failed");

    assert_eq!(result.message, "Found 1 configuration(s)");
    assert_eq!(range_names(&result, 0), vec!["QCMD 4-11", "QCMD 12-64"]);
    let components: Vec<Vec<String>> = result.configurations[0]
        .component_configurations
        .iter()
        .map(|c| c.components.clone())
        .collect();
    assert_eq!(
        components,
        vec![
            vec!["QMF".to_string(), "QCMD 4-11".to_string()],
            vec!["QMF".to_string(), "QCMD 12-64".to_string()],
        ]
    );
}

#[test]
fn test_flow_bounds_are_inclusive() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    for (flow, expected) in [
        (4.0, Some("QCMD 4-11")),
        (11.0, Some("QCMD 4-11")),
        (12.0, Some("QCMD 12-64")),
        (64.0, Some("QCMD 12-64")),
        (3.99, None),
        (11.01, None),
        (64.5, None),
    ] {
        let result = service
            .generate_from_iso_class("1", "2", "1", Some(flow))
            .expect("generation failed");
        assert!(result.success, "flow={}", flow);
        match expected {
            Some(name) => assert_eq!(range_names(&result, 0), vec![name], "flow={}", flow),
            None => {
                assert!(result.configurations.is_empty(), "flow={}", flow);
                assert_eq!(
                    result.message,
                    "No compatible configurations found for this flow"
                );
            }
        }
    }
}

#[test]
fn test_two_dryer_types_with_water_class_alias() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("2", "5", "2", Some(60.0))
        .expect("generation failed");

    assert_eq!(result.message, "Found 2 configuration(s)");
    let types: Vec<&str> = result
        .configurations
        .iter()
        .map(|c| c.dryer_type.as_str())
        .collect();
    assert_eq!(types, vec!["QHD", "QBP"]);
    assert_eq!(range_names(&result, 0), vec!["QHD 10-99"]);
    assert_eq!(range_names(&result, 1), vec!["QBP 50-300"]);
    assert_eq!(
        result.configurations[0].component_configurations[0].components,
        vec!["QCF", "QHD 10-99", "QMF"]
    );
    assert_eq!(result.configurations[1].configuration_name, "QBP (-40F)");

    // 只有 QBP 覆盖 275
    let result = service
        .generate_from_iso_class("2", "5", "2", Some(275.0))
        .expect("generation failed");
    assert_eq!(result.configurations.len(), 1);
    assert_eq!(result.configurations[0].dryer_type, "QBP");
}

#[test]
fn test_dewpoint_filter_and_point_range() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("1", "1", "1", None)
        .expect("generation failed");
    let config = &result.configurations[0];
    assert_eq!(config.dewpoint, Some(Dewpoint::Minus100F));
    // -40F 的同名区间被排除
    assert_eq!(range_names(&result, 0), vec!["QHD 10-99", "QHD 150"]);
    assert_eq!(
        config.component_configurations[0].components,
        vec!["QCF", "QMF", "QHD 10-99", "QDF", "QAF"]
    );

    let result = service
        .generate_from_iso_class("1", "1", "1", Some(150.0))
        .expect("generation failed");
    assert_eq!(range_names(&result, 0), vec!["QHD 150"]);
    assert_eq!(result.configurations[0].flow_options[0].flow_range, "150-150");
}

#[test]
fn test_no_dryer_configuration() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("3", "-", "3", Some(500.0))
        .expect("generation failed");

    assert!(result.success);
    assert_eq!(result.message, "Configuration found (no dryer specified)");
    assert_eq!(result.configurations.len(), 1);
    let config = &result.configurations[0];
    assert_eq!(config.dryer_type, "N/A");
    assert_eq!(config.dewpoint, None);
    assert_eq!(config.compressor, "OIS");
    assert_eq!(config.flow_options, vec![FlowOption::no_dryer()]);
    assert_eq!(config.component_configurations[0].components, vec!["QCF", "QMF"]);
    assert_eq!(config.component_configurations[0].product_range_name, None);
}

#[test]
fn test_unknown_iso_class() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let result = service
        .generate_from_iso_class("4", "4", "4", Some(10.0))
        .expect("generation failed");
    assert!(!result.success);
    assert_eq!(result.message, "ISO configuration not found: 4.4.4");
    assert!(result.configurations.is_empty());
}

#[test]
fn test_industry_application_lookup() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let via_app = service
        .generate_from_industry_application("Food & Beverage", "Packaging", Some(8.0))
        .expect("generation failed");
    let via_iso = service
        .generate_from_iso_class("1", "2", "1", Some(8.0))
        .expect("generation failed");
    assert_eq!(via_app, via_iso);

    let carwash = service
        .generate_from_industry_application("Carwash", "Touchless Wash Systems", None)
        .expect("generation failed");
    assert_eq!(carwash.configurations[0].dryer_type, "N/A");

    let missing = service
        .generate_from_industry_application("Food & Beverage", "Brewing", None)
        .expect("generation failed");
    assert!(!missing.success);
    assert_eq!(missing.message, "Application not found: Food & Beverage / Brewing");
}

#[test]
fn test_repeated_calls_are_byte_identical() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = create_service(&db_path);

    let first = serde_json::to_string(
        &service
            .generate_from_iso_class("2", "5", "2", None)
            .expect("generation failed"),
    )
    .expect("serialize failed");
    let second = serde_json::to_string(
        &service
            .generate_from_iso_class("2", "5", "2", None)
            .expect("generation failed"),
    )
    .expect("serialize failed");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_reads_share_one_service() {
    let (_temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let service = Arc::new(create_service(&db_path));
    let expected = service
        .generate_from_iso_class("2", "5", "2", Some(60.0))
        .expect("generation failed");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || {
                service
                    .generate_from_iso_class("2", "5", "2", Some(60.0))
                    .expect("generation failed")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}
