// ==========================================
// Repository 层集成测试
// ==========================================
// 测试目标: 目录表的写入、查询、排序与错误映射
// ==========================================


use iso_air_configurator::domain::{
    BaseConfiguration, Dewpoint, FlowRange, IsoClass, SlotPosition,
};
use iso_air_configurator::repository::{
    CatalogStore, FlowRangeQuery, InMemoryCatalogStore, RepositoryError, SqliteCatalogStore,
};

fn open_seeded() -> (tempfile::NamedTempFile, SqliteCatalogStore) {
    let (temp_file, db_path) = test_helpers::create_seeded_db().expect("Failed to create test db");
    let store = SqliteCatalogStore::open(&db_path).expect("Failed to open catalog");
    (temp_file, store)
}

// ==========================================
// 基础配置
// ==========================================

#[test]
fn test_base_configuration_round_trip() {
    let (_temp_file, store) = open_seeded();

    let base = store
        .find_base_configuration("1.1.1")
        .expect("query failed")
        .expect("1.1.1 should exist");
    assert_eq!(base.compressor, "QOF");
    assert_eq!(base.iso_class, IsoClass::new("1", "1", "1"));
    assert_eq!(base.slot(SlotPosition::QAS4), Some("QHD (-100F)"));
    assert_eq!(base.slot(SlotPosition::QAS3), None);
    assert_eq!(base.occupied_slots().count(), 5);

    assert!(store
        .find_base_configuration("9.9.9")
        .expect("query failed")
        .is_none());

    let all = store.iso_configuration_repo.list_all().expect("list failed");
    let keys: Vec<String> = all.iter().map(|c| c.iso_class.key()).collect();
    assert_eq!(keys, vec!["1.1.1", "1.2.1", "2.5.2", "3.-.3"]);
}

#[test]
fn test_blank_slot_is_treated_as_empty() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let store = SqliteCatalogStore::open(&db_path).expect("Failed to open catalog");

    let base = BaseConfiguration::new(IsoClass::new("2", "2", "2"), "QOF")
        .with_slot(SlotPosition::QAS1, "QMF")
        .with_slot(SlotPosition::QAS2, "   ");
    store.iso_configuration_repo.create(&base).expect("create failed");

    let loaded = store
        .find_base_configuration("2.2.2")
        .expect("query failed")
        .expect("2.2.2 should exist");
    assert_eq!(loaded.slot(SlotPosition::QAS2), None);
    assert_eq!(loaded.occupied_slots().count(), 1);
}

#[test]
fn test_duplicate_iso_class_is_unique_violation() {
    let (_temp_file, store) = open_seeded();

    let duplicate = BaseConfiguration::new(IsoClass::new("1", "2", "1"), "QOF");
    let err = store
        .iso_configuration_repo
        .create(&duplicate)
        .expect_err("duplicate should fail");
    assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
}

// ==========================================
// 流量区间
// ==========================================

#[test]
fn test_flow_range_query_is_sorted_and_prefix_matched() {
    let (_temp_file, store) = open_seeded();

    let ranges = store
        .find_flow_ranges(
            &FlowRangeQuery::new("4", "QHD").with_dewpoint(Some(Dewpoint::Minus40F)),
        )
        .expect("query failed");
    let names: Vec<&str> = ranges.iter().map(|r| r.product_range.as_str()).collect();
    assert_eq!(names, vec!["QHD 10-99", "QHD 100-250"]);

    // 前缀匹配区分大小写,不把 "_" / "%" 当通配符
    assert!(store
        .find_flow_ranges(&FlowRangeQuery::new("4", "qhd"))
        .expect("query failed")
        .is_empty());
    assert!(store
        .find_flow_ranges(&FlowRangeQuery::new("4", "Q%"))
        .expect("query failed")
        .is_empty());
}

#[test]
fn test_flow_range_query_with_flow_and_without_dewpoint() {
    let (_temp_file, store) = open_seeded();

    let ranges = store
        .find_flow_ranges(&FlowRangeQuery::new("1", "QHD").with_flow(Some(99.0)))
        .expect("query failed");
    assert_eq!(ranges.len(), 2);
    assert!(ranges.iter().all(|r| r.product_range == "QHD 10-99"));

    let ranges = store
        .find_flow_ranges(
            &FlowRangeQuery::new("1", "QHD")
                .with_dewpoint(Some(Dewpoint::Minus100F))
                .with_flow(Some(150.0)),
        )
        .expect("query failed");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].min_flow, 150.0);
    assert_eq!(ranges[0].max_flow, 150.0);
}

#[test]
fn test_flow_range_text_validation() {
    let (_temp_file, store) = open_seeded();

    let err = store
        .flow_range_repo
        .create_from_text("2", "QCMD bad", None, "abc")
        .expect_err("unparsable text should fail");
    match err {
        RepositoryError::FieldValueError { field, .. } => assert_eq!(field, "flow_range"),
        other => panic!("Expected FieldValueError, got {:?}", other),
    }

    let err = store
        .flow_range_repo
        .create(&FlowRange::new("2", "QCMD 20-10", None, 20.0, 10.0))
        .expect_err("min > max should fail");
    assert!(matches!(err, RepositoryError::FieldValueError { .. }));
}

#[test]
fn test_sqlite_and_memory_stores_agree() {
    let (_temp_file, sqlite) = open_seeded();

    let mut memory = InMemoryCatalogStore::new();
    for range in sqlite.flow_range_repo.list_by_water_class("4").expect("list failed") {
        memory = memory.with_flow_range(range);
    }

    let query = FlowRangeQuery::new("4", "QBP").with_flow(Some(75.0));
    let mut from_memory = memory.find_flow_ranges(&query).expect("query failed");
    let mut from_sqlite = sqlite.find_flow_ranges(&query).expect("query failed");
    iso_air_configurator::engine::range_matcher::sort_by_min_flow(&mut from_memory);
    iso_air_configurator::engine::range_matcher::sort_by_min_flow(&mut from_sqlite);

    let names = |ranges: &[FlowRange]| {
        ranges
            .iter()
            .map(|r| r.product_range.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&from_memory), names(&from_sqlite));
    assert_eq!(names(&from_sqlite), vec!["QBP 50-300"]);
}

// ==========================================
// 行业 / 应用 / 纯度描述
// ==========================================

#[test]
fn test_application_lookup_and_listing() {
    let (_temp_file, store) = open_seeded();

    assert_eq!(
        store
            .find_application("Food & Beverage", "Bottling")
            .expect("query failed"),
        Some(IsoClass::new("1", "1", "1"))
    );
    assert!(store
        .find_application("Food & Beverage", "Nope")
        .expect("query failed")
        .is_none());

    let industries = store.application_repo.list_industries().expect("list failed");
    let names: Vec<&str> = industries.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Carwash", "Food & Beverage"]);

    let food = industries
        .iter()
        .find(|i| i.name == "Food & Beverage")
        .expect("industry should exist");
    let apps = store
        .application_repo
        .list_applications(food.id)
        .expect("list failed");
    let app_names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(app_names, vec!["Bottling", "Packaging"]);
    assert_eq!(
        apps[1].description.as_deref(),
        Some("Direct contact with packaged food")
    );
}

#[test]
fn test_purity_levels_grouped() {
    let (_temp_file, store) = open_seeded();

    let grouped = store.purity_level_repo.list_grouped().expect("list failed");
    let levels = |entries: &[iso_air_configurator::domain::PurityLevelEntry]| {
        entries.iter().map(|e| e.level.clone()).collect::<Vec<_>>()
    };
    assert_eq!(levels(&grouped.particle), vec!["1", "2"]);
    assert_eq!(levels(&grouped.water), vec!["1", "2"]);
    assert_eq!(levels(&grouped.oil), vec!["1"]);
}

#[test]
fn test_schema_version_recorded() {
    let (_temp_file, store) = open_seeded();
    assert_eq!(
        store.schema_version().expect("query failed"),
        Some(iso_air_configurator::db::CURRENT_SCHEMA_VERSION)
    );
}
