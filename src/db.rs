// ==========================================
// ISO 8573 压缩空气配置工具 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout
// - 目录表结构集中定义,测试与命令行共用
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 目录表结构
pub const CATALOG_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS config_scope (
    scope_id TEXT PRIMARY KEY,
    scope_type TEXT NOT NULL,
    scope_key TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(scope_type, scope_key)
);

INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key)
VALUES ('global', 'GLOBAL', 'global');

CREATE TABLE IF NOT EXISTS config_kv (
    scope_id TEXT NOT NULL REFERENCES config_scope(scope_id) ON DELETE CASCADE,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (scope_id, key)
);

CREATE TABLE IF NOT EXISTS iso_purity_level (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    iso_class_type TEXT NOT NULL,
    level TEXT NOT NULL,
    purity_description TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(iso_class_type, level)
);

CREATE TABLE IF NOT EXISTS industry (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS application (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    industry_id INTEGER NOT NULL REFERENCES industry(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT,
    particulate_class TEXT NOT NULL,
    water_class TEXT NOT NULL,
    oil_class TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(industry_id, name)
);

CREATE TABLE IF NOT EXISTS iso_configuration (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    iso_class TEXT NOT NULL UNIQUE,
    particulate_class TEXT NOT NULL,
    water_class TEXT NOT NULL,
    oil_class TEXT NOT NULL,
    compressor TEXT NOT NULL,
    qas1 TEXT,
    qas2 TEXT,
    qas3 TEXT,
    qas4 TEXT,
    qas5 TEXT,
    qas6 TEXT,
    qas7 TEXT,
    qas8 TEXT,
    qas9 TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS product_range (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    water_class TEXT NOT NULL,
    product_range TEXT NOT NULL,
    dewpoint TEXT,
    min_flow REAL NOT NULL,
    max_flow REAL NOT NULL,
    inlet_filters TEXT,
    outlet_filters TEXT,
    comment TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_product_range_water_class
    ON product_range(water_class, min_flow);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表（幂等）并记录 schema_version
pub fn init_catalog_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CATALOG_SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;
    Ok(())
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
