// ==========================================
// ISO 8573 压缩空气配置工具 - 配置管理器
// ==========================================
// 职责: 引擎参数加载、覆写
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// JSON 数组，例如 ["QCMD","QHD"]
    pub const DRYER_TYPE_CODES: &str = "engine/dryer_type_codes";
    /// JSON 对象，例如 {"5":"4"}
    pub const WATER_CLASS_ALIASES: &str = "engine/water_class_aliases";
}

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("锁获取失败: {0}")]
    Lock(String),

    #[error("配置读取失败: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置值无效 (key={key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, ConfigError> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, ConfigError> {
        {
            let conn_guard = conn.lock().map_err(|e| ConfigError::Lock(e.to_string()))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 读取 global scope 的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let conn = self.conn.lock().map_err(|e| ConfigError::Lock(e.to_string()))?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入 global scope 的配置值（存在则覆盖）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let conn = self.conn.lock().map_err(|e| ConfigError::Lock(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// 加载引擎参数：默认值 + config_kv 覆写
    pub fn load_engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::default();

        if let Some(raw) = self.get_global_config_value(config_keys::DRYER_TYPE_CODES)? {
            let codes: Vec<String> = parse_json(config_keys::DRYER_TYPE_CODES, &raw)?;
            let codes: Vec<String> = codes
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if codes.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: config_keys::DRYER_TYPE_CODES.to_string(),
                    message: "干燥机类型代码不能为空".to_string(),
                });
            }
            config.dryer_type_codes = codes;
        }

        if let Some(raw) = self.get_global_config_value(config_keys::WATER_CLASS_ALIASES)? {
            let aliases: BTreeMap<String, String> =
                parse_json(config_keys::WATER_CLASS_ALIASES, &raw)?;
            config.water_class_aliases = aliases;
        }

        debug!(
            dryer_type_codes = ?config.dryer_type_codes,
            water_class_aliases = ?config.water_class_aliases,
            "引擎参数已加载"
        );
        Ok(config)
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
