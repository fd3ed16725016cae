// ==========================================
// ISO 8573 压缩空气配置工具 - 基础配置仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::catalog::{BaseConfiguration, SlotPosition, SLOT_COUNT};
use crate::domain::types::IsoClass;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const SELECT_COLUMNS: &str = r#"
    particulate_class, water_class, oil_class, compressor,
    qas1, qas2, qas3, qas4, qas5, qas6, qas7, qas8, qas9
"#;

// ==========================================
// IsoConfigurationRepository - 基础配置仓储
// ==========================================
/// 职责: 管理 iso_configuration 表
pub struct IsoConfigurationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl IsoConfigurationRepository {
    /// 创建新的 IsoConfigurationRepository 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 写入基础配置
    pub fn create(&self, config: &BaseConfiguration) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let s = &config.slots;
        conn.execute(
            r#"
            INSERT INTO iso_configuration (
                iso_class, particulate_class, water_class, oil_class, compressor,
                qas1, qas2, qas3, qas4, qas5, qas6, qas7, qas8, qas9,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                config.iso_class.key(),
                config.iso_class.particulate,
                config.iso_class.water,
                config.iso_class.oil,
                config.compressor,
                s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7], s[8],
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// 按 ISO 键查询
    ///
    /// # 返回
    /// - Ok(Some(BaseConfiguration)): 找到
    /// - Ok(None): 未找到
    /// - Err: 数据库错误
    pub fn find_by_iso_class(&self, iso_class: &str) -> RepositoryResult<Option<BaseConfiguration>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM iso_configuration WHERE iso_class = ?1",
            SELECT_COLUMNS
        );

        let config = conn
            .query_row(&sql, params![iso_class], map_base_configuration)
            .optional()?;
        Ok(config)
    }

    /// 查询全部基础配置（按 ISO 键排序）
    pub fn list_all(&self) -> RepositoryResult<Vec<BaseConfiguration>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM iso_configuration ORDER BY iso_class ASC",
            SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let configs = stmt
            .query_map([], map_base_configuration)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(configs)
    }
}

fn map_base_configuration(row: &Row<'_>) -> SqliteResult<BaseConfiguration> {
    let iso_class = IsoClass::new(
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
    );
    let mut config = BaseConfiguration::new(iso_class, row.get::<_, String>(3)?);

    for index in 0..SLOT_COUNT {
        if let Some(position) = SlotPosition::from_index(index) {
            config.set_slot(position, row.get::<_, Option<String>>(4 + index)?);
        }
    }

    Ok(config)
}
