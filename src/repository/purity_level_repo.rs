// ==========================================
// ISO 8573 压缩空气配置工具 - 纯度描述仓储
// ==========================================

use crate::domain::catalog::{PurityLevel, PurityLevelsGrouped};
use crate::domain::types::PurityClassType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// 职责: 管理 iso_purity_level 表
pub struct PurityLevelRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PurityLevelRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn create(&self, level: &PurityLevel) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO iso_purity_level (iso_class_type, level, purity_description, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                level.class_type.to_db_str(),
                level.level,
                level.description,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// 查询某类型的全部等级（按等级值）
    pub fn list_by_type(&self, class_type: PurityClassType) -> RepositoryResult<Vec<PurityLevel>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT level, purity_description
            FROM iso_purity_level
            WHERE iso_class_type = ?1
            ORDER BY level ASC
            "#,
        )?;
        let levels = stmt
            .query_map(params![class_type.to_db_str()], |row| {
                Ok(PurityLevel {
                    class_type,
                    level: row.get(0)?,
                    description: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(levels)
    }

    /// 按 particle / water / oil 分组
    pub fn list_grouped(&self) -> RepositoryResult<PurityLevelsGrouped> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT iso_class_type, level, purity_description
            FROM iso_purity_level
            ORDER BY iso_class_type ASC, level ASC
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        let mut grouped = PurityLevelsGrouped::default();
        for (class_type, level, description) in rows {
            match PurityClassType::from_db_str(&class_type) {
                Some(class_type) => grouped.push(PurityLevel {
                    class_type,
                    level,
                    description,
                }),
                None => warn!(class_type = %class_type, level = %level, "未知纯度类型，已跳过"),
            }
        }
        Ok(grouped)
    }
}
