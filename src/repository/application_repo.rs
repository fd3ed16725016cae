// ==========================================
// ISO 8573 压缩空气配置工具 - 行业/应用仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::catalog::{Application, Industry};
use crate::domain::types::IsoClass;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// ApplicationRepository - 行业/应用仓储
// ==========================================
/// 职责: 管理 industry / application 表
pub struct ApplicationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ApplicationRepository {
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

    /// 创建行业，返回 id
    pub fn create_industry(&self, name: &str) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO industry (name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 在行业下创建应用，返回 id
    pub fn create_application(
        &self,
        industry_id: i64,
        name: &str,
        description: Option<&str>,
        iso_class: &IsoClass,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO application (
                industry_id, name, description,
                particulate_class, water_class, oil_class, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                industry_id,
                name,
                description,
                iso_class.particulate,
                iso_class.water,
                iso_class.oil,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按行业名 + 应用名查询 ISO 等级
    pub fn find_iso_class(
        &self,
        industry_name: &str,
        application_name: &str,
    ) -> RepositoryResult<Option<IsoClass>> {
        let conn = self.get_conn()?;
        let iso_class = conn
            .query_row(
                r#"
                SELECT a.particulate_class, a.water_class, a.oil_class
                FROM application a
                JOIN industry i ON i.id = a.industry_id
                WHERE i.name = ?1 AND a.name = ?2
                LIMIT 1
                "#,
                params![industry_name, application_name],
                |row| {
                    Ok(IsoClass::new(
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;
        Ok(iso_class)
    }

    /// 查询全部行业（按名称）
    pub fn list_industries(&self) -> RepositoryResult<Vec<Industry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM industry ORDER BY name ASC")?;
        let industries = stmt
            .query_map([], |row| {
                Ok(Industry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(industries)
    }

    /// 查询行业下的应用（按名称）
    pub fn list_applications(&self, industry_id: i64) -> RepositoryResult<Vec<Application>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, industry_id, name, description,
                   particulate_class, water_class, oil_class
            FROM application
            WHERE industry_id = ?1
            ORDER BY name ASC
            "#,
        )?;
        let applications = stmt
            .query_map(params![industry_id], |row| {
                Ok(Application {
                    id: row.get(0)?,
                    industry_id: row.get(1)?,
                    name: row.get(2)?,
                    description: row.get(3)?,
                    iso_class: IsoClass::new(
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                        row.get::<_, String>(6)?,
                    ),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(applications)
    }
}
