// ==========================================
// ISO 8573 压缩空气配置工具 - 流量区间仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 约束: 所有查询使用参数化
// ==========================================

use crate::domain::catalog::{FlowBounds, FlowRange};
use crate::domain::types::Dewpoint;
use crate::repository::catalog_store::FlowRangeQuery;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const SELECT_COLUMNS: &str = r#"
    water_class, product_range, dewpoint, min_flow, max_flow,
    inlet_filters, outlet_filters, comment
"#;

// ==========================================
// FlowRangeRepository - 流量区间仓储
// ==========================================
/// 职责: 管理 product_range 表
pub struct FlowRangeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FlowRangeRepository {
    /// 创建新的 FlowRangeRepository 实例
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

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 写入流量区间
    pub fn create(&self, range: &FlowRange) -> RepositoryResult<i64> {
        if range.min_flow > range.max_flow {
            return Err(RepositoryError::FieldValueError {
                field: "min_flow".to_string(),
                message: format!(
                    "{} 的下限 {} 大于上限 {}",
                    range.product_range, range.min_flow, range.max_flow
                ),
            });
        }

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO product_range (
                water_class, product_range, dewpoint, min_flow, max_flow,
                inlet_filters, outlet_filters, comment, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                range.water_class,
                range.product_range,
                range.dewpoint.map(|d| d.as_str()),
                range.min_flow,
                range.max_flow,
                range.inlet_filters,
                range.outlet_filters,
                range.comment,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 以文本区间 ("2-11") 写入流量区间
    pub fn create_from_text(
        &self,
        water_class: &str,
        product_range: &str,
        dewpoint: Option<Dewpoint>,
        flow_range_text: &str,
    ) -> RepositoryResult<i64> {
        let bounds = FlowBounds::parse(flow_range_text).ok_or_else(|| {
            RepositoryError::FieldValueError {
                field: "flow_range".to_string(),
                message: format!("无法解析流量区间: {}", flow_range_text),
            }
        })?;

        self.create(&FlowRange::from_bounds(
            water_class,
            product_range,
            dewpoint,
            bounds,
        ))
    }

    /// 按查询条件检索（按 min_flow 升序）
    ///
    /// 前缀比较使用 substr 而非 LIKE，保持大小写敏感且不受通配符影响
    pub fn find_matching(&self, query: &FlowRangeQuery) -> RepositoryResult<Vec<FlowRange>> {
        let mut sql = format!(
            r#"
            SELECT {}
            FROM product_range
            WHERE water_class = ?1
              AND substr(product_range, 1, length(?2)) = ?2
            "#,
            SELECT_COLUMNS
        );
        let mut values: Vec<Value> = vec![
            Value::Text(query.water_class.clone()),
            Value::Text(query.dryer_type_prefix.clone()),
        ];

        if let Some(dewpoint) = query.dewpoint {
            values.push(Value::Text(dewpoint.as_str().to_string()));
            sql.push_str(&format!(" AND dewpoint = ?{}", values.len()));
        }

        if let Some(flow) = query.flow {
            values.push(Value::Real(flow));
            let idx = values.len();
            sql.push_str(&format!(" AND min_flow <= ?{idx} AND max_flow >= ?{idx}"));
        }

        sql.push_str(" ORDER BY min_flow ASC, id ASC");

        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let ranges = stmt
            .query_map(params_from_iter(values.iter()), map_flow_range)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(ranges)
    }

    /// 查询某水分等级下的全部流量区间
    pub fn list_by_water_class(&self, water_class: &str) -> RepositoryResult<Vec<FlowRange>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM product_range WHERE water_class = ?1 ORDER BY product_range ASC, min_flow ASC",
            SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let ranges = stmt
            .query_map(params![water_class], map_flow_range)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(ranges)
    }
}

fn map_flow_range(row: &Row<'_>) -> SqliteResult<FlowRange> {
    Ok(FlowRange {
        water_class: row.get(0)?,
        product_range: row.get(1)?,
        dewpoint: row
            .get::<_, Option<String>>(2)?
            .and_then(|s| Dewpoint::parse(&s)),
        min_flow: row.get(3)?,
        max_flow: row.get(4)?,
        inlet_filters: row.get(5)?,
        outlet_filters: row.get(6)?,
        comment: row.get(7)?,
    })
}
