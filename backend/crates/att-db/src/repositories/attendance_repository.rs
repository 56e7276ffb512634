use crate::{DbError, Result as DbErrorResult};

use att_core::{AttendanceRecord, AttendanceStats, AttendanceStatus};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct AttendanceRepository;

impl AttendanceRepository {
    pub async fn create<'e, E>(executor: E, record: &AttendanceRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO attendance (id, name, confidence, timestamp, status)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(record.confidence)
        .bind(record.timestamp.timestamp_millis())
        .bind(record.status.as_str())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Newest first
    pub async fn find_recent<'e, E>(executor: E, limit: i64) -> DbErrorResult<Vec<AttendanceRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, name, confidence, timestamp, status
              FROM attendance
              ORDER BY timestamp DESC
              LIMIT ?
              "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Newest first
    pub async fn find_by_name<'e, E>(
        executor: E,
        name: &str,
        limit: i64,
    ) -> DbErrorResult<Vec<AttendanceRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, name, confidence, timestamp, status
              FROM attendance
              WHERE name = ?
              ORDER BY timestamp DESC
              LIMIT ?
              "#,
        )
        .bind(name)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn stats<'e, E>(executor: E) -> DbErrorResult<AttendanceStats>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
              SELECT
                  COUNT(*) AS total,
                  COALESCE(SUM(CASE WHEN status = 'authorized' THEN 1 ELSE 0 END), 0) AS authorized,
                  COALESCE(SUM(CASE WHEN status = 'unauthorized' THEN 1 ELSE 0 END), 0) AS unauthorized,
                  COUNT(DISTINCT CASE WHEN status = 'authorized' THEN name END) AS unique_people
              FROM attendance
              "#,
        )
        .fetch_one(executor)
        .await?;

        Ok(AttendanceStats {
            total: row.try_get("total")?,
            authorized: row.try_get("authorized")?,
            unauthorized: row.try_get("unauthorized")?,
            unique_people: row.try_get("unique_people")?,
        })
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    #[track_caller]
    fn map_row(row: &SqliteRow) -> DbErrorResult<AttendanceRecord> {
        let id: String = row.try_get("id")?;
        let millis: i64 = row.try_get("timestamp")?;
        let status: String = row.try_get("status")?;

        let timestamp = DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Corrupt {
            id: id.clone(),
            message: format!("timestamp {} out of range", millis),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = status
            .parse::<AttendanceStatus>()
            .map_err(|e| DbError::Corrupt {
                id: id.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(AttendanceRecord {
            name: row.try_get("name")?,
            confidence: row.try_get("confidence")?,
            timestamp,
            status,
            id,
        })
    }
}
