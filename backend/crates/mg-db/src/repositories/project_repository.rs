//! SQLite-backed project store.
//!
//! Every mutation is a single statement, so SQLite serialises concurrent
//! writes to the same row; the last writer wins.

use crate::{DbError, ProjectStore, Result as DbErrorResult};

use mg_core::{Project, TenantId};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "mg_projects";

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a fully built project row.
    pub async fn insert(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO mg_projects (
                    id, tenant_id, name, description, version, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(project.tenant_id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.version)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn create(
        &self,
        tenant_id: TenantId,
        name: String,
        description: Option<String>,
    ) -> DbErrorResult<Uuid> {
        let project = Project::new(tenant_id, name, description);
        self.insert(&project).await?;

        Ok(project.id)
    }

    async fn delete(&self, project_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM mg_projects WHERE id = ?")
            .bind(project_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn rename(&self, project_id: Uuid, name: String) -> DbErrorResult<Option<Uuid>> {
        let result = sqlx::query(
            r#"
                UPDATE mg_projects
                SET name = ?, version = version + 1, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(Utc::now().timestamp())
        .bind(project_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok((result.rows_affected() > 0).then_some(project_id))
    }

    async fn redescribe(
        &self,
        project_id: Uuid,
        description: Option<String>,
    ) -> DbErrorResult<Option<Uuid>> {
        let result = sqlx::query(
            r#"
                UPDATE mg_projects
                SET description = ?, version = version + 1, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(description)
        .bind(Utc::now().timestamp())
        .bind(project_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok((result.rows_affected() > 0).then_some(project_id))
    }

    async fn find_by_id(&self, project_id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, name, description, version, created_at, updated_at
                FROM mg_projects
                WHERE id = ?
            "#,
        )
        .bind(project_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn find_by_tenant(&self, tenant_id: TenantId) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, name, description, version, created_at, updated_at
                FROM mg_projects
                WHERE tenant_id = ?
                ORDER BY name, created_at
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(project_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let tenant_id: String = row.try_get("tenant_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Project {
        id: Uuid::parse_str(&id).map_err(|e| corrupt(format!("Invalid UUID in id: {}", e)))?,
        tenant_id: tenant_id
            .parse::<TenantId>()
            .map_err(|e| corrupt(format!("Invalid tenant_id: {}", e)))?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        version: row.try_get("version")?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| corrupt(format!("Invalid timestamp in {}", column)))
}

#[track_caller]
fn corrupt(message: String) -> DbError {
    DbError::CorruptRow {
        table: TABLE,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
