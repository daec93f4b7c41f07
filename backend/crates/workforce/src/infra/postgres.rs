//! PostgreSQL Repository Implementations

use auth::application::tenant_scope::ProjectScope;
use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{OrganizationId, ProjectId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

/// PostgreSQL-backed project repository
///
/// Users live in `PgAuthRepository`; both share one pool and one schema.
#[derive(Clone)]
pub struct PgWorkforceRepository {
    pool: PgPool,
}

impl PgWorkforceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_title_conflict(err: sqlx::Error) -> WorkforceError {
    if is_unique_violation(&err) {
        WorkforceError::ProjectTitleTaken
    } else {
        WorkforceError::Database(err)
    }
}

fn uuids(ids: &[UserId]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

// ============================================================================
// Project Repository Implementation
// ============================================================================

impl ProjectRepository for PgWorkforceRepository {
    async fn find_project(&self, project_id: &ProjectId) -> WorkforceResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
                organization_id,
                title,
                description,
                created_at,
                updated_at
            FROM projects
            WHERE project_id = $1
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_project()))
    }

    async fn list_projects(&self, scope: &ProjectScope) -> WorkforceResult<Vec<Project>> {
        // Every branch filters by organization
        let rows = match scope {
            ProjectScope::Organization(organization_id) => {
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                    SELECT
                        project_id,
                        organization_id,
                        title,
                        description,
                        created_at,
                        updated_at
                    FROM projects
                    WHERE organization_id = $1
                    ORDER BY created_at
                    "#,
                )
                .bind(organization_id.as_uuid())
                .fetch_all(&self.pool)
                .await?
            }
            ProjectScope::Assigned {
                organization_id,
                project_ids,
            } => {
                let ids: Vec<Uuid> = project_ids.iter().map(|id| *id.as_uuid()).collect();
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                    SELECT
                        project_id,
                        organization_id,
                        title,
                        description,
                        created_at,
                        updated_at
                    FROM projects
                    WHERE organization_id = $1
                      AND project_id = ANY($2)
                    ORDER BY created_at
                    "#,
                )
                .bind(organization_id.as_uuid())
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(|r| r.into_project()).collect())
    }

    async fn project_title_taken(
        &self,
        organization_id: &OrganizationId,
        title: &str,
        except: Option<&ProjectId>,
    ) -> WorkforceResult<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM projects
                WHERE organization_id = $1
                  AND title = $2
                  AND ($3::UUID IS NULL OR project_id <> $3)
            )
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(title)
        .bind(except.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn create_project(&self, project: &Project, roster: &[UserId]) -> WorkforceResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO projects (
                project_id,
                organization_id,
                title,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(project.organization_id.as_uuid())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_title_conflict)?;

        sqlx::query(
            r#"
            INSERT INTO project_assignments (project_id, user_id)
            SELECT $1, UNNEST($2::UUID[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(uuids(roster))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn update_project(&self, project: &Project) -> WorkforceResult<()> {
        sqlx::query(
            r#"
            UPDATE projects SET
                title = $2,
                description = $3,
                updated_at = $4
            WHERE project_id = $1
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_title_conflict)?;

        Ok(())
    }

    async fn set_roster(&self, project_id: &ProjectId, roster: &[UserId]) -> WorkforceResult<()> {
        let ids = uuids(roster);
        let mut tx = self.pool.begin().await?;

        // Kept assignments retain their original timestamp
        sqlx::query(
            r#"
            DELETE FROM project_assignments
            WHERE project_id = $1
              AND user_id <> ALL($2::UUID[])
            "#,
        )
        .bind(project_id.as_uuid())
        .bind(&ids)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO project_assignments (project_id, user_id)
            SELECT $1, UNNEST($2::UUID[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(project_id.as_uuid())
        .bind(&ids)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE projects SET updated_at = NOW() WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn delete_project(&self, project_id: &ProjectId) -> WorkforceResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM project_assignments WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM projects WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: Uuid,
    organization_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self) -> Project {
        Project {
            project_id: ProjectId::from_uuid(self.project_id),
            organization_id: OrganizationId::from_uuid(self.organization_id),
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
