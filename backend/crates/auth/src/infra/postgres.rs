//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{OrganizationId, ProjectId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{organization::Organization, user::User};
use crate::domain::repository::{OrganizationRepository, UserRepository};
use crate::domain::value_object::{Email, UserPassword, UserRole};
use crate::error::{AuthError, AuthResult};

/// User columns plus the aggregated project assignments
///
/// Every query using this prefix must end with `GROUP BY u.user_id`.
const SELECT_USER: &str = r#"
    SELECT
        u.user_id,
        u.name,
        u.email,
        u.password_hash,
        u.user_role,
        u.organization_id,
        u.created_at,
        u.updated_at,
        COALESCE(
            ARRAY_AGG(pa.project_id ORDER BY pa.assigned_at)
                FILTER (WHERE pa.project_id IS NOT NULL),
            '{}'
        ) AS projects
    FROM users u
    LEFT JOIN project_assignments pa ON pa.user_id = u.user_id
"#;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique violation into the domain conflict it stands for
fn map_unique(err: sqlx::Error, conflict: AuthError) -> AuthError {
    if is_unique_violation(&err) {
        conflict
    } else {
        AuthError::Database(err)
    }
}

async fn insert_user<'e, E>(executor: E, user: &User) -> AuthResult<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO users (
            user_id,
            name,
            email,
            password_hash,
            user_role,
            organization_id,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(user.user_id.as_uuid())
    .bind(&user.name)
    .bind(user.email.as_str())
    .bind(user.password_hash.as_phc_string())
    .bind(user.user_role.id())
    .bind(user.organization_id.as_uuid())
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(executor)
    .await
    .map_err(|e| map_unique(e, AuthError::EmailTaken))?;

    Ok(())
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let sql = format!("{SELECT_USER} WHERE u.user_id = $1 GROUP BY u.user_id");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let sql = format!("{SELECT_USER} WHERE u.email = $1 GROUP BY u.user_id");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        insert_user(&self.pool, user).await
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        // Roster rows go with the user (ON DELETE CASCADE)
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
        role: Option<UserRole>,
    ) -> AuthResult<Vec<User>> {
        let sql = format!(
            "{SELECT_USER}
            WHERE u.organization_id = $1
              AND ($2::SMALLINT IS NULL OR u.user_role = $2)
            GROUP BY u.user_id
            ORDER BY u.created_at"
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(organization_id.as_uuid())
            .bind(role.map(|r| r.id()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> AuthResult<Vec<User>> {
        let sql = format!(
            "{SELECT_USER}
            WHERE u.user_id IN (
                SELECT user_id FROM project_assignments WHERE project_id = $1
            )
            GROUP BY u.user_id
            ORDER BY u.created_at"
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(project_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }
}

// ============================================================================
// Organization Repository Implementation
// ============================================================================

impl OrganizationRepository for PgAuthRepository {
    async fn title_exists(&self, title: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM organizations WHERE title = $1)",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_with_manager(
        &self,
        organization: &Organization,
        manager: &User,
    ) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO organizations (
                organization_id,
                title,
                manager_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(organization.organization_id.as_uuid())
        .bind(&organization.title)
        .bind(organization.manager_id.as_uuid())
        .bind(organization.created_at)
        .bind(organization.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique(e, AuthError::OrganizationTaken))?;

        insert_user(&mut *tx, manager).await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    user_role: i16,
    organization_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    projects: Vec<Uuid>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_role = UserRole::from_id(self.user_role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid user_role: {}", self.user_role)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            user_role,
            organization_id: OrganizationId::from_uuid(self.organization_id),
            projects: self.projects.into_iter().map(ProjectId::from_uuid).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
