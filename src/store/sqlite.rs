//! SQLite backend: one `students` table, one parameterized statement per operation.

use super::{Storage, StoreError};
use crate::model::Student;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        age INTEGER
    )
"#;
const INSERT: &str = "INSERT INTO students (name, email, age) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1";
const SELECT_ALL: &str = "SELECT id, name, email, age FROM students ORDER BY id";
const UPDATE: &str = "UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM students WHERE id = ?";

/// Student storage over a sqlx SQLite pool. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file at `path` and ensure the table exists.
    /// `max_connections` falls back to the sqlx pool default.
    pub async fn open(path: impl AsRef<Path>, max_connections: Option<u32>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new();
        if let Some(n) = max_connections {
            pool_options = pool_options.max_connections(n);
        }
        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(path = %path.display(), "opened sqlite pool");
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool. Idempotent: the table is only created when absent.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(SqliteStore { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Storage for SqliteStore {
    async fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StoreError> {
        tracing::debug!(sql = %INSERT, "query");
        let result = sqlx::query(INSERT)
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::Query)?
            .ok_or(StoreError::NotFound(id))?;
        row_to_student(&row).map_err(StoreError::Query)
    }

    async fn get_students_list(&self) -> Result<Vec<Student>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        let students = rows.iter().map(row_to_student).collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn update_student_info(&self, id: i64, student: &Student) -> Result<Student, StoreError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        let result = sqlx::query(UPDATE)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        let row = sqlx::query(SELECT_BY_ID).bind(id).fetch_one(&self.pool).await?;
        Ok(row_to_student(&row)?)
    }

    async fn delete_student(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Text columns are nullable in the schema; NULL reads back as an empty string.
fn row_to_student(row: &SqliteRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: row.try_get("id")?,
        name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
        age: row.try_get::<Option<i64>, _>("age")?.unwrap_or_default(),
    })
}
