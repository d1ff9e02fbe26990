//! Storage capability for student records, and its SQLite implementation.
//!
//! Handlers only see [`Storage`]; any backend that implements it can be dropped into
//! [`crate::AppState`] without touching the HTTP layer.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::model::Student;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no student found with id {0}")]
    NotFound(i64),
    /// Failure while reading a single row.
    #[error("query error: {0}")]
    Query(sqlx::Error),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("storage path: {0}")]
    Io(#[from] std::io::Error),
}

/// The five record operations every backend provides, plus a liveness check.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a record and return the id the backend assigned to it.
    async fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StoreError>;

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StoreError>;

    /// All records in id order.
    async fn get_students_list(&self) -> Result<Vec<Student>, StoreError>;

    /// Replace name, email and age of `id`, then return the row as stored.
    /// `student.id` is ignored.
    async fn update_student_info(&self, id: i64, student: &Student) -> Result<Student, StoreError>;

    async fn delete_student(&self, id: i64) -> Result<(), StoreError>;

    /// Round-trip to the backend. Used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;
}
