//! Student persistence behind a trait so handlers never touch SQL directly.
//!
//! `PgStudentRepository` is the production implementation; `MemoryStudentRepository`
//! backs the router tests and database-less runs.

use crate::model::{Student, StudentDraft};
use async_trait::async_trait;
use sqlx::PgPool;

/// CRUD access to student rows. Mutations are explicit calls at defined
/// points; there is no implicit flush. Single-row atomicity only.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, sqlx::Error>;
    /// All students, newest first (ORDER BY id DESC).
    async fn find_all_desc(&self) -> Result<Vec<Student>, sqlx::Error>;
    /// Persists the draft; the store assigns the id.
    async fn insert(&self, draft: &StudentDraft) -> Result<Student, sqlx::Error>;
    async fn update(&self, student: &Student) -> Result<(), sqlx::Error>;
    async fn delete(&self, student: &Student) -> Result<(), sqlx::Error>;
}

const COLUMNS: &str = "id, lastname, firstname, gender, email, mobile, registration_number";

pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        PgStudentRepository { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, sqlx::Error> {
        let sql = format!("SELECT {} FROM student WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all_desc(&self) -> Result<Vec<Student>, sqlx::Error> {
        let sql = format!("SELECT {} FROM student ORDER BY id DESC", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await
    }

    async fn insert(&self, draft: &StudentDraft) -> Result<Student, sqlx::Error> {
        const SQL: &str = "INSERT INTO student \
            (lastname, firstname, gender, email, mobile, registration_number) \
            VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";
        tracing::debug!(sql = SQL, "query");
        let id: i32 = sqlx::query_scalar(SQL)
            .bind(&draft.lastname)
            .bind(&draft.firstname)
            .bind(draft.gender)
            .bind(&draft.email)
            .bind(&draft.mobile)
            .bind(draft.registration_number)
            .fetch_one(&self.pool)
            .await?;
        Ok(Student::from_draft(id, draft.clone()))
    }

    async fn update(&self, student: &Student) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE student SET \
            lastname = $1, firstname = $2, gender = $3, email = $4, mobile = $5, \
            registration_number = $6 WHERE id = $7";
        tracing::debug!(sql = SQL, id = student.id, "query");
        sqlx::query(SQL)
            .bind(&student.lastname)
            .bind(&student.firstname)
            .bind(student.gender)
            .bind(&student.email)
            .bind(&student.mobile)
            .bind(student.registration_number)
            .bind(student.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, student: &Student) -> Result<(), sqlx::Error> {
        const SQL: &str = "DELETE FROM student WHERE id = $1";
        tracing::debug!(sql = SQL, id = student.id, "query");
        sqlx::query(SQL).bind(student.id).execute(&self.pool).await?;
        Ok(())
    }
}

/// In-memory store with sequential id assignment. Used by the router tests
/// and usable as a database-less dev backend.
#[derive(Default)]
pub struct MemoryStudentRepository {
    inner: tokio::sync::Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: Vec<Student>,
    last_id: i32,
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, sqlx::Error> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn find_all_desc(&self) -> Result<Vec<Student>, sqlx::Error> {
        let inner = self.inner.lock().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn insert(&self, draft: &StudentDraft) -> Result<Student, sqlx::Error> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let student = Student::from_draft(inner.last_id, draft.clone());
        inner.rows.push(student.clone());
        Ok(student)
    }

    async fn update(&self, student: &Student) -> Result<(), sqlx::Error> {
        let mut inner = self.inner.lock().await;
        if let Some(row) = inner.rows.iter_mut().find(|s| s.id == student.id) {
            *row = student.clone();
        }
        Ok(())
    }

    async fn delete(&self, student: &Student) -> Result<(), sqlx::Error> {
        let mut inner = self.inner.lock().await;
        inner.rows.retain(|s| s.id != student.id);
        Ok(())
    }
}
