use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::student::{NewStudent, UpdateStudentRequest};
use crate::error::{Result, StorageError};
use crate::models::Student;

const DUPLICATE_EMAIL: &str = "A student with this email already exists";

pub struct StudentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all students, oldest first
    pub async fn list(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, email, contact, codeforces_handle,
                   current_rating, max_rating, created_at
            FROM students
            ORDER BY created_at, student_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Find a student by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, email, contact, codeforces_handle,
                   current_rating, max_rating, created_at
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(student)
    }

    /// Insert a new student
    pub async fn create(&self, new: &NewStudent) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, contact, codeforces_handle, current_rating, max_rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING student_id, name, email, contact, codeforces_handle,
                      current_rating, max_rating, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.contact)
        .bind(&new.codeforces_handle)
        .bind(new.current_rating)
        .bind(new.max_rating)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint_violation(DUPLICATE_EMAIL))?;

        Ok(student)
    }

    /// Update an existing student; fields absent from the request keep
    /// their current value.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Student,
        req: &UpdateStudentRequest,
    ) -> Result<Student> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let email = req.email.as_ref().unwrap_or(&existing.email);
        let contact = req.contact.as_ref().unwrap_or(&existing.contact);
        let codeforces_handle = req
            .codeforces_handle
            .as_ref()
            .unwrap_or(&existing.codeforces_handle);
        let current_rating = req.current_rating.unwrap_or(existing.current_rating);
        let max_rating = req.max_rating.unwrap_or(existing.max_rating);

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $2,
                email = $3,
                contact = $4,
                codeforces_handle = $5,
                current_rating = $6,
                max_rating = $7
            WHERE student_id = $1
            RETURNING student_id, name, email, contact, codeforces_handle,
                      current_rating, max_rating, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(contact)
        .bind(codeforces_handle)
        .bind(current_rating)
        .bind(max_rating)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint_violation(DUPLICATE_EMAIL))?
        .ok_or(StorageError::NotFound)?;

        Ok(student)
    }

    /// Delete a student by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
