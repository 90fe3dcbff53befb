use sqlx::PgPool;
use storage::{
    dto::student::{CreateStudentRequest, UpdateStudentRequest},
    error::Result,
    models::Student,
    repository::student::StudentRepository,
};
use uuid::Uuid;

/// List all students
pub async fn list_students(pool: &PgPool) -> Result<Vec<Student>> {
    let repo = StudentRepository::new(pool);
    repo.list().await
}

/// Get a student by id
pub async fn get_student(pool: &PgPool, id: Uuid) -> Result<Student> {
    let repo = StudentRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new student from a validated request
pub async fn create_student(pool: &PgPool, request: CreateStudentRequest) -> Result<Student> {
    let repo = StudentRepository::new(pool);
    repo.create(&request.into_new_student()).await
}

/// Update a student; omitted fields keep their stored value
pub async fn update_student(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateStudentRequest,
) -> Result<Student> {
    let repo = StudentRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a student
pub async fn delete_student(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = StudentRepository::new(pool);
    repo.delete(id).await
}
