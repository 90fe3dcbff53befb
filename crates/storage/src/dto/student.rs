use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Student;

/// Response containing a stored student record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub codeforces_handle: String,
    pub current_rating: i32,
    pub max_rating: i32,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a student.
///
/// Every field is required; fields are `Option` so that an omitted field
/// surfaces as a 400 validation error rather than a body-deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(required(message = "Name is required"))]
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"))]
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(required(message = "Contact is required"))]
    #[validate(length(min = 1, max = 255, message = "Contact must not be empty"))]
    pub contact: Option<String>,

    #[validate(required(message = "Codeforces handle is required"))]
    #[validate(length(min = 1, max = 255, message = "Codeforces handle must not be empty"))]
    pub codeforces_handle: Option<String>,

    #[validate(required(message = "Current rating is required"))]
    pub current_rating: Option<i32>,

    #[validate(required(message = "Max rating is required"))]
    pub max_rating: Option<i32>,
}

/// Request payload for editing a student. Omitted fields keep their
/// current value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Contact must not be empty"))]
    pub contact: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Codeforces handle must not be empty"))]
    pub codeforces_handle: Option<String>,

    pub current_rating: Option<i32>,

    pub max_rating: Option<i32>,
}

/// Field set for an insert, produced from a validated create request.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub codeforces_handle: String,
    pub current_rating: i32,
    pub max_rating: i32,
}

impl CreateStudentRequest {
    /// Collapses the optional fields after validation. Fields the validator
    /// guaranteed present fall back to the schema defaults, so this never
    /// panics even on an unvalidated request.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            codeforces_handle: self.codeforces_handle.unwrap_or_default(),
            current_rating: self.current_rating.unwrap_or(0),
            max_rating: self.max_rating.unwrap_or(0),
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.student_id,
            name: student.name,
            email: student.email,
            contact: student.contact,
            codeforces_handle: student.codeforces_handle,
            current_rating: student.current_rating,
            max_rating: student.max_rating,
            created_at: student.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateStudentRequest {
        CreateStudentRequest {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            contact: Some("5550100".into()),
            codeforces_handle: Some("ada_l".into()),
            current_rating: Some(1400),
            max_rating: Some(1520),
        }
    }

    #[test]
    fn complete_create_request_is_valid() {
        assert!(full_request().validate().is_ok());
    }

    #[test]
    fn each_missing_field_fails_validation() {
        let mut req = full_request();
        req.name = None;
        assert!(req.validate().is_err());

        let mut req = full_request();
        req.email = None;
        assert!(req.validate().is_err());

        let mut req = full_request();
        req.contact = None;
        assert!(req.validate().is_err());

        let mut req = full_request();
        req.codeforces_handle = None;
        assert!(req.validate().is_err());

        let mut req = full_request();
        req.current_rating = None;
        assert!(req.validate().is_err());

        let mut req = full_request();
        req.max_rating = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let mut req = full_request();
        req.email = Some("not-an-email".into());
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_update_request_is_valid() {
        let req = UpdateStudentRequest {
            name: None,
            email: None,
            contact: None,
            codeforces_handle: None,
            current_rating: None,
            max_rating: None,
        };
        assert!(req.validate().is_ok());
    }
}
