//! Student entity: the single domain record and its JSON shape.

use serde::Serialize;
use sqlx::FromRow;

/// A persisted student row. Field order here is the JSON output order:
/// id, lastname, firstname, gender, email, mobile, registrationNumber.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub lastname: String,
    pub firstname: String,
    /// 1 or 2.
    pub gender: i16,
    pub email: String,
    pub mobile: String,
    #[serde(rename = "registrationNumber")]
    pub registration_number: i32,
}

/// The six writable fields, as produced by a successful validation.
/// The id is assigned by the repository on insert and never carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub lastname: String,
    pub firstname: String,
    pub gender: i16,
    pub email: String,
    pub mobile: String,
    pub registration_number: i32,
}

impl Student {
    pub fn from_draft(id: i32, draft: StudentDraft) -> Self {
        Student {
            id,
            lastname: draft.lastname,
            firstname: draft.firstname,
            gender: draft.gender,
            email: draft.email,
            mobile: draft.mobile,
            registration_number: draft.registration_number,
        }
    }

    /// Wholesale replacement of the writable fields (PUT semantics). The id
    /// stays untouched.
    pub fn apply(&mut self, draft: StudentDraft) {
        self.lastname = draft.lastname;
        self.firstname = draft.firstname;
        self.gender = draft.gender;
        self.email = draft.email;
        self.mobile = draft.mobile;
        self.registration_number = draft.registration_number;
    }
}
