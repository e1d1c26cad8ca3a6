//! Student API: RESTful CRUD backend for student records.

pub mod error;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;
pub mod translate;

pub use error::AppError;
pub use model::{Student, StudentDraft};
pub use response::Envelope;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_student_table};
pub use routes::{common_routes, student_routes};
pub use service::{MemoryStudentRepository, PgStudentRepository, StudentRepository, StudentValidator};
pub use translate::Translator;
