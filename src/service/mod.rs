//! Validation and persistence for the student pipeline.

mod repository;
mod validation;
pub use repository::{MemoryStudentRepository, PgStudentRepository, StudentRepository};
pub use validation::StudentValidator;
