//! Route tables: student CRUD plus common service routes.

mod common;
mod student;
pub use common::common_routes;
pub use student::student_routes;
