//! Route tables.

mod common;
mod student;
pub use common::{common_routes, common_routes_with_ready};
pub use student::student_routes;
