//! Domain entities exposed by the academic platform service layer.

pub mod course;
pub mod interest;
pub mod job;
pub mod master_field;
pub mod sub_field;
pub mod types;
pub mod user;
