//! Database models shared across the academic platform repository.

pub mod config;
pub mod course;
pub mod interest;
pub mod job;
pub mod master_field;
pub mod sub_field;
pub mod user;
