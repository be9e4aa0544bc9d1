//! Request payloads accepted by the JSON API.
//!
//! Forms are validated with `validator` before conversion; conversion into
//! domain values then enforces the value-object invariants.

pub mod courses;
pub mod jobs;
pub mod taxonomy;
pub mod users;
