//! BDD step definitions for the battery health client

pub mod polling_steps;
pub mod rendering_steps;
pub mod submission_steps;
