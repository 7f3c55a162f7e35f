//! API handlers

pub mod root;
pub mod tasks;
