// server/src/cli/mod.rs

pub mod cli;
pub mod handlers_auth;
pub mod handlers_patient;
pub mod handlers_utils;
