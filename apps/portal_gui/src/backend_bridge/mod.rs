//! Backend worker: owns the tokio runtime and the portal controller.

pub mod commands;
pub mod runtime;
