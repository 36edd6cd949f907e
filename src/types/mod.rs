// Shared type definitions used across the shell.

pub mod command;
pub mod config;
pub mod errors;
pub mod tab;
