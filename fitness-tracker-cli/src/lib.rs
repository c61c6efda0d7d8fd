// Library exports for the fitness tracker CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
