pub mod config;
pub mod exception;
pub mod hash;
pub mod logger;
