pub mod error;
pub mod file_type;
pub mod logger;
pub mod validation;
