pub mod error;
pub mod services;
