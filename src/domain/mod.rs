pub mod compatibility;
pub mod entities;
pub mod error;
