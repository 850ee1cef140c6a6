pub mod extract_service;
pub mod merge_service;
