pub mod merged;
pub mod session;
pub mod sheet;
