pub mod blocking;
pub mod dialogs;
pub mod files;
