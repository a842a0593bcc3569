// List the different tasks here
pub mod color;
pub mod measurements;
pub mod operation;
pub mod plot;
pub mod summary;
