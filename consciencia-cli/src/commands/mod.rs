pub mod assess;
pub mod config;
pub mod prompts;
pub mod reports;
pub mod summary;
