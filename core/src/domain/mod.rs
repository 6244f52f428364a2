pub mod account;
pub mod common;
pub mod content_filter;
pub mod crypto;
pub mod health;
pub mod plan;
pub mod prompt;
