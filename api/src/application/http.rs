pub mod account;
pub mod health;
pub mod plan;
pub mod server;
