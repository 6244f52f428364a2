pub mod account;
pub mod crypto;
pub mod db;
pub mod health;
pub mod llm;
