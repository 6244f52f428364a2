pub mod banner;
pub mod health;
