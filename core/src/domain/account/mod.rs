pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Account;
pub use ports::{AccountRepository, AccountService};
