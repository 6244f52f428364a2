pub mod repository;

pub use repository::SqliteHealthCheckRepository;
