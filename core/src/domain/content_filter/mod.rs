pub mod policies;
pub mod services;

pub use policies::{ForbiddenTermSet, forbidden_terms, restriction_terms};
pub use services::{SUBSTITUTE_PHRASE, filter};
