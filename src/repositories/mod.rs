//! Storage behind the services.
//!
//! Each service owns one [`InMemoryRepository`] keyed by record identity.

mod in_memory;
mod traits;

pub use in_memory::InMemoryRepository;
pub use traits::Record;
