//! In-memory book store.
//!
//! [`BookStore`] keeps records in insertion order and is the only place
//! records are created, replaced, or removed. Each book variant plugs in
//! through the [`Record`] trait, which owns its validation rules and how a
//! draft becomes (or overwrites) a stored record.

mod error;
mod id;
mod memory;
mod record;
mod year;

pub use error::{StoreError, StoreResult, ValidationError};
pub use id::BookId;
pub use memory::BookStore;
pub use record::{validate_progress, validate_title, Record};
pub use year::lenient_year;
