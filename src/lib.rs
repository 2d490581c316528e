//! Bookshelf application library
//!
//! Hosts the HTTP modules served by the `bookshelf-app` binary:
//! [`modules::library`] under `/books` and [`modules::shelf`] under
//! `/api/books`.

pub mod modules;
pub mod utils;

pub use modules::register_all;
