//! Client-side synchronization strategies for the bookshelf service.
//!
//! * [`server_sync::ServerShelf`] treats the HTTP service as the source of
//!   truth: every mutation goes through the API and is followed by a full
//!   re-fetch and re-render.
//! * [`local_sync::LocalShelf`] owns the book models itself and mirrors them
//!   into two local-storage entries after every change.
//!
//! Both produce plain view structs from [`view`] instead of touching a DOM.

pub mod error;
pub mod local_sync;
pub mod server_sync;
pub mod storage;
pub mod transport;
pub mod view;

pub use error::{ClientError, ClientResult};
pub use local_sync::{LocalShelf, StoredBook, COMPLETE_KEY, INCOMPLETE_KEY};
pub use server_sync::{BooksClient, NewBook, ServerShelf, SyncState, DEFAULT_BASE_URL};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use transport::{HttpClient, LoopbackClient, ReqwestClient};
