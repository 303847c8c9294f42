//! roster-file - Filesystem-backed record store.

mod index;
mod io;
mod store;

pub use store::FileStore;
