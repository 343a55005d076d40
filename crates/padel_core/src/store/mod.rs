// Session archive: JSON list on disk, most recent first.

pub mod error;
pub mod manager;

pub use error::StoreError;
pub use manager::SessionStore;
