// src/models.rs
mod category;
mod collection;
mod file_entry;
mod render_mode;
mod stats;

pub use category::Category;
pub use collection::Collection;
pub use file_entry::FileEntry;
pub use render_mode::{CLIENT_MARKER, RenderMode};
pub use stats::{Counter, Stats};
