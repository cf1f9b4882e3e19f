//! Value types passed between the backend, the extraction step and the
//! output writer.

mod page;
mod record;

pub use page::Page;
pub use record::{header_for, TextRecord};
