pub mod aggregate;

pub use aggregate::{Page, PageDto, PageId};
