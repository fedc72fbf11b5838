pub mod aggregate;

pub use aggregate::{BlogPost, BlogPostDto, BlogPostId};
