pub mod k001_knowledge_item;
pub mod k002_event;
pub mod k003_blog_post;
pub mod k004_template;
pub mod k005_page;
