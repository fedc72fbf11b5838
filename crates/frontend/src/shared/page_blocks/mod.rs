pub mod block_styles;
pub mod events_list_block;
pub mod image_block;
pub mod knowledge_items_block;
pub mod recommendations_block;
pub mod renderer;
pub mod resolve;

pub use renderer::render_block;
