pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image_ref;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use image_ref::ImageRef;
pub use list::ListMarker;
pub use paragraph::Paragraph;
pub use table::PipeTable;
