//! # Image Resolution
//!
//! Turns an image reference (path, alt text, optional width hint) into an
//! [`ImageSpec`](crate::model::ImageSpec).
//!
//! - **`geometry`**: `ImageLayout` page constants and `WidthHint` sizing rules
//! - **`probe`**: `ImageProbe` seam over the filesystem and image headers
//! - **`resolver`**: `ImageResolver` path resolution and sizing

pub mod geometry;
pub mod probe;
pub mod resolver;

pub use geometry::{ImageLayout, WidthHint, WidthHintError};
pub use probe::{FsImageProbe, ImageProbe, ProbeError};
pub use resolver::{ImageResolver, Resolution};
