pub mod animation;
pub mod bitmap;
pub mod framebuffer;
pub mod header;

pub use bitmap::{BinaryGrid, PackedBitmap};
pub use framebuffer::Canvas;

#[cfg(test)]
mod tests;
