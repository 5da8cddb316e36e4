//! Cat API model types.

mod breed;
mod image;

pub use breed::*;
pub use image::*;
