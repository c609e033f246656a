pub mod common;
pub mod image;
pub mod session;

pub use common::*;
pub use image::*;
pub use session::*;
