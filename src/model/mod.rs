mod file;
mod image;
mod markdown;
mod message;
mod news;
mod template_card;
mod text;

pub use file::*;
pub use image::*;
pub use markdown::*;
pub use message::*;
pub use news::*;
pub use template_card::*;
pub use text::*;
