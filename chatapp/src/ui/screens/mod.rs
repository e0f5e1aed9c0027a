mod conversation;
mod landing;

pub use conversation::*;
pub use landing::*;
