mod contact;
mod message;
mod types;

pub use contact::*;
pub use message::*;
pub use types::*;
