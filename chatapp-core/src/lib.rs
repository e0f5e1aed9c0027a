pub mod models;
pub mod placement;
pub mod replies;
pub mod roster;
pub mod session;

pub use session::{Action, Effect, Session, SessionOptions};
