mod controller;
mod effect;
mod state;

pub use controller::*;
pub use effect::*;
pub use state::*;
