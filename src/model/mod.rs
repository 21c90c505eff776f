pub mod play;
pub mod teams;

pub use play::*;
pub use teams::*;
