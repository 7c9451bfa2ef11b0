pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod is_close;
pub mod iterate;
mod tolerance;

pub use is_close::{isclose, IsClose};
pub use tolerance::{Method, Tolerance, ToleranceError};
