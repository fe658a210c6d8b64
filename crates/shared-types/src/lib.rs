pub mod error;
pub mod feature_flags;
pub mod notification;
pub mod worker;

pub use error::*;
pub use feature_flags::*;
pub use notification::*;
pub use worker::*;
