mod error;
mod notify;
mod payload;
mod pricing;

pub use error::*;
pub use notify::*;
pub use payload::*;
pub use pricing::*;
