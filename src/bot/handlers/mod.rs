mod callback_query;
mod command_public;
mod payment;
mod utils;

pub use callback_query::*;
pub use command_public::*;
pub use payment::*;
pub use utils::*;
