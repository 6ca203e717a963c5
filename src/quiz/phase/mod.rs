mod question;
mod results;
mod reveal;

pub use self::question::*;
pub use self::results::*;
pub use self::reveal::*;
