pub mod coords;
pub mod outcome;
pub mod stop;

pub use coords::*;
pub use outcome::*;
pub use stop::*;
