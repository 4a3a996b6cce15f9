pub mod control;
pub mod rules;
pub mod stoch;

pub use control::*;
pub use rules::*;
pub use stoch::*;
