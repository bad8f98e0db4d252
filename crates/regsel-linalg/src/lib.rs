pub mod decomposition;
pub mod solve;

pub use decomposition::*;
pub use solve::*;
