pub mod svr;

pub use svr::*;
