pub mod evaluate;
pub mod optimize;
pub mod rfe;
