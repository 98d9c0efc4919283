pub mod domain;
pub mod errors;
pub mod ports;
pub mod reconstruct;

pub use errors::CoreError;
