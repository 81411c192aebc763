pub mod error;
pub mod rfc;
