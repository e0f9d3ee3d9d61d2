pub mod activation;
pub mod common;
