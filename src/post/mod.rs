//! Post-alignment culling of HSPs and targets

pub mod culling;
pub mod streaming;

pub use culling::Culler;
