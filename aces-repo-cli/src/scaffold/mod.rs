//! Materializing the template catalog onto disk

pub mod generator;

pub use generator::Materializer;
