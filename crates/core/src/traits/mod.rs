pub mod associator;

pub use associator::*;
