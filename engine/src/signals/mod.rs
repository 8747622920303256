// Composite buy-signal rule evaluated on the latest bars of a frame
pub mod evaluator;

pub use evaluator::{evaluate, Conditions};
