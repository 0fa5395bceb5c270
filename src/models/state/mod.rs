mod methods;
mod types;

#[cfg(test)]
mod tests;

pub use types::{PathwayState, StageTimestamps};
