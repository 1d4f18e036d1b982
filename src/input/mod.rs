pub mod bundle;

pub use bundle::{MetricsBundle, dotted};

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
