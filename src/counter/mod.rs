mod lines;

pub use lines::{LineCounter, LineStats};
