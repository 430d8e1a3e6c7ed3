pub mod timer;

pub use timer::{FixedTimestep, Timer};
