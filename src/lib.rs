pub mod config;
pub mod outcome;
pub mod output;
pub mod parser;
pub mod server;
pub mod sorter;
pub mod views;

pub use outcome::SortOutcome;
pub use parser::{parse_integers, IntegerSequence};
pub use sorter::sort;
