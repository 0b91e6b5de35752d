pub mod cell;
pub mod stats;
