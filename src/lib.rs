//! Front-ends for the cellsim engine: the interactive terminal app and the
//! headless batch runner.

pub mod app;
pub mod headless;
