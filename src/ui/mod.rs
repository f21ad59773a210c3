//! Terminal interaction - styled output, prompts, and interrupt handling

pub mod interrupt;
mod term;

pub use term::*;
