//! Change classification - comparison of remote and local listings

mod classify;

pub use classify::classify;
