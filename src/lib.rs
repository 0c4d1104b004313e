#![forbid(unsafe_code)]
//! TreeList — writes a directory tree as a flat, newline-delimited list of relative paths.

pub mod cli;
pub mod session;
pub mod tree;
pub mod writer;
