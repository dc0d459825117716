#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod services;
pub mod tools;
pub mod types;

pub use error::*;
pub use tools::clean::{clean, clean_all, clean_text};
pub use types::*;
