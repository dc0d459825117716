pub mod clipboard;
pub mod file;
pub mod log;
pub mod render;
pub mod stdin;

pub use clipboard::*;
pub use file::*;
pub use render::*;
pub use stdin::*;
