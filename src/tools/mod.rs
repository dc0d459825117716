// Modular tools
pub mod clean;
