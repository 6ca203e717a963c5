pub mod config;
pub mod decorations;
pub mod input;
pub mod logging;
pub mod output;
pub mod quiz;
