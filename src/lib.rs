pub mod app;
pub mod cli;
pub mod components;
pub mod domain;
pub mod logging;
pub mod palette;
pub mod theme;
