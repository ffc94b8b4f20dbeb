pub mod clipboard;
pub mod config;
pub mod content;
pub mod form;
pub mod links;
pub mod logging;
pub mod reveal;
pub mod transport;
pub mod ui;
