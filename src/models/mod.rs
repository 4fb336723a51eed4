// Module exports for models

pub mod change;
pub mod change_log;
pub mod event;
pub mod grid;
pub mod settings;
