// Services layer
// Session ownership and settings I/O around the pure models

pub mod chart;
pub mod settings;
