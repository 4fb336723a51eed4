mod app;
pub mod resize;
pub mod theme;
mod views;

pub use app::GanttApp;
