pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod progress;
pub mod utils;

// Re-export commonly used items
pub use args::{Args, Command};
pub use colors::ColorScheme;
pub use utils::format_number;
