//! City explorer: the interactive front end and renderer for the quadtree index.

pub mod cli;
pub mod config;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use render::{render_svg, write_svg};
pub use session::Session;
