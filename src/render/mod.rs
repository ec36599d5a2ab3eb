//! Terminal rendering of game snapshots

pub mod palette;
pub mod renderer;
pub mod terminal;

pub use palette::Palette;
pub use renderer::Renderer;
pub use terminal::TerminalSink;
