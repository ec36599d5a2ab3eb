//! Keyboard input for the terminal front end

pub mod handler;
pub mod keyboard;

pub use handler::InputHandler;
pub use keyboard::KeyboardInput;
