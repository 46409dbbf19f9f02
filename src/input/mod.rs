mod handler;

pub use handler::{FrameInput, InputCommand, InputHandler};
