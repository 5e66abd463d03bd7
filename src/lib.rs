#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod bitmap;
pub mod command;
pub mod document;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod stroke;
pub mod text;
pub mod tools;

pub use app::DrawingApp;
pub use bitmap::Bitmap;
pub use command::{Command, CommandOutcome, CommandResult};
pub use document::Document;
pub use error::{CanvasError, CommandError, ExportError};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use settings::Settings;
pub use state::EditorState;
pub use stroke::{Segment, StrokeCursor};
pub use tools::{BrushSize, ToolState};
