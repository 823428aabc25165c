#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod context;
pub mod element;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod tool;

pub use app::SketchApp;
pub use context::SketchContext;
pub use element::{Element, ElementType};
pub use event::{EventBus, SketchEvent};
pub use history::EditHistory;
pub use input::{InputEvent, InputHandler, PointerState, PointerTracker};
pub use preview::{Preview, PreviewController};
pub use renderer::Renderer;
pub use tool::{Tool, ToolState};
