#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod image_io;
pub mod input;
pub mod panels;
pub mod picture;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelPaintApp;
pub use color::Color;
pub use command::{Action, HistoryPolicy};
pub use config::EditorConfig;
pub use error::{ColorParseError, ConfigError, ImageIoError, PictureError};
pub use input::PointerEvent;
pub use picture::{Edit, Picture, Position};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use tools::{Gesture, Tool, ToolKind};
