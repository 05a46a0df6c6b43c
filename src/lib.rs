//! Cut-corner ("notched") rectangle outlines.
//!
//! Given an element rectangle, four corner cuts and a stroke, [`CornerCutPathBuilder`] produces a
//! closed polygon that clips each cut corner with a diagonal notch, and a second polygon inset by
//! half the stroke width for the outline. Pixels are left to a [`Canvas`] backend.

mod builder;
mod canvas;
mod color;
mod config;
mod cuts;
mod error;
mod mesh;
mod path;
mod recording;
mod stroke;
mod util;

pub use lyon;

/// Axis-aligned rectangle in device pixels.
pub type Rect = lyon::math::Box2D;

pub use builder::{CornerCutPathBuilder, Host};
pub use canvas::{Canvas, Capabilities, Compositing, CutoutStrategy, MaskShape};
pub use color::Color;
pub use config::{CutAttributes, CutCornerConfig, CutMaxPolicy};
pub use cuts::{Corner, CornerCuts};
pub use error::{Error, Result};
pub use mesh::{BatchKind, MeshBatch, MeshBuffers, MeshCanvas, MeshCommand, MeshVertex};
pub use path::CutPath;
pub use recording::{CanvasCommand, RecordedMask, RecordingCanvas};
pub use stroke::Stroke;
