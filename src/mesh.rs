//! A [`Canvas`] that tessellates masks and strokes into triangle meshes with lyon.
//!
//! The output is a list of [`MeshCommand`]s: layer boundaries and vertex/index batches, each
//! batch tagged with how it composites. Canvas transforms are baked into vertex positions, so a
//! GPU host only has to upload the buffers and pick a blend state per batch.
//!
//! `rect − path` masks are tessellated with the even-odd rule, which makes the difference exact
//! as long as the path lies inside the rectangle. Tessellations are cached by geometry so that
//! redrawing an unchanged element reuses its buffers.

use crate::canvas::{Canvas, Capabilities, Compositing, MaskShape};
use crate::{Color, Rect, Stroke};
use ahash::RandomState;
use bytemuck::{Pod, Zeroable};
use lru::LruCache;
use lyon::math::{vector, Point, Transform};
use lyon::path::{Event, FillRule, LineJoin, Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};
use std::hash::{BuildHasher, Hash, Hasher};
use std::num::NonZeroUsize;

const DEFAULT_CACHE_SIZE: usize = 32;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

pub type MeshBuffers = VertexBuffers<MeshVertex, u16>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BatchKind {
    Mask(Compositing),
    Stroke,
}

#[derive(Clone, Debug)]
pub struct MeshBatch {
    pub kind: BatchKind,
    pub buffers: MeshBuffers,
}

#[derive(Clone, Debug)]
pub enum MeshCommand {
    BeginLayer(Rect),
    EndLayer,
    Draw(MeshBatch),
}

struct VertexConverter {
    color: [f32; 4],
    transform: Transform,
}

impl VertexConverter {
    fn new(color: Color, transform: Transform) -> Self {
        Self {
            color: color.normalize(),
            transform,
        }
    }

    fn vertex(&self, position: Point) -> MeshVertex {
        MeshVertex {
            position: self.transform.transform_point(position).to_array(),
            color: self.color,
        }
    }
}

impl FillVertexConstructor<MeshVertex> for VertexConverter {
    fn new_vertex(&mut self, vertex: FillVertex) -> MeshVertex {
        self.vertex(vertex.position())
    }
}

impl StrokeVertexConstructor<MeshVertex> for VertexConverter {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> MeshVertex {
        self.vertex(vertex.position())
    }
}

struct StackEntry {
    transform: Transform,
    is_layer: bool,
}

pub struct MeshCanvas {
    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
    tessellation_cache: LruCache<u64, MeshBuffers>,
    hasher: RandomState,
    transform: Transform,
    stack: Vec<StackEntry>,
    commands: Vec<MeshCommand>,
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::with_cache_size(NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn with_cache_size(cache_size: NonZeroUsize) -> Self {
        Self {
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
            tessellation_cache: LruCache::new(cache_size),
            hasher: RandomState::new(),
            transform: Transform::identity(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[MeshCommand] {
        &self.commands
    }

    /// Hands the recorded frame over and starts a new one. Cached tessellations survive.
    pub fn take_commands(&mut self) -> Vec<MeshCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn cached_tessellations(&self) -> usize {
        self.tessellation_cache.len()
    }

    fn cache_key(&self, kind: BatchKind, geometry: &[&Path], stroke: Option<&Stroke>) -> u64 {
        let mut state = self.hasher.build_hasher();
        kind.hash(&mut state);
        for value in self.transform.to_array() {
            value.to_bits().hash(&mut state);
        }
        for path in geometry {
            hash_path(path, &mut state);
        }
        if let Some(stroke) = stroke {
            stroke.width.to_bits().hash(&mut state);
            stroke.color.hash(&mut state);
        }
        state.finish()
    }

    fn push_batch(
        &mut self,
        kind: BatchKind,
        key: u64,
        tessellate: impl FnOnce(&mut Self) -> Option<MeshBuffers>,
    ) {
        let buffers = match self.tessellation_cache.get(&key).cloned() {
            Some(buffers) => buffers,
            None => {
                let Some(buffers) = tessellate(self) else {
                    return;
                };
                self.tessellation_cache.put(key, buffers.clone());
                buffers
            }
        };
        self.commands.push(MeshCommand::Draw(MeshBatch { kind, buffers }));
    }
}

fn hash_point<H: Hasher>(point: Point, state: &mut H) {
    point.x.to_bits().hash(state);
    point.y.to_bits().hash(state);
}

fn hash_path<H: Hasher>(path: &Path, state: &mut H) {
    for event in path.iter() {
        match event {
            Event::Begin { at } => hash_point(at, state),
            Event::Line { to, .. } => hash_point(to, state),
            Event::Quadratic { ctrl, to, .. } => {
                hash_point(ctrl, state);
                hash_point(to, state);
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                hash_point(ctrl1, state);
                hash_point(ctrl2, state);
                hash_point(to, state);
            }
            Event::End { close, .. } => close.hash(state),
        }
    }
}

fn rect_minus_path(rect: &Rect, hole: &Path) -> Path {
    let mut builder = Path::builder();
    builder.add_rectangle(rect, Winding::Positive);
    for event in hole.iter() {
        builder.path_event(event);
    }
    builder.build()
}

impl Canvas for MeshCanvas {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            path_difference: true,
        }
    }

    fn save_layer(&mut self, bounds: Rect) {
        self.stack.push(StackEntry {
            transform: self.transform,
            is_layer: true,
        });
        let bounds = self.transform.outer_transformed_box(&bounds);
        self.commands.push(MeshCommand::BeginLayer(bounds));
    }

    fn save(&mut self) {
        self.stack.push(StackEntry {
            transform: self.transform,
            is_layer: false,
        });
    }

    fn restore(&mut self) {
        let Some(entry) = self.stack.pop() else {
            tracing::warn!("restore without matching save");
            return;
        };
        self.transform = entry.transform;
        if entry.is_layer {
            self.commands.push(MeshCommand::EndLayer);
        }
    }

    fn scale_about(&mut self, sx: f32, sy: f32, pivot: Point) {
        self.transform = Transform::translation(-pivot.x, -pivot.y)
            .then_scale(sx, sy)
            .then_translate(vector(pivot.x, pivot.y))
            .then(&self.transform);
    }

    fn fill_mask(&mut self, shape: MaskShape<'_>, compositing: Compositing) {
        let kind = BatchKind::Mask(compositing);
        let (path, fill_rule) = match shape {
            MaskShape::Path(path) => (path.clone(), FillRule::NonZero),
            MaskShape::RectMinusPath { rect, hole } => {
                (rect_minus_path(&rect, hole), FillRule::EvenOdd)
            }
        };
        let key = self.cache_key(kind, &[&path], None);

        self.push_batch(kind, key, |canvas| {
            let mut buffers = MeshBuffers::new();
            let options = FillOptions::default().with_fill_rule(fill_rule);
            let converter = VertexConverter::new(Color::WHITE, canvas.transform);
            let result = canvas.fill_tessellator.tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut buffers, converter),
            );
            match result {
                Ok(()) => Some(buffers),
                Err(error) => {
                    tracing::warn!("Failed to tessellate mask: {:?}", error);
                    None
                }
            }
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if stroke.is_empty() {
            return;
        }
        let key = self.cache_key(BatchKind::Stroke, &[path], Some(stroke));

        self.push_batch(BatchKind::Stroke, key, |canvas| {
            let mut buffers = MeshBuffers::new();
            let options = StrokeOptions::default()
                .with_line_width(stroke.width)
                .with_line_join(LineJoin::Miter);
            let converter = VertexConverter::new(stroke.color, canvas.transform);
            let result = canvas.stroke_tessellator.tessellate_path(
                path,
                &options,
                &mut BuffersBuilder::new(&mut buffers, converter),
            );
            match result {
                Ok(()) => Some(buffers),
                Err(error) => {
                    tracing::warn!("Failed to tessellate stroke: {:?}", error);
                    None
                }
            }
        });
    }
}
