use crate::canvas::{Canvas, Capabilities, Compositing, MaskShape};
use crate::{Rect, Stroke};
use lyon::math::Point;
use lyon::path::Path;

/// Owned form of [`MaskShape`].
#[derive(Clone, Debug)]
pub enum RecordedMask {
    Path(Path),
    RectMinusPath { rect: Rect, hole: Path },
}

#[derive(Clone, Debug)]
pub enum CanvasCommand {
    SaveLayer(Rect),
    Save,
    Restore,
    ScaleAbout { sx: f32, sy: f32, pivot: Point },
    FillMask {
        mask: RecordedMask,
        compositing: Compositing,
    },
    StrokePath { path: Path, stroke: Stroke },
}

/// A canvas that only records what it is asked to do.
///
/// Useful for hosts that replay commands on their own backend, and for inspecting draw output.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    capabilities: Capabilities,
    commands: Vec<CanvasCommand>,
    depth: usize,
}

impl RecordingCanvas {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            commands: Vec::new(),
            depth: 0,
        }
    }

    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<CanvasCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of saves not yet restored.
    pub fn save_depth(&self) -> usize {
        self.depth
    }
}

impl Canvas for RecordingCanvas {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn save_layer(&mut self, bounds: Rect) {
        self.depth += 1;
        self.commands.push(CanvasCommand::SaveLayer(bounds));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(CanvasCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            tracing::warn!("restore without matching save");
            return;
        }
        self.depth -= 1;
        self.commands.push(CanvasCommand::Restore);
    }

    fn scale_about(&mut self, sx: f32, sy: f32, pivot: Point) {
        self.commands.push(CanvasCommand::ScaleAbout { sx, sy, pivot });
    }

    fn fill_mask(&mut self, shape: MaskShape<'_>, compositing: Compositing) {
        let mask = match shape {
            MaskShape::Path(path) => RecordedMask::Path(path.clone()),
            MaskShape::RectMinusPath { rect, hole } => RecordedMask::RectMinusPath {
                rect,
                hole: hole.clone(),
            },
        };
        self.commands.push(CanvasCommand::FillMask { mask, compositing });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(CanvasCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasCommand, RecordingCanvas};
    use crate::canvas::{Canvas, Capabilities};
    use crate::Rect;
    use lyon::math::point;

    #[test]
    fn unmatched_restore_is_ignored() {
        let mut canvas = RecordingCanvas::new(Capabilities::default());
        canvas.restore();
        assert!(canvas.commands().is_empty());
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn saves_and_restores_track_depth() {
        let mut canvas = RecordingCanvas::new(Capabilities::default());
        canvas.save_layer(Rect::new(point(0.0, 0.0), point(10.0, 10.0)));
        canvas.save();
        assert_eq!(canvas.save_depth(), 2);
        canvas.restore();
        canvas.restore();
        assert_eq!(canvas.save_depth(), 0);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], CanvasCommand::SaveLayer(_)));
        assert!(canvas.commands().is_empty());
    }
}
