//! Drawing surface abstraction.
//!
//! Chains never read from a surface; they only emit path commands into it.
//! [`RecordingSurface`] keeps the commands for inspection and
//! [`SvgSurface`] turns stroked paths into an SVG document.

use std::fmt::Write as _;

use nalgebra::Point2;

use crate::config::SvgConfig;

/// Sink for 2D path commands, shaped after a canvas 2D context.
pub trait Surface {
    /// Discard any pending path and start a new one.
    fn begin_path(&mut self);
    /// Move the pen without drawing.
    fn move_to(&mut self, p: Point2<f32>);
    /// Extend the pending path with a straight line.
    fn line_to(&mut self, p: Point2<f32>);
    /// Stroke the pending path.
    fn stroke(&mut self);
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// A single recorded path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point2<f32>),
    LineTo(Point2<f32>),
    Stroke,
}

/// Surface that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands in the order they were issued.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Stroked line segments as `(from, to)` pairs.
    ///
    /// Lines belonging to a path that was never stroked are left out.
    pub fn lines(&self) -> Vec<(Point2<f32>, Point2<f32>)> {
        let mut lines = Vec::new();
        let mut pending = Vec::new();
        let mut pen: Option<Point2<f32>> = None;

        for cmd in &self.commands {
            match *cmd {
                DrawCommand::BeginPath => {
                    pending.clear();
                    pen = None;
                }
                DrawCommand::MoveTo(p) => pen = Some(p),
                DrawCommand::LineTo(p) => {
                    if let Some(from) = pen {
                        pending.push((from, p));
                    }
                    pen = Some(p);
                }
                DrawCommand::Stroke => lines.append(&mut pending),
            }
        }
        lines
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point2<f32>) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2<f32>) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

// ---------------------------------------------------------------------------
// SvgSurface
// ---------------------------------------------------------------------------

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CAPS: &str = r#"stroke-linecap="round""#;

/// Surface that renders stroked paths as SVG `<path>` elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    config: SvgConfig,
    pending: String,
    paths: Vec<String>,
}

impl SvgSurface {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            pending: String::new(),
            paths: Vec::new(),
        }
    }

    /// Number of stroked paths so far.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Render the complete SVG document.
    pub fn render(&self) -> String {
        let [w, h] = self.config.size;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if let Some(background) = &self.config.background {
            let _ = writeln!(
                out,
                r#"  <rect width="100%" height="100%" fill="{background}"/>"#
            );
        }
        for d in &self.paths {
            let (stroke, width) = (&self.config.stroke, self.config.stroke_width);
            let _ = writeln!(
                out,
                r#"  <path d="{d}" fill="none" stroke="{stroke}" stroke-width="{width}" {CAPS}/>"#
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgConfig::default())
    }
}

impl Surface for SvgSurface {
    fn begin_path(&mut self) {
        self.pending.clear();
    }

    fn move_to(&mut self, p: Point2<f32>) {
        let _ = write!(self.pending, "M{:.3} {:.3} ", p.x, p.y);
    }

    fn line_to(&mut self, p: Point2<f32>) {
        let _ = write!(self.pending, "L{:.3} {:.3} ", p.x, p.y);
    }

    fn stroke(&mut self) {
        let d = self.pending.trim_end();
        if !d.is_empty() {
            self.paths.push(d.to_owned());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
