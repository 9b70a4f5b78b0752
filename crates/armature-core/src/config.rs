use std::f32::consts::TAU;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_rotation_range() -> f32 {
    TAU
}
const fn default_rotation_speed() -> f32 {
    0.05
}
const fn default_frames() -> u32 {
    60
}
const fn default_svg_size() -> [u32; 2] {
    [800, 600]
}
const fn default_stroke_width() -> f32 {
    2.0
}
fn default_stroke() -> String {
    "#333333".into()
}

fn validate_length(index: usize, length: f32) -> Result<(), ConfigError> {
    if length.is_finite() && length >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength { index, length })
    }
}

fn validate_base(field: &str, base: [f32; 2]) -> Result<(), ConfigError> {
    if base.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("{base:?} is not finite"),
        })
    }
}

// ---------------------------------------------------------------------------
// FkChainConfig
// ---------------------------------------------------------------------------

/// One forward-kinematics segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FkSegmentConfig {
    /// Segment length.
    pub length: f32,

    /// Baseline angle the segment oscillates around (default: 0).
    #[serde(default)]
    pub center_angle: f32,

    /// Oscillation amplitude (default: 2π).
    #[serde(default = "default_rotation_range")]
    pub rotation_range: f32,

    /// Phase offset fed into the oscillation (default: 0).
    #[serde(default)]
    pub angle_offset: f32,
}

impl FkSegmentConfig {
    /// Segment of `length` with the default oscillation (center 0, range 2π, offset 0).
    pub const fn new(length: f32) -> Self {
        Self {
            length,
            center_angle: 0.0,
            rotation_range: TAU,
            angle_offset: 0.0,
        }
    }

    /// Set the baseline angle.
    #[must_use]
    pub const fn with_center_angle(mut self, center_angle: f32) -> Self {
        self.center_angle = center_angle;
        self
    }

    /// Set the oscillation amplitude.
    #[must_use]
    pub const fn with_rotation_range(mut self, rotation_range: f32) -> Self {
        self.rotation_range = rotation_range;
        self
    }

    /// Set the phase offset.
    #[must_use]
    pub const fn with_angle_offset(mut self, angle_offset: f32) -> Self {
        self.angle_offset = angle_offset;
        self
    }
}

/// Forward-kinematics chain description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FkChainConfig {
    /// Anchor of the root segment.
    #[serde(default)]
    pub base: [f32; 2],

    /// Driving-angle increment applied on every step (default: 0.05 rad).
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,

    /// Segments from root to tip.
    #[serde(default)]
    pub segments: Vec<FkSegmentConfig>,
}

impl Default for FkChainConfig {
    fn default() -> Self {
        Self {
            base: [0.0, 0.0],
            rotation_speed: default_rotation_speed(),
            segments: Vec::new(),
        }
    }
}

impl FkChainConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base("fk.base", self.base)?;
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "fk.rotation_speed".into(),
                message: "must be finite".into(),
            });
        }
        for (i, seg) in self.segments.iter().enumerate() {
            validate_length(i, seg.length)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// IkChainConfig
// ---------------------------------------------------------------------------

/// One inverse-kinematics segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IkSegmentConfig {
    /// Segment length.
    pub length: f32,

    /// Initial absolute angle (default: 0).
    #[serde(default)]
    pub angle: f32,
}

impl IkSegmentConfig {
    pub const fn new(length: f32) -> Self {
        Self { length, angle: 0.0 }
    }

    /// Set the initial angle.
    #[must_use]
    pub const fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

/// Inverse-kinematics chain description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IkChainConfig {
    /// Anchor of the root segment.
    #[serde(default)]
    pub base: [f32; 2],

    /// Start with the root pinned to `base` (default: false).
    #[serde(default)]
    pub fixed_base: bool,

    /// Segments from root to tip.
    #[serde(default)]
    pub segments: Vec<IkSegmentConfig>,
}

impl IkChainConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base("ik.base", self.base)?;
        for (i, seg) in self.segments.iter().enumerate() {
            validate_length(i, seg.length)?;
        }
        Ok(())
    }

    /// Sum of all segment lengths, i.e. the farthest the tip can reach from the root.
    pub fn reach(&self) -> f32 {
        self.segments.iter().map(|s| s.length).sum()
    }
}

// ---------------------------------------------------------------------------
// SvgConfig
// ---------------------------------------------------------------------------

/// SVG export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgConfig {
    /// Document size [width, height] (default: [800, 600]).
    #[serde(default = "default_svg_size")]
    pub size: [u32; 2],

    /// Stroke colour (default: "#333333").
    #[serde(default = "default_stroke")]
    pub stroke: String,

    /// Stroke width (default: 2).
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    /// Optional background fill.
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            size: default_svg_size(),
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            background: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SceneConfig
// ---------------------------------------------------------------------------

/// A headless scene: optional FK and IK chains run for a number of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Number of frames to run (default: 60).
    #[serde(default = "default_frames")]
    pub frames: u32,

    #[serde(default)]
    pub fk: Option<FkChainConfig>,

    #[serde(default)]
    pub ik: Option<IkChainConfig>,

    /// Point the IK tip is dragged toward every frame.
    #[serde(default)]
    pub ik_target: Option<[f32; 2]>,

    #[serde(default)]
    pub svg: SvgConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            fk: None,
            ik: None,
            ik_target: None,
            svg: SvgConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::InvalidFrames(self.frames));
        }
        if let Some(fk) = &self.fk {
            fk.validate()?;
        }
        if let Some(ik) = &self.ik {
            ik.validate()?;
        }
        if let Some(target) = self.ik_target {
            validate_base("ik_target", target)?;
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
