use crate::foundation::core::Rgba8;
use serde::{Deserialize, Serialize};

/// Named per-pixel compositing formula for overlay strokes.
///
/// The variants are the canonical CSS composite/blend operation names; the
/// per-pixel formulas live in the raster layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Plain Porter-Duff source-over.
    #[default]
    SourceOver,
    /// Additive (plus-lighter) composition.
    Lighter,
    /// Inverse multiply.
    Screen,
    /// Channel product.
    Multiply,
    /// Multiply or screen depending on the backdrop.
    Overlay,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// Brighten the backdrop toward the source.
    ColorDodge,
    /// Darken the backdrop toward the source.
    ColorBurn,
    /// Overlay with the roles swapped.
    HardLight,
    /// Soft variant of hard-light.
    SoftLight,
    /// Absolute channel difference.
    Difference,
    /// Lower-contrast difference.
    Exclusion,
    /// Source hue with backdrop saturation and luminosity.
    Hue,
    /// Source saturation with backdrop hue and luminosity.
    Saturation,
    /// Source hue and saturation with backdrop luminosity.
    Color,
    /// Source luminosity with backdrop hue and saturation.
    Luminosity,
}

impl BlendMode {
    /// Every mode in host-menu order.
    pub const ALL: [BlendMode; 17] = [
        BlendMode::SourceOver,
        BlendMode::Lighter,
        BlendMode::Screen,
        BlendMode::Multiply,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    /// Canonical CSS name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
            BlendMode::Screen => "screen",
            BlendMode::Multiply => "multiply",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }

    /// Look up a mode by its CSS name. Unknown names yield `None`; callers
    /// that must not fail fall back to [`BlendMode::SourceOver`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// Which pyramid triangle pairs to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PyramidMode {
    /// No pyramid guide.
    #[default]
    Off,
    /// Apexes at the top and bottom edge midpoints.
    #[serde(rename = "Up / Down")]
    UpDown,
    /// Apexes at the left and right edge midpoints.
    #[serde(rename = "Left / Right")]
    LeftRight,
    /// All four triangles.
    Both,
}

/// Which golden-triangle construction(s) to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoldenTriangleSet {
    /// No golden-triangle guide.
    #[default]
    Off,
    /// Both diagonal constructions.
    Both,
    /// Top-left to bottom-right diagonal.
    #[serde(rename = "Set 1 (TL-BR)")]
    Set1,
    /// Top-right to bottom-left diagonal.
    #[serde(rename = "Set 2 (TR-BL)")]
    Set2,
}

/// Flat host-facing parameter set, one field per node widget.
///
/// Field names and defaults match the host node declaration (see
/// [`crate::node::adapter::input_spec`]). This is the unvalidated boundary
/// type; build a [`GuideConfig`] from it before doing any work.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideParams {
    /// Maximum preview dimension in pixels.
    pub preview_resolution_limit: u32,
    /// Stroke color as a `"R,G,B,A"` byte string.
    pub grid_color_rgb: String,
    /// Stroke thickness in preview pixels.
    pub line_thickness: f64,
    /// Stroke compositing mode.
    pub blend_mode: BlendMode,
    /// Grid guide toggle.
    pub grid: bool,
    /// Grid cell count along x.
    pub grid_lines_x: u32,
    /// Grid cell count along y.
    pub grid_lines_y: u32,
    /// Diagonals guide toggle.
    pub diagonals: bool,
    /// Phi-grid guide toggle.
    pub phi_grid: bool,
    /// Pyramid guide mode.
    pub pyramid: PyramidMode,
    /// Golden-triangles guide mode.
    pub golden_triangles: GoldenTriangleSet,
    /// Perspective guide toggle.
    pub perspective: bool,
    /// Number of perspective fan lines.
    pub perspective_lines: u32,
    /// Vanishing point x as a fraction of the width.
    pub perspective_x: f64,
    /// Vanishing point y as a fraction of the height.
    pub perspective_y: f64,
}

impl Default for GuideParams {
    fn default() -> Self {
        Self {
            preview_resolution_limit: 1024,
            grid_color_rgb: "255,255,255,255".to_string(),
            line_thickness: 1.0,
            blend_mode: BlendMode::SourceOver,
            grid: true,
            grid_lines_x: 3,
            grid_lines_y: 3,
            diagonals: false,
            phi_grid: false,
            pyramid: PyramidMode::Off,
            golden_triangles: GoldenTriangleSet::Off,
            perspective: false,
            perspective_lines: 8,
            perspective_x: 0.5,
            perspective_y: 0.5,
        }
    }
}

/// Grid guide configuration (cell counts along each axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Cells along x; `lines_x - 1` vertical lines are drawn.
    pub lines_x: u32,
    /// Cells along y.
    pub lines_y: u32,
}

/// Perspective guide configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveConfig {
    /// Number of fan lines.
    pub lines: u32,
    /// Vanishing point x in `[0, 1]`.
    pub vanish_x: f64,
    /// Vanishing point y in `[0, 1]`.
    pub vanish_y: f64,
}

/// Validated, immutable per-invocation configuration.
///
/// Constructed once from [`GuideParams`] with every count clamped into its
/// declared range, then treated as read-only for the rest of the pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideConfig {
    /// Maximum preview dimension, clamped to `[256, 8192]`.
    pub resolution_limit: u32,
    /// Stroke color; malformed strings fall back to opaque white.
    pub color: Rgba8,
    /// Stroke thickness, clamped to `[0.1, 32.0]`.
    pub thickness: f64,
    /// Stroke compositing mode.
    pub blend_mode: BlendMode,
    /// Grid guide, `None` when toggled off.
    pub grid: Option<GridConfig>,
    /// Diagonals guide toggle.
    pub diagonals: bool,
    /// Phi-grid guide toggle.
    pub phi_grid: bool,
    /// Pyramid guide mode.
    pub pyramid: PyramidMode,
    /// Golden-triangles guide mode.
    pub golden_triangles: GoldenTriangleSet,
    /// Perspective guide, `None` when toggled off.
    pub perspective: Option<PerspectiveConfig>,
}

impl GuideConfig {
    /// Validate and clamp a flat parameter set.
    ///
    /// Never fails: out-of-range values clamp and a malformed color string
    /// falls back to opaque white, matching the host's recovery contract.
    pub fn from_params(params: &GuideParams) -> Self {
        Self {
            resolution_limit: params.preview_resolution_limit.clamp(256, 8192),
            color: parse_color_string(&params.grid_color_rgb).unwrap_or(Rgba8::WHITE),
            thickness: params.line_thickness.clamp(0.1, 32.0),
            blend_mode: params.blend_mode,
            grid: params.grid.then(|| GridConfig {
                lines_x: params.grid_lines_x.clamp(2, 64),
                lines_y: params.grid_lines_y.clamp(2, 64),
            }),
            diagonals: params.diagonals,
            phi_grid: params.phi_grid,
            pyramid: params.pyramid,
            golden_triangles: params.golden_triangles,
            perspective: params.perspective.then(|| PerspectiveConfig {
                lines: params.perspective_lines.clamp(2, 32),
                vanish_x: params.perspective_x.clamp(0.0, 1.0),
                vanish_y: params.perspective_y.clamp(0.0, 1.0),
            }),
        }
    }
}

/// Parse a `"R,G,B"` or `"R,G,B,A"` byte string into a color.
///
/// A missing or unparsable alpha component defaults to 255; anything wrong
/// with the r/g/b components rejects the whole string.
pub fn parse_color_string(s: &str) -> Option<Rgba8> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<i64>().ok());

    let mut channel = || -> Option<u8> {
        let v = parts.next()??;
        Some(v.clamp(0, 255) as u8)
    };

    let r = channel()?;
    let g = channel()?;
    let b = channel()?;
    let a = channel().unwrap_or(255);
    Some(Rgba8::new(r, g, b, a))
}
