//! Render configuration
//!
//! Every field has a default, so a TOML file only needs the values it
//! changes:
//!
//! ```toml
//! margin = 20
//! draw_floor_grid = true
//!
//! [diamond]
//! width = 32
//! height = 16
//! ```

use crate::canvas::Color;
use crate::constants;
use crate::error::{IsoError, IsoResult, PathContext};
use crate::projection::DiamondSize;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base face colors and the height gradient applied to them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub top: Color,
    pub right: Color,
    pub left: Color,
    /// Shade multiplier at z = 0
    pub shade_floor: f64,
    /// Added to `shade_floor` as z goes from 0 to Z_MAX
    pub shade_range: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            top: constants::palette::TOP.into(),
            right: constants::palette::RIGHT.into(),
            left: constants::palette::LEFT.into(),
            shade_floor: constants::palette::SHADE_FLOOR,
            shade_range: constants::palette::SHADE_RANGE,
        }
    }
}

/// Everything that controls how a grid is turned into pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub diamond: DiamondSize,
    /// Blank border around the model, in pixels
    pub margin: u32,
    pub line_width: f64,
    pub background: Color,
    pub palette: Palette,
    /// Outline a flat tile under every (x, y) column
    pub draw_floor_grid: bool,
    /// Wireframe of the grid's bounding box
    pub draw_world_box: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            diamond: DiamondSize {
                width: constants::projection::DIAMOND_WIDTH,
                height: constants::projection::DIAMOND_HEIGHT,
            },
            margin: constants::canvas::MARGIN,
            line_width: constants::canvas::LINE_WIDTH,
            background: Color::WHITE,
            palette: Palette::default(),
            draw_floor_grid: false,
            draw_world_box: false,
        }
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> IsoError {
    IsoError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_color(field: &str, color: Color) -> IsoResult<()> {
    let in_range = |c: f64| (0.0..=1.0).contains(&c);
    if in_range(color.r) && in_range(color.g) && in_range(color.b) {
        Ok(())
    } else {
        Err(invalid(field, format!("{color:?}"), "channels must be in [0, 1]"))
    }
}

impl RenderConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> IsoResult<()> {
        let DiamondSize { width, height } = self.diamond;
        if width == 0 || width % 2 != 0 {
            return Err(invalid("diamond.width", width, "must be a positive even number"));
        }
        if height == 0 || height % 2 != 0 {
            return Err(invalid(
                "diamond.height",
                height,
                "must be a positive even number",
            ));
        }

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(invalid("line_width", self.line_width, "must be positive"));
        }

        check_color("background", self.background)?;
        check_color("palette.top", self.palette.top)?;
        check_color("palette.right", self.palette.right)?;
        check_color("palette.left", self.palette.left)?;

        for (field, value) in [
            ("palette.shade_floor", self.palette.shade_floor),
            ("palette.shade_range", self.palette.shade_range),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, value, "must be a non-negative number"));
            }
        }

        log::debug!(
            "[RenderConfig::validate] diamond={}x{}, margin={}, line_width={}",
            width,
            height,
            self.margin,
            self.line_width
        );
        Ok(())
    }
}

/// Parse and validate a TOML configuration string
pub fn parse_config(source: &str) -> IsoResult<RenderConfig> {
    let config: RenderConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a TOML configuration file
pub fn load_config(path: &Path) -> IsoResult<RenderConfig> {
    let source = std::fs::read_to_string(path).path_context(path)?;
    let config = parse_config(&source).map_err(|e| match e {
        IsoError::ConfigParse { error, .. } => IsoError::ConfigParse {
            context: path.display().to_string(),
            error,
        },
        other => other,
    })?;
    log::info!("[load_config] loaded render config from {}", path.display());
    Ok(config)
}
