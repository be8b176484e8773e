use hex_color::HexColor;
use serde::Deserialize;
use thiserror::Error;

/// RGBA color with components in `[0, 1]`.
///
/// Deserializes from `#RRGGBB` / `#RRGGBBAA` strings so palettes can be
/// overridden from a TOML file.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(from = "HexColor")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Self {
            r: color.r as f32 / 255.0,
            g: color.g as f32 / 255.0,
            b: color.b as f32 / 255.0,
            a: color.a as f32 / 255.0,
        }
    }
}

/// Fill and border colors of the battery icon.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Fill color above the gradient threshold.
    #[serde(default = "default_high_level_color")]
    pub high_level: Color,
    /// Fill color at or below the low threshold.
    #[serde(default = "default_low_level_color")]
    pub low_level: Color,
    /// Fill color in the gap between the two thresholds.
    #[serde(default = "default_no_level_color")]
    pub no_level: Color,
    /// Body outline and charging bolt color.
    #[serde(default = "default_border_color")]
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            high_level: default_high_level_color(),
            low_level: default_low_level_color(),
            no_level: default_no_level_color(),
            border: default_border_color(),
        }
    }
}

fn default_high_level_color() -> Color {
    Color::rgb(0.0, 0.9, 0.0)
}

fn default_low_level_color() -> Color {
    Color::rgb(0.9, 0.0, 0.0)
}

fn default_no_level_color() -> Color {
    Color::rgb(0.8, 0.8, 0.8)
}

fn default_border_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

/// Geometry and color configuration of the battery icon.
///
/// All fields have serde defaults, so hosts can override any subset from a
/// TOML file. `border_width` and `corner_radius` of `0` mean "derive from the
/// rendered size" (`height / 20` and `height / 10` respectively); the derived
/// values are computed at compose time and never written back here.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BatteryIconConfig {
    /// Fraction of the icon height reserved for the terminal cap.
    #[serde(
        deserialize_with = "ratio_deserializer",
        default = "default_terminal_length_ratio"
    )]
    pub terminal_length_ratio: f32,
    /// Fraction of the icon width occupied by the terminal cap.
    #[serde(
        deserialize_with = "ratio_deserializer",
        default = "default_terminal_width_ratio"
    )]
    pub terminal_width_ratio: f32,
    /// Outline stroke width; `0` derives `height / 20`.
    #[serde(default)]
    pub border_width: f32,
    /// Body corner radius; `0` derives `height / 10`.
    #[serde(default)]
    pub corner_radius: f32,
    /// Charge percentage at or below which the low color is used.
    #[serde(default = "default_low_threshold")]
    pub low_threshold: u8,
    /// Charge percentage at or above which the high color is used.
    ///
    /// With the default of `0` every percentage above `low_threshold` maps to
    /// the high color; raising it above `low_threshold + 1` opens a gap that
    /// maps to the no-level color.
    #[serde(default)]
    pub gradient_threshold: u8,
    #[serde(default)]
    pub palette: Palette,
}

impl Default for BatteryIconConfig {
    fn default() -> Self {
        Self {
            terminal_length_ratio: default_terminal_length_ratio(),
            terminal_width_ratio: default_terminal_width_ratio(),
            border_width: f32::default(),
            corner_radius: f32::default(),
            low_threshold: default_low_threshold(),
            gradient_threshold: u8::default(),
            palette: Palette::default(),
        }
    }
}

fn ratio_deserializer<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = f32::deserialize(deserializer)?;

    if !(0.0..=1.0).contains(&v) {
        return Err(serde::de::Error::custom(
            "Ratios must be within the range [0.0, 1.0]",
        ));
    }

    Ok(v)
}

fn default_terminal_length_ratio() -> f32 {
    0.1
}

fn default_terminal_width_ratio() -> f32 {
    0.4
}

fn default_low_threshold() -> u8 {
    17
}

/// Logical inconsistency in a programmatically built [`BatteryIconConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f32 },
    #[error("{field} cannot be negative, got {value}")]
    NegativeDimension { field: &'static str, value: f32 },
    #[error("{field} must be within [0, 100], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: u8 },
}

impl BatteryIconConfig {
    /// Checks ranges that serde already enforces for file-based configs.
    ///
    /// The renderer itself never fails on out-of-range values (it clamps at
    /// the point of use); this is for hosts that build configs in code and
    /// want early feedback.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let ratios = [
            ("terminal_length_ratio", self.terminal_length_ratio),
            ("terminal_width_ratio", self.terminal_width_ratio),
        ];

        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::RatioOutOfRange { field, value });
            }
        }

        let dimensions = [
            ("border_width", self.border_width),
            ("corner_radius", self.corner_radius),
        ];

        for (field, value) in dimensions {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigValidationError::NegativeDimension { field, value });
            }
        }

        let thresholds = [
            ("low_threshold", self.low_threshold),
            ("gradient_threshold", self.gradient_threshold),
        ];

        for (field, value) in thresholds {
            if value > 100 {
                return Err(ConfigValidationError::ThresholdOutOfRange { field, value });
            }
        }

        Ok(())
    }
}
