use serde::{Deserialize, Deserializer, Serialize};

/// Message shown next to a spinner when the caller supplies none.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Number of skeleton bars rendered when the caller supplies no count.
pub const DEFAULT_LINE_COUNT: usize = 3;

/// Spinner dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

/// All spinner sizes, smallest first.
pub const ALL_SIZES: &[SpinnerSize] = &[
    SpinnerSize::Small,
    SpinnerSize::Medium,
    SpinnerSize::Large,
    SpinnerSize::XLarge,
];

impl SpinnerSize {
    /// Key used in config files and CSS modifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "small",
            SpinnerSize::Medium => "medium",
            SpinnerSize::Large => "large",
            SpinnerSize::XLarge => "xlarge",
        }
    }

    /// Parse a size key. Unlisted keys return `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "small" => Some(SpinnerSize::Small),
            "medium" => Some(SpinnerSize::Medium),
            "large" => Some(SpinnerSize::Large),
            "xlarge" => Some(SpinnerSize::XLarge),
            _ => None,
        }
    }
}

/// Color scheme applied to a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    /// For spinners drawn on dark or colored backgrounds.
    White,
}

/// All color variants in display order.
pub const ALL_COLORS: &[ColorVariant] = &[
    ColorVariant::Primary,
    ColorVariant::Secondary,
    ColorVariant::Success,
    ColorVariant::Warning,
    ColorVariant::Danger,
    ColorVariant::White,
];

impl ColorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorVariant::Primary => "primary",
            ColorVariant::Secondary => "secondary",
            ColorVariant::Success => "success",
            ColorVariant::Warning => "warning",
            ColorVariant::Danger => "danger",
            ColorVariant::White => "white",
        }
    }

    /// Parse a color key. Unlisted keys return `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(ColorVariant::Primary),
            "secondary" => Some(ColorVariant::Secondary),
            "success" => Some(ColorVariant::Success),
            "warning" => Some(ColorVariant::Warning),
            "danger" => Some(ColorVariant::Danger),
            "white" => Some(ColorVariant::White),
            _ => None,
        }
    }
}

// Unknown keys in config files fall back to the default variant instead of
// failing the whole file.
fn deserialize_key<'de, D, T>(
    deserializer: D,
    kind: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + std::fmt::Debug,
{
    let key = String::deserialize(deserializer)?;
    Ok(parse(&key).unwrap_or_else(|| {
        let fallback = T::default();
        tracing::warn!(%key, ?fallback, "unknown {kind}, using default");
        fallback
    }))
}

impl<'de> Deserialize<'de> for SpinnerSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_key(deserializer, "spinner size", SpinnerSize::from_key)
    }
}

impl<'de> Deserialize<'de> for ColorVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_key(deserializer, "color variant", ColorVariant::from_key)
    }
}

/// Display options for a loading indicator.
///
/// Each call site builds its own value; missing fields take the defaults
/// below, so an empty `[loading]` table is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub size: SpinnerSize,
    pub color: ColorVariant,
    pub message: String,
    pub show_message: bool,
    pub visible: bool,
    pub line_count: usize,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            size: SpinnerSize::default(),
            color: ColorVariant::default(),
            message: DEFAULT_LOADING_MESSAGE.to_string(),
            show_message: true,
            visible: true,
            line_count: DEFAULT_LINE_COUNT,
        }
    }
}

/// The caption a loading indicator should render, if any.
///
/// `show_message = false` always hides it; an empty message is never shown.
pub fn visible_message(show_message: bool, message: &str) -> Option<&str> {
    (show_message && !message.is_empty()).then_some(message)
}
