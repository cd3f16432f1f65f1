//! Preview parameters shared between the share codec, the catalog defaults and CSS output.
//!
//! Every enumerated value has a canonical CSS token (`as_str`) which is what serde, `Display`
//! and the query-string codec emit.

use std::{fmt, str::FromStr};

use crate::foundation::error::{AnimlibError, AnimlibResult};

/// Timing function of a preview.
///
/// The five CSS keywords get their own variants; anything else (`cubic-bezier(..)`,
/// `steps(..)`, ...) is carried verbatim in [`Easing::Custom`]. Equality is by CSS token, so
/// `Custom("linear")` equals `Linear`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
    Custom(String),
}

impl Easing {
    pub const KEYWORDS: [Easing; 5] = [
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Linear,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Linear => "linear",
            Self::Custom(s) => s.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Easing {}

impl std::hash::Hash for Easing {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// Exact token match; surrounding whitespace makes a custom value.
impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        match s {
            "ease" => Self::Ease,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            "linear" => Self::Linear,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        match e {
            Easing::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `animation-iteration-count`: a positive whole number or `infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IterationCount {
    Count(u32),
    Infinite,
}

impl IterationCount {
    pub const INFINITE_TOKEN: &'static str = "infinite";

    /// Accepts finite, positive, whole numbers only.
    pub fn from_number(n: f64) -> Option<Self> {
        if !n.is_finite() || n < 1.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return None;
        }
        Some(Self::Count(n as u32))
    }
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl FromStr for IterationCount {
    type Err = AnimlibError;

    fn from_str(s: &str) -> AnimlibResult<Self> {
        let s = s.trim();
        if s == Self::INFINITE_TOKEN {
            return Ok(Self::Infinite);
        }
        s.parse::<f64>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| {
                AnimlibError::validation(format!(
                    "iteration count '{s}' must be a positive whole number or 'infinite'"
                ))
            })
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinite => f.write_str(Self::INFINITE_TOKEN),
        }
    }
}

impl serde::Serialize for IterationCount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Infinite => serializer.serialize_str(Self::INFINITE_TOKEN),
        }
    }
}

impl<'de> serde::Deserialize<'de> for IterationCount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from_number(n).ok_or_else(|| {
                serde::de::Error::custom(format!("iteration count {n} must be a positive integer"))
            }),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        }
    }
}

impl FromStr for Direction {
    type Err = AnimlibError;

    fn from_str(s: &str) -> AnimlibResult<Self> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "reverse" => Ok(Self::Reverse),
            "alternate" => Ok(Self::Alternate),
            "alternate-reverse" => Ok(Self::AlternateReverse),
            other => Err(AnimlibError::validation(format!(
                "unknown animation direction '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `animation-fill-mode`. Emits the CSS keywords; `forward`/`backward` are read as aliases.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    None,
    #[serde(alias = "forward")]
    Forwards,
    #[serde(alias = "backward")]
    Backwards,
    #[default]
    Both,
}

impl FillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

impl FromStr for FillMode {
    type Err = AnimlibError;

    fn from_str(s: &str) -> AnimlibResult<Self> {
        match s.trim() {
            "none" => Ok(Self::None),
            "forwards" | "forward" => Ok(Self::Forwards),
            "backwards" | "backward" => Ok(Self::Backwards),
            "both" => Ok(Self::Both),
            other => Err(AnimlibError::validation(format!(
                "unknown fill mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which demo element the preview is rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    Text,
    Button,
    Card,
}

impl DemoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Button => "button",
            Self::Card => "card",
        }
    }
}

impl FromStr for DemoKind {
    type Err = AnimlibError;

    fn from_str(s: &str) -> AnimlibResult<Self> {
        match s.trim() {
            "text" => Ok(Self::Text),
            "button" => Ok(Self::Button),
            "card" => Ok(Self::Card),
            other => Err(AnimlibError::validation(format!(
                "unknown demo kind '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters needed to reproduce a preview. Every field is optional; absent fields are
/// filled from the catalog entry's defaults by [`crate::preview::ResolvedPreview`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPreviewState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<IterationCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<FillMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_kind: Option<DemoKind>,
}

impl AnimationPreviewState {
    pub fn for_animation(id: impl Into<String>) -> Self {
        Self {
            animation_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Plain decimal rendering used for both query values and CSS times (`300`, `0.5`).
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    v.to_string()
}
