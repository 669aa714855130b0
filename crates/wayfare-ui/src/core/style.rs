//! DaisyUI styling tokens for links.

/// Shared DaisyUI color tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyColor {
    /// `primary` tone.
    Primary,
    /// `secondary` tone.
    Secondary,
    /// `accent` tone, used by natural links.
    #[default]
    Accent,
    /// `neutral` tone.
    Neutral,
    /// `info` tone.
    Info,
    /// `success` tone.
    Success,
    /// `warning` tone.
    Warning,
    /// `error` tone.
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"accent"`) for the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Base class every DaisyUI link carries (underline included).
pub const LINK_CLASS: &str = "link";
/// Fades the link slightly on hover.
pub const HOVER_FADE_CLASS: &str = "hover:opacity-90";

/// Builds the `link-{tone}` class.
#[must_use]
pub fn tone_class(tone: DaisyColor) -> String {
    format!("{LINK_CLASS}-{}", tone.as_str())
}

/// Classes for a natural link: accent color, underline, hover fade.
#[must_use]
pub fn natural_link_classes() -> Vec<String> {
    vec![
        LINK_CLASS.to_string(),
        tone_class(DaisyColor::Accent),
        HOVER_FADE_CLASS.to_string(),
    ]
}
