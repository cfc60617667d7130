//! Common types shared between the vitrine showcase core and the web front end

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display mode the showcase can present
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
    Web,
}

impl Platform {
    /// Every platform, in switcher order
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// Stable identifier used in markup and catalog keys
    pub fn id(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }

    /// Human-readable name shown on the switcher buttons
    pub fn label(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Web => "Web",
        }
    }

    /// Icon class for the switcher buttons
    pub fn icon_class(self) -> &'static str {
        match self {
            Platform::Ios => "fab fa-apple",
            Platform::Android => "fab fa-android",
            Platform::Web => "fas fa-globe",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

/// Outcome of a view transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// The view moved to a different platform
    Changed { from: Platform },
    /// The requested platform was already current
    Unchanged,
}

/// Currently selected platform view.
///
/// Owned by the page-level controller and handed to whatever collaborator
/// needs it; rendering and notifications react to changes, they are not
/// performed here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    current: Platform,
}

impl ViewState {
    /// Starts on the iOS view
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Platform {
        self.current
    }

    /// Total transition: any platform is reachable from any other in one step.
    /// Reports whether the view actually moved.
    pub fn switch_to(&mut self, platform: Platform) -> Switch {
        if self.current == platform {
            return Switch::Unchanged;
        }
        let from = self.current;
        self.current = platform;
        Switch::Changed { from }
    }

    /// String boundary for callers that deal in platform identifiers.
    /// Unknown names are rejected and leave the state untouched.
    pub fn switch_to_named(&mut self, name: &str) -> Result<Switch> {
        let platform = name.parse()?;
        Ok(self.switch_to(platform))
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
        }
    }
}

/// Transient notification popped by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }
}

/// Core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("catalog defines no screens for {0}")]
    MissingScreens(Platform),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_platform_is_ios() {
        let state = ViewState::new();
        assert_eq!(state.current(), Platform::Ios);
    }

    #[test]
    fn test_switch_is_total_over_the_enum() {
        for platform in Platform::ALL {
            let mut state = ViewState::new();
            state.switch_to(platform);
            assert_eq!(state.current(), platform);
        }
    }

    #[test]
    fn test_repeated_switch_reports_unchanged() {
        let mut state = ViewState::new();
        assert_eq!(
            state.switch_to(Platform::Android),
            Switch::Changed { from: Platform::Ios }
        );
        assert_eq!(state.switch_to(Platform::Android), Switch::Unchanged);
        assert_eq!(state.current(), Platform::Android);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let mut state = ViewState::new();
        state.switch_to(Platform::Web);

        let err = state.switch_to_named("desktop").unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(ref name) if name == "desktop"));
        assert_eq!(state.current(), Platform::Web);
    }

    #[test]
    fn test_sequential_walkthrough() {
        let mut state = ViewState::new();
        assert_eq!(state.current(), Platform::Ios);

        state.switch_to(Platform::Android);
        assert_eq!(state.current(), Platform::Android);

        state.switch_to(Platform::Web);
        assert_eq!(state.current(), Platform::Web);

        state.switch_to(Platform::Ios);
        assert_eq!(state.current(), Platform::Ios);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = ViewState::new();
        let b = ViewState::new();

        a.switch_to(Platform::Web);
        assert_eq!(a.current(), Platform::Web);
        assert_eq!(b.current(), Platform::Ios);
    }

    #[test]
    fn test_switch_to_named_accepts_every_identifier() {
        let mut state = ViewState::new();
        for platform in Platform::ALL {
            state.switch_to_named(platform.id()).unwrap();
            assert_eq!(state.current(), platform);
        }
    }

    #[test]
    fn test_platform_serialization_round_trip() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.id()));
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }

    #[test]
    fn test_platform_parse_matches_display() {
        for platform in Platform::ALL {
            let parsed: Platform = platform.to_string().parse().unwrap();
            assert_eq!(parsed, platform);
        }
        assert!("iOS".parse::<Platform>().is_err());
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_metadata_is_populated() {
        for platform in Platform::ALL {
            assert!(!platform.label().is_empty());
            assert!(!platform.icon_class().is_empty());
        }
    }

    #[test]
    fn test_toast_constructors() {
        assert_eq!(Toast::info("hi").level, ToastLevel::Info);
        assert_eq!(Toast::success("hi").level, ToastLevel::Success);
        assert_eq!(Toast::warning("hi").level, ToastLevel::Warning);
        assert_eq!(Toast::info("hi").message, "hi");
    }
}
