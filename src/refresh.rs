//! Hard-reload detection.
//!
//! The sidebar auto-expands the submenu holding the current page only when
//! the page was loaded from scratch, not after an in-app link click. Two
//! inputs feed that decision:
//!
//! - the navigation-timing entry type reported by the host (`"reload"`,
//!   `"navigate"`, ...), which may be unavailable
//! - whether the router carried location state into this page; links
//!   inside the app always attach some, a fresh load never does
//!
//! # Examples
//!
//! ```
//! use gpui_menu_navigator::{NavigationType, RefreshSignal};
//!
//! let signal = RefreshSignal::from_timing_entry(Some("reload"), true);
//! assert_eq!(signal.timing(), Some(NavigationType::Reload));
//! assert!(signal.is_refresh());
//!
//! // No timing API: only the location state decides.
//! assert!(!RefreshSignal::new(None, true).is_refresh());
//! assert!(RefreshSignal::new(None, false).is_refresh());
//! ```

use std::fmt;
use std::str::FromStr;

/// Kind of page load, as reported by a navigation-timing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationType {
    /// Link, typed URL, or script navigation
    Navigate,
    /// Hard reload
    Reload,
    /// History traversal
    BackForward,
    /// Prerendered load
    Prerender,
}

impl NavigationType {
    /// Map the legacy numeric navigation code (0 navigate, 1 reload,
    /// 2 back/forward). Unknown codes yield `None`.
    pub fn from_legacy_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Navigate),
            1 => Some(Self::Reload),
            2 => Some(Self::BackForward),
            _ => None,
        }
    }

    /// The timing entry string for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Reload => "reload",
            Self::BackForward => "back_forward",
            Self::Prerender => "prerender",
        }
    }
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a timing entry type is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNavigationType(pub String);

impl fmt::Display for UnknownNavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown navigation type: {}", self.0)
    }
}

impl std::error::Error for UnknownNavigationType {}

impl FromStr for NavigationType {
    type Err = UnknownNavigationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "navigate" => Ok(Self::Navigate),
            "reload" => Ok(Self::Reload),
            "back_forward" | "back-forward" => Ok(Self::BackForward),
            "prerender" => Ok(Self::Prerender),
            _ => Err(UnknownNavigationType(s.to_string())),
        }
    }
}

/// Inputs deciding whether the current load counts as a hard refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSignal {
    timing: Option<NavigationType>,
    has_location_state: bool,
}

impl RefreshSignal {
    /// Build a signal from an optional timing type and location-state presence.
    pub const fn new(timing: Option<NavigationType>, has_location_state: bool) -> Self {
        Self {
            timing,
            has_location_state,
        }
    }

    /// Build a signal from a raw timing entry type string.
    ///
    /// Unrecognised strings are treated like a missing timing API.
    pub fn from_timing_entry(entry_type: Option<&str>, has_location_state: bool) -> Self {
        let timing = entry_type.and_then(|entry| match entry.parse::<NavigationType>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                crate::trace_log!("{}; falling back to location state", err);
                None
            }
        });
        Self::new(timing, has_location_state)
    }

    /// A hard reload.
    pub const fn reload() -> Self {
        Self::new(Some(NavigationType::Reload), false)
    }

    /// An in-app navigation carrying router state.
    pub const fn in_app() -> Self {
        Self::new(Some(NavigationType::Navigate), true)
    }

    /// The timing type, if the host reported one.
    pub const fn timing(&self) -> Option<NavigationType> {
        self.timing
    }

    /// Whether the router carried location state into this page.
    pub const fn has_location_state(&self) -> bool {
        self.has_location_state
    }

    /// `true` for a reload, or whenever location state is absent.
    pub fn is_refresh(&self) -> bool {
        matches!(self.timing, Some(NavigationType::Reload)) || !self.has_location_state
    }
}

impl Default for RefreshSignal {
    /// No timing information and no location state: a fresh load.
    fn default() -> Self {
        Self::new(None, false)
    }
}
