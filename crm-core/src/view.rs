use crate::error::UnknownView;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Every screen the shell can render. The kebab-case name is the external
/// representation used by stored preferences and raw navigation requests.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Tasks,
    Deals,
    SalesLifecycle,
    Contacts,
    Documents,
    Bills,
    CompanyAdmin,
    Companies,
    CompanyDetails,
    Reports,
    Notifications,
    AiInsights,
    Interactions,
    AddEmployee,
    EditEmployee,
}

impl ViewId {
    pub const DEFAULT: ViewId = ViewId::Dashboard;

    pub fn all() -> impl Iterator<Item = ViewId> {
        ViewId::iter()
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Strict parse. Surrounding whitespace and ASCII case are ignored.
    pub fn parse(name: &str) -> Result<Self, UnknownView> {
        let normalized = name.trim().to_ascii_lowercase();
        ViewId::from_str(&normalized).map_err(|_| UnknownView(name.to_string()))
    }

    /// Total parse: anything outside the closed set becomes [`ViewId::DEFAULT`].
    pub fn parse_or_default(name: &str) -> Self {
        match Self::parse(name) {
            Ok(view) => view,
            Err(err) => {
                tracing::debug!(%err, fallback = %ViewId::DEFAULT, "clamping unknown view");
                ViewId::DEFAULT
            }
        }
    }

    /// Restores a stored last-view preference. Missing or stale values fall
    /// back to the default view.
    pub fn from_preference(stored: Option<&str>) -> Self {
        stored.map(Self::parse_or_default).unwrap_or_default()
    }
}

/// A navigation request as child views make it: either an already-typed view
/// or a raw name that still has to pass through validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewTarget {
    Known(ViewId),
    Named(String),
}

impl ViewTarget {
    pub fn resolve(&self) -> ViewId {
        match self {
            ViewTarget::Known(view) => *view,
            ViewTarget::Named(name) => ViewId::parse_or_default(name),
        }
    }
}

impl From<ViewId> for ViewTarget {
    fn from(view: ViewId) -> Self {
        ViewTarget::Known(view)
    }
}

impl From<&str> for ViewTarget {
    fn from(name: &str) -> Self {
        ViewTarget::Named(name.to_string())
    }
}

impl From<String> for ViewTarget {
    fn from(name: String) -> Self {
        ViewTarget::Named(name)
    }
}
