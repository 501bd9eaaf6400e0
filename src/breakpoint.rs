use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::TwclsxError;

/// Default keys for the responsive object.
///
/// Any `AsRef<str>` type can stand in for custom screens, see
/// [`configure`](crate::configure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakPoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl BreakPoint {
    /// All default breakpoints, smallest first
    pub const ALL: [BreakPoint; 5] = [
        BreakPoint::Sm,
        BreakPoint::Md,
        BreakPoint::Lg,
        BreakPoint::Xl,
        BreakPoint::Xxl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            BreakPoint::Sm => "sm",
            BreakPoint::Md => "md",
            BreakPoint::Lg => "lg",
            BreakPoint::Xl => "xl",
            BreakPoint::Xxl => "xxl",
        }
    }
}

impl AsRef<str> for BreakPoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BreakPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakPoint {
    type Err = TwclsxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreakPoint::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| TwclsxError::UnknownBreakPoint(s.to_string()))
    }
}
