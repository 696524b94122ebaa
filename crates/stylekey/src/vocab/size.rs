//! Size tokens: responsive component-size variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A component-size variant.
///
/// Independent of viewport breakpoints: a `s:sm:1` button stays small on
/// every screen. [`SizeToken::All`] is the default size and never appears in
/// canonical keys unless a non-default breakpoint is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeToken {
    #[serde(rename = "s:all")]
    All,
    #[serde(rename = "s:xs:1")]
    Xs,
    #[serde(rename = "s:sm:1")]
    Sm,
    #[serde(rename = "s:md:1")]
    Md,
    #[serde(rename = "s:lg:1")]
    Lg,
    #[serde(rename = "s:xl:1")]
    Xl,
}

impl SizeToken {
    /// Every size token, in vocabulary order.
    pub const ALL: [SizeToken; 6] = [
        SizeToken::All,
        SizeToken::Xs,
        SizeToken::Sm,
        SizeToken::Md,
        SizeToken::Lg,
        SizeToken::Xl,
    ];

    /// Token text as it appears in keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeToken::All => "s:all",
            SizeToken::Xs => "s:xs:1",
            SizeToken::Sm => "s:sm:1",
            SizeToken::Md => "s:md:1",
            SizeToken::Lg => "s:lg:1",
            SizeToken::Xl => "s:xl:1",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SizeToken::All)
    }

    /// Exact vocabulary lookup.
    pub fn lookup(text: &str) -> Option<SizeToken> {
        Self::ALL.into_iter().find(|t| t.as_str() == text)
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown size token: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(SizeToken::lookup("s:sm:1"), Some(SizeToken::Sm));
        assert_eq!(SizeToken::lookup("s:sm"), None);
        assert_eq!(SizeToken::lookup(""), None);
    }

    #[test]
    fn test_serde_uses_key_text() {
        for token in SizeToken::ALL {
            let yaml = serde_yaml::to_string(&token).unwrap();
            assert_eq!(yaml.trim(), token.as_str());
        }
    }
}
