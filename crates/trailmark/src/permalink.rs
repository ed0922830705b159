use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use url::Url;

/// An absolute URL pointing at a piece of site content.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Permalink(Url);

impl Permalink {
    /// Returns the [`Permalink`] for `path` beneath `base_url`.
    ///
    /// Permalinks always end with a trailing slash.
    pub fn from_path(base_url: &str, path: &str) -> Result<Self, url::ParseError> {
        let suffix = if path.ends_with('/') || path.is_empty() {
            ""
        } else {
            "/"
        };
        let base_url = base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        Ok(Self(Url::from_str(&format!("{base_url}/{path}{suffix}"))?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl FromStr for Permalink {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Url::parse(s)?))
    }
}

impl From<Url> for Permalink {
    fn from(value: Url) -> Self {
        Self(value)
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Permalink {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
