use std::fmt;

use serde::{Deserialize, Serialize};

/// A resource locator as supplied by the caller.
///
/// No parsing happens here. [`Url::is_valid`] only checks the literal scheme
/// prefix, so a value round-trips into the rendered tag exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Url(String);

impl Url {
    pub fn new(value: impl Into<String>) -> Self {
        Url(value.into())
    }

    /// Returns `true` if the value starts with `http://` or `https://`.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A locator that must use `https://`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureUrl(String);

impl SecureUrl {
    pub fn new(value: impl Into<String>) -> Self {
        SecureUrl(value.into())
    }

    /// Returns `true` if the value starts with `https://`.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with("https://")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! text_conversions {
    ($($ty:ident),*) => {$(
        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                $ty(value.to_owned())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                $ty(value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

text_conversions!(Url, SecureUrl);
