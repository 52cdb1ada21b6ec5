use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The word that appears before the object's title in a sentence
/// (`og:determiner`).
///
/// Any text is accepted. The associated constants cover the values the
/// protocol names; anything else is rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Determiner(Cow<'static, str>);

impl Determiner {
    pub const BLANK: Determiner = Determiner(Cow::Borrowed(""));
    pub const AUTO: Determiner = Determiner(Cow::Borrowed("auto"));
    pub const A: Determiner = Determiner(Cow::Borrowed("a"));
    pub const AN: Determiner = Determiner(Cow::Borrowed("an"));
    pub const THE: Determiner = Determiner(Cow::Borrowed("the"));

    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Determiner(value.into())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The well-known value this determiner spells, if any.
    pub fn known(&self) -> Option<KnownDeterminer> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Determiner values defined by the Open Graph protocol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum KnownDeterminer {
    Auto,
    A,
    An,
    The,
}

impl From<KnownDeterminer> for Determiner {
    fn from(known: KnownDeterminer) -> Self {
        let value: &'static str = known.into();
        Determiner(Cow::Borrowed(value))
    }
}

/// A locale tag in `language_TERRITORY` form, e.g. `en_US`.
///
/// Not validated; the constant is a convenience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    pub const EN_US: Locale = Locale(Cow::Borrowed("en_US"));

    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Locale(value.into())
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
        impl From<&'static str> for $ty {
            fn from(value: &'static str) -> Self {
                $ty(Cow::Borrowed(value))
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                $ty(Cow::Owned(value))
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

text_conversions!(Determiner, Locale);
