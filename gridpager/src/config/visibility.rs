use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de::{self, Visitor},
};

const AUTO: &str = "auto";

/// Whether the pager is shown. Written as a boolean or `"auto"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Explicit(bool),
    /// Shown only when there is more than one page
    #[default]
    Auto,
}

impl Visibility {
    pub fn resolve(self, page_count: usize) -> bool {
        match self {
            Self::Explicit(visible) => visible,
            Self::Auto => page_count > 1,
        }
    }
}

impl From<bool> for Visibility {
    fn from(value: bool) -> Self {
        Self::Explicit(value)
    }
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Explicit(visible) => serializer.serialize_bool(*visible),
            Self::Auto => serializer.serialize_str(AUTO),
        }
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VisibilityVisitor;

        impl Visitor<'_> for VisibilityVisitor {
            type Value = Visibility;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a boolean or \"{AUTO}\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Visibility::Explicit(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == AUTO {
                    Ok(Visibility::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(VisibilityVisitor)
    }
}
