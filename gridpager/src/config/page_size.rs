use std::{fmt, str::FromStr};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de::{self, SeqAccess, Visitor},
};
use thiserror::Error;

const ALL: &str = "all";
const AUTO: &str = "auto";
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of rows shown on a single page. `All` disables pagination.
///
/// Written as a plain integer or the string `"all"` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PageSize {
    #[display("{_0}")]
    Fixed(u32),
    #[display("all")]
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PAGE_SIZE)
    }
}

impl From<u32> for PageSize {
    fn from(value: u32) -> Self {
        Self::Fixed(value)
    }
}

impl PageSize {
    /// Zero rows per page means "no paging", collapse it into `All`.
    pub fn normalized(self) -> Self {
        match self {
            Self::Fixed(0) => Self::All,
            other => other,
        }
    }

    /// Numeric form expected by the pager content, `All` maps to zero.
    pub fn as_count(self) -> u32 {
        match self {
            Self::Fixed(size) => size,
            Self::All => 0,
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self.normalized(), Self::All)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid page size '{0}', expected a non-negative integer or \"all\"")]
pub struct ParsePageSizeError(String);

impl FromStr for PageSize {
    type Err = ParsePageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }

        trimmed.parse::<u32>().map(Self::Fixed).map_err(|_| ParsePageSizeError(s.to_owned()))
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(size) => serializer.serialize_u32(*size),
            Self::All => serializer.serialize_str(ALL),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PageSizeVisitor;

        impl Visitor<'_> for PageSizeVisitor {
            type Value = PageSize;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a non-negative integer or \"{ALL}\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(PageSize::Fixed)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(PageSize::Fixed)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == ALL {
                    Ok(PageSize::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(PageSizeVisitor)
    }
}

/// Page size choices offered to the user. `Auto` derives them from the
/// effective page size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowedPageSizes {
    Explicit(Vec<u32>),
    #[default]
    Auto,
}

impl AllowedPageSizes {
    /// Choices derived around `page_size`: half, same and double. Empty when
    /// paging is disabled.
    pub fn auto_for(page_size: PageSize) -> Vec<u32> {
        match page_size.normalized() {
            PageSize::All => Vec::new(),
            PageSize::Fixed(size) => vec![size / 2, size, size.saturating_mul(2)],
        }
    }
}

impl From<Vec<u32>> for AllowedPageSizes {
    fn from(value: Vec<u32>) -> Self {
        Self::Explicit(value)
    }
}

impl Serialize for AllowedPageSizes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Explicit(sizes) => sizes.serialize(serializer),
            Self::Auto => serializer.serialize_str(AUTO),
        }
    }
}

impl<'de> Deserialize<'de> for AllowedPageSizes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AllowedPageSizesVisitor;

        impl<'de> Visitor<'de> for AllowedPageSizesVisitor {
            type Value = AllowedPageSizes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a list of page sizes or \"{AUTO}\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == AUTO {
                    Ok(AllowedPageSizes::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut sizes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(size) = seq.next_element::<u32>()? {
                    sizes.push(size);
                }
                Ok(AllowedPageSizes::Explicit(sizes))
            }
        }

        deserializer.deserialize_any(AllowedPageSizesVisitor)
    }
}
