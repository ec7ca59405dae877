//! URL slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains characters outside `[a-z0-9-]` or has a leading or
    /// trailing hyphen.
    #[error("slug may only contain lowercase letters, digits, and interior hyphens")]
    InvalidCharacters,
}

/// A URL-safe identifier segment.
///
/// Website and category slugs appear in URLs and export filenames, so the
/// accepted alphabet is restricted to lowercase ASCII letters, digits, and
/// interior hyphens.
///
/// ## Examples
///
/// ```
/// use pagewright_core::Slug;
///
/// assert!(Slug::parse("my-portfolio").is_ok());
/// assert!(Slug::parse("My Portfolio").is_err());
/// assert_eq!(Slug::slugify("My Portfolio!").as_str(), "my-portfolio");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 80;

    /// Parse a `Slug` from a string, rejecting anything not already in
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than
    /// [`Self::MAX_LENGTH`], contains characters outside `[a-z0-9-]`, or has
    /// a leading/trailing hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let valid_chars = s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars || s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::InvalidCharacters);
        }

        Ok(Self(s.to_owned()))
    }

    /// Derive a canonical slug from arbitrary display text.
    ///
    /// Lowercases, maps runs of non-alphanumeric characters to single
    /// hyphens, and trims to [`Self::MAX_LENGTH`]. Input with no usable
    /// characters yields the slug `untitled`.
    #[must_use]
    pub fn slugify(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        let mut pending_hyphen = false;

        for c in text.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_hyphen && !out.is_empty() {
                    out.push('-');
                }
                pending_hyphen = false;
                out.push(c.to_ascii_lowercase());
            } else {
                pending_hyphen = true;
            }
            if out.len() >= Self::MAX_LENGTH {
                break;
            }
        }

        out.truncate(Self::MAX_LENGTH);
        while out.ends_with('-') {
            out.pop();
        }

        if out.is_empty() {
            out.push_str("untitled");
        }

        Self(out)
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Slug {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Slug {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Slug {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(Slug::parse("my-portfolio").is_ok());
        assert!(Slug::parse("site2").is_ok());
        assert!(Slug::parse("a").is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
        assert!(matches!(
            Slug::parse("My Portfolio"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::parse("-leading"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::parse("trailing-"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::parse(&"a".repeat(81)),
            Err(SlugError::TooLong { .. })
        ));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(Slug::slugify("My Portfolio!").as_str(), "my-portfolio");
        assert_eq!(Slug::slugify("  Hello -- World  ").as_str(), "hello-world");
        assert_eq!(Slug::slugify("???").as_str(), "untitled");
    }

    #[test]
    fn test_slugify_output_parses() {
        for text in ["Landing Page 2", "Ünïcode Títle", "--x--"] {
            let slug = Slug::slugify(text);
            assert!(Slug::parse(slug.as_str()).is_ok(), "slugify({text:?})");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let slug = Slug::parse("my-site").unwrap();
        let json = serde_json::to_string(&slug).unwrap();
        assert_eq!(json, "\"my-site\"");
        let parsed: Slug = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slug);
    }
}
