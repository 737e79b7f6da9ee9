//! Closed string enumerations used on the wire.
//!
//! Each enumeration accepts only its fixed token set. Decoding any other
//! token is a hard failure reported as an [`UnknownTokenError`] that names
//! the permitted values; there is no silent fallback to a default variant.

use std::borrow::Cow;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr, VariantNames};
use thiserror::Error;

/// Raised when a string is not one of an enumeration's permitted tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}' (expected one of {})", .expected.join(", "))]
pub struct UnknownTokenError {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnknownTokenError {
    /// Name of the enumeration that rejected the token.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected token.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Every token the enumeration accepts.
    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// The action that caused a [`Change`](crate::Change).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Action {
    /// No action was reported.
    #[default]
    #[strum(serialize = "UNSPECIFIED_ACTION")]
    Unspecified,
    /// Something was added to a module.
    #[strum(serialize = "ADD")]
    Add,
    /// Something in a module was modified.
    #[strum(serialize = "MODIFY")]
    Modify,
    /// Something was removed from a module.
    #[strum(serialize = "REMOVE")]
    Remove,
    /// A file was created.
    #[strum(serialize = "CREATE_FILE")]
    CreateFile,
    /// A file was saved.
    #[strum(serialize = "SAVE_FILE")]
    SaveFile,
    /// A file was deleted.
    #[strum(serialize = "DELETE_FILE")]
    DeleteFile,
}

/// The surface of the host where a [`Change`](crate::Change) originated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Source {
    /// No source was reported.
    #[default]
    #[strum(serialize = "UNSPECIFIED_SOURCE")]
    Unspecified,
    /// A text editor.
    #[strum(serialize = "TEXT")]
    Text,
    /// A diagram view.
    #[strum(serialize = "DIAGRAM")]
    Diagram,
    /// A custom, host-specific surface.
    #[strum(serialize = "CUSTOM")]
    Custom,
}

/// Horizontal alignment of a template text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateTextBlockAlign {
    /// Align to the start of the reading direction.
    Start,
    /// Align to the end of the reading direction.
    End,
    /// Align left.
    Left,
    /// Align right.
    Right,
    /// Centre the text.
    Center,
}

/// Finds the variant whose wire token is `raw`, reporting the permitted set
/// on failure.
fn parse_token<T>(kind: &'static str, raw: &str) -> Result<T, UnknownTokenError>
where
    T: IntoEnumIterator + VariantNames + Into<&'static str> + Copy,
{
    T::iter()
        .find(|variant| Into::<&'static str>::into(*variant) == raw)
        .ok_or_else(|| UnknownTokenError {
            kind,
            value: raw.to_owned(),
            expected: T::VARIANTS,
        })
}

macro_rules! closed_token {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Returns the wire token for this variant.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                self.into()
            }

            /// Parses a wire token, rejecting anything outside the closed set.
            ///
            /// # Errors
            ///
            /// Returns [`UnknownTokenError`] naming every permitted token when
            /// `raw` is not one of them.
            pub fn parse(raw: &str) -> Result<Self, UnknownTokenError> {
                parse_token(Self::KIND, raw)
            }

            /// Human-readable name of this enumeration used in errors.
            pub const KIND: &'static str = $kind;
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownTokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::parse(raw)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = UnknownTokenError;

            fn try_from(raw: &str) -> Result<Self, Self::Error> {
                Self::parse(raw)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Cow::<'de, str>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }

        impl JsonSchema for $ty {
            fn schema_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
                let tokens: &[&str] = <Self as VariantNames>::VARIANTS;
                json_schema!({
                    "type": "string",
                    "enum": tokens,
                })
            }
        }
    };
}

closed_token!(Action, "action");
closed_token!(Source, "source");
closed_token!(TemplateTextBlockAlign, "text block alignment");
