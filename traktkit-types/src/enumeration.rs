//! Closed string sets with a fallback member.
//!
//! Decoding is total: any tag the table does not know maps to the fallback,
//! so new server-side values never break a client. Encoding is partial: the
//! fallback has no canonical tag and refuses to encode.

use crate::value::mismatch;
use crate::{DecodeError, EncodeError, FieldPath};
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

/// A string-backed enum with a designated fallback member.
pub trait WireEnum: Copy + PartialEq + Debug + 'static {
    /// Enum name used in logs and errors.
    const NAME: &'static str;

    /// Member used for tags missing from [`Self::VARIANTS`].
    const FALLBACK: Self;

    /// Known members and their wire tags. The fallback is not listed.
    const VARIANTS: &'static [(Self, &'static str)];

    /// Maps a wire tag to a member. Never fails.
    fn decode_tag(raw: &str) -> Self {
        match Self::VARIANTS.iter().find(|(_, tag)| *tag == raw) {
            Some((variant, _)) => *variant,
            None => {
                debug!(name = Self::NAME, raw, "unrecognised tag, using fallback");
                Self::FALLBACK
            }
        }
    }

    /// Returns the wire tag of a known member.
    fn encode_tag(self) -> Result<&'static str, EncodeError> {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| {
                warn!(name = Self::NAME, variant = ?self, "refusing to encode fallback member");
                EncodeError::UnencodableVariant {
                    name: Self::NAME,
                    variant: format!("{self:?}"),
                }
            })
    }
}

/// Decodes a wire enum field. Only a non-string value is an error.
pub fn enum_from_wire<E: WireEnum>(value: &Value, path: &FieldPath) -> Result<E, DecodeError> {
    match value.as_str() {
        Some(raw) => Ok(E::decode_tag(raw)),
        None => Err(mismatch::<String>(value, path)),
    }
}

/// Encodes a wire enum field.
pub fn enum_to_wire<E: WireEnum>(variant: E) -> Result<Value, EncodeError> {
    variant.encode_tag().map(|tag| Value::String(tag.to_owned()))
}
