use thiserror::Error;

use super::variant::Variant;

/// Errors from looking up or requiring a comparator variant.
///
/// The comparators themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown one-edit variant `{0}`, expected one of naive, scalar, words, sse, avx2")]
    Unknown(String),

    #[error("one-edit variant `{0}` is not supported on this CPU or build")]
    Unsupported(Variant)
}
