//! ObjectId normalization and comparison helpers.
//!
//! Document stores key their records by a 12-byte, time-ordered ObjectId.
//! Call sites rarely hold a clean `ObjectId` value: they hold hex text from a
//! URL, raw bytes from a wire payload, an epoch-seconds integer from a log
//! line, or something that is not an id at all. This crate is a small facade
//! that turns that heterogeneous input into an [`ObjectId`] (or a controlled
//! fallback), compares ids by their embedded creation time, deduplicates
//! collections of them, and renders them as canonical text.
//!
//! The byte layout, uniqueness algorithm, and hex codec of the id itself
//! belong to the `bson` crate; this facade only consumes them.
//!
//! ## Canonical text form
//! - Length: 24
//! - Characters: `0-9` and `a-f` only (input is accepted case-insensitively)
//! - First 8 characters: big-endian 4-byte creation time, seconds since epoch
//! - Example: `507f1f77bcf86cd799439011`
//!
//! ## Lenient and strict surfaces
//! Every operation picks exactly one failure policy:
//! - The default surface never fails on ordinary bad input. [`new_id`]
//!   resolves to a configurable fallback, [`timestamp`] returns `None`, and
//!   [`is_after`]/[`is_before`] return `false`.
//! - The strict surface ([`try_timestamp`], [`try_hex`], [`try_is_after`],
//!   [`try_is_before`], and [`NewIdOptions::strict`]) fails with an
//!   [`OidError`] instead.
//!
//! ## Example
//! ```
//! use oid_utils::{new_id, timestamp, try_hex, NewIdOptions, Value};
//!
//! // Coerce canonical hex text (any case) into an id.
//! let id = new_id(Some(&Value::from("507F1F77BCF86CD799439011")), &NewIdOptions::default())?;
//! assert_eq!(try_hex(&id)?, "507f1f77bcf86cd799439011");
//!
//! // Null input resolves to the configured fallback instead of failing.
//! let missing = new_id(Some(&Value::Null), &NewIdOptions::default())?;
//! assert_eq!(missing, Value::Null);
//!
//! // Epoch-seconds integers seed the creation-time field.
//! let epoch = new_id(Some(&Value::from(0)), &NewIdOptions::default())?;
//! assert_eq!(timestamp(&epoch).map(|t| t.timestamp()), Some(0));
//! # Ok::<(), oid_utils::OidError>(())
//! ```

mod check;
mod compare;
mod convert;
mod create;
mod raw;
mod value;

pub use check::{can_be_id, is_id, is_same_id};
pub use compare::{is_after, is_before, try_is_after, try_is_before};
pub use convert::{display_string, timestamp, try_hex, try_timestamp};
pub use create::{new_id, new_ids, unique_by_display, unique_ids, NewIdOptions, NewIdsOptions};
pub use value::Value;

/// Re-exported for consumers that need the raw id type.
pub use bson::oid::ObjectId;

/// Errors surfaced by the strict operations.
///
/// The lenient surface never produces these for ordinary bad input; it
/// resolves to a fallback value or `false` instead.
#[derive(Debug, thiserror::Error)]
pub enum OidError {
    /// The value's shape cannot produce an ObjectId.
    #[error("value cannot be coerced to an ObjectId: '{0}'")]
    NotCoercible(String),
    /// A strict accessor received something other than an ObjectId.
    #[error("value is not an ObjectId instance")]
    NotAnObjectId,
    /// A strict comparator operand was neither an ObjectId nor a timestamp.
    #[error("comparison operands must be ObjectId instances or timestamps")]
    InvalidComparison,
}

/// Result type for ObjectId operations.
pub type OidResult<T> = Result<T, OidError>;
