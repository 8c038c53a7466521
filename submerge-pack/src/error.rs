use std::fmt;

use tracing::error;

/// Failure modes of this codec. Each is a closed, known condition called
/// out in the wire format's own design rather than an open-ended wrapped
/// error, so callers can match on kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A read or write would cross the buffer's limit.
    OutOfBound,
    /// A decoder's scan did not consume exactly the buffer window it was
    /// given.
    InvalidPackData,
    /// A fixed-width primitive array's byte length is not a multiple of
    /// its element width.
    InvalidArrayLength,
    /// An object/array count is negative or exceeds `MAX_OBJECT_ARRAY_SIZE`.
    InvalidSize,
    /// An encoder request would exceed `MAX_BUFFER_SIZE`.
    CapacityOverflow,
    /// An enum array element exceeds the 8-bit value the format allows.
    EnumOverflow,
    /// A bit-packed array header has reserved bits set.
    BitInfoOverflow,
    /// A string field's payload was not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PackError::OutOfBound => "buffer out of bound",
            PackError::InvalidPackData => "invalid pack data",
            PackError::InvalidArrayLength => "invalid array length",
            PackError::InvalidSize => "invalid object/array size",
            PackError::CapacityOverflow => "desired capacity over limit",
            PackError::EnumOverflow => "enum array value out of range",
            PackError::BitInfoOverflow => "bit-packed array header overflow",
            PackError::InvalidUtf8 => "string field is not valid utf-8",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for PackError {}

pub type Result<T> = std::result::Result<T, PackError>;

/// Data-integrity failures (as opposed to plain capacity limits hit by
/// caller-controlled sizes) get a log line at the point of discovery,
/// same as `submerge_base::err` does for its callers.
pub(crate) fn data_err(kind: PackError) -> PackError {
    error!(target: "submerge_pack", kind = ?kind, "rejecting malformed pack data");
    kind
}

impl From<PackError> for submerge_base::Error {
    fn from(e: PackError) -> Self {
        submerge_base::err(e.to_string())
    }
}
