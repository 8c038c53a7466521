//! Tag byte layout: index + type code, 1 or 2 bytes per field.
//!
//! ```text
//! byte 0, low to high:
//!   [0..4)  index, when index < 16
//!   [4..7)  type code
//!   [7]     BIG_INDEX_MASK: when set, a second byte holds the full
//!           index and the low nibble above is left 0.
//! ```

pub(crate) const TYPE_SHIFT: u8 = 4;
pub(crate) const BIG_INDEX_MASK: u8 = 1 << 7;
pub(crate) const TYPE_MASK: u8 = 7 << TYPE_SHIFT;
pub(crate) const INDEX_MASK: u8 = 0x0f;
pub(crate) const LITTLE_INDEX_BOUND: u16 = 1 << TYPE_SHIFT;

pub(crate) const TYPE_0: u8 = 0;
pub(crate) const TYPE_NUM_8: u8 = 1 << TYPE_SHIFT;
pub(crate) const TYPE_NUM_16: u8 = 2 << TYPE_SHIFT;
pub(crate) const TYPE_NUM_32: u8 = 3 << TYPE_SHIFT;
pub(crate) const TYPE_NUM_64: u8 = 4 << TYPE_SHIFT;
pub(crate) const TYPE_VAR_8: u8 = 5 << TYPE_SHIFT;
pub(crate) const TYPE_VAR_16: u8 = 6 << TYPE_SHIFT;
pub(crate) const TYPE_VAR_32: u8 = 7 << TYPE_SHIFT;
