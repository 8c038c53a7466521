//! Compile-time tunables for the wire format: a namespace of constants,
//! not a runtime config object, since none of these are meant to vary
//! per record or per call.

/// Hard ceiling on a single encoder/decoder buffer.
pub const MAX_BUFFER_SIZE: usize = 1 << 30;

/// Hard ceiling on the element count of any array/object-array/map.
pub const MAX_OBJECT_ARRAY_SIZE: usize = 1 << 20;

/// Nested-record/array payloads at or under this length use a 1-byte
/// length prefix instead of 4; see `Encoder::put_len`.
pub const TRIM_SIZE_LIMIT: usize = 127;

/// Above this capacity, the encoder stops doubling its buffer a second
/// time even if under the high-water mark.
pub const DOUBLE_BUFFER_LIMIT: usize = 1 << 22;

/// Default inline capacity a freshly constructed `Encoder` starts with.
pub const BUFFER_DEFAULT_CAPACITY: usize = 4096;

/// Sentinel 16-bit length marking a null element in a packable array.
pub const NULL_PACKABLE: u16 = 0xFFFF;

/// Sentinel info-table value marking an absent field.
pub const NULL_FLAG: i64 = -1;

/// Default inline size of a decoder's per-index info table.
pub const DEFAULT_INFO_LEN: usize = 32;
