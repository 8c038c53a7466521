//! Compact binary record codec: a wire format plus an encoder/decoder
//! pair for application records whose fields are identified by a small
//! integer index (0-255) rather than a name. Fields are tagged with
//! index and type on the wire; scalars take the narrowest fixed-width
//! encoding that losslessly represents the value, nested records use a
//! length-trimmed framing, and bool/enum/numeric arrays are bit-packed.
//!
//! See [`Packable`] for the trait an application record implements,
//! and [`marshal`]/[`unmarshal`] for the two entry points that tie it
//! to an [`Encoder`]/[`Decoder`] pair.

mod buffer;
mod compact;
mod decoder;
mod encoder;
pub mod error;
pub mod limits;
mod packable;
mod tag;

pub use decoder::{Decoder, PackableArrayIter};
pub use encoder::Encoder;
pub use error::{PackError, Result};
pub use packable::Packable;

/// Encodes `value` into a fresh buffer. Equivalent to constructing an
/// [`Encoder`], calling `value.encode`, and taking its bytes.
pub fn marshal<T: Packable>(value: &T) -> Result<Vec<u8>> {
    let mut encoder = Encoder::new();
    value.encode(&mut encoder);
    encoder.get_bytes()
}

/// Decodes `bytes` as a `T`. Equivalent to constructing a [`Decoder`]
/// over the slice and calling `T::decode`.
pub fn unmarshal<T: Packable>(bytes: &[u8]) -> Result<T> {
    let mut decoder = Decoder::new(bytes)?;
    T::decode(&mut decoder)
}
