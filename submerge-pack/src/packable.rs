//! The contract an application record type implements to participate in
//! encode/decode: a trait with both an instance method for writing
//! fields and an associated function for reading them back, since Rust
//! has no constructor-from-decoder convention to hang a static factory
//! method off of.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;

/// Implemented by any record type the codec can serialize. `encode`
/// writes fields in any order under caller-assigned indices; `decode`
/// reads them back by index, applying its own defaults for absent
/// fields. `decode` returns a `Result` so that a malformed nested
/// array, map, or string surfaces as an error the caller of
/// [`crate::unmarshal`] can match on, rather than a panic.
pub trait Packable: Sized {
    fn encode(&self, encoder: &mut Encoder);
    fn decode(decoder: &mut Decoder) -> Result<Self>;
}
