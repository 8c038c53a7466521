//! Bit-packed and width-compressed array encodings: booleans, enums
//! (dynamic bit width), and grouped-by-4 2-bit-flag compact numeric
//! arrays (int/int64/double).
//!
//! Every function here operates on a field's *payload* bytes only, the
//! surrounding tag + length framing is the caller's job (see
//! `Encoder::put_bool_array` & co., `Decoder::get_bool_array` & co.),
//! since a payload length of zero is indistinguishable from (and in
//! fact produced the same way as) an absent-but-zero scalar field: both
//! of the zero-length cases below are reached with an empty byte slice
//! and return an empty `Vec` without trying to interpret a header byte
//! that was never written.

use crate::buffer;
use crate::error::{data_err, PackError};

// ---------------------------------------------------------------- bool

pub(crate) fn bool_array_byte_count(n: usize) -> usize {
    if n <= 5 {
        1
    } else {
        let remain = n & 0x7;
        (n >> 3) + if remain == 0 { 1 } else { 2 }
    }
}

pub(crate) fn write_bool_array_body(out: &mut Vec<u8>, values: &[bool]) {
    let n = values.len();
    if n <= 5 {
        let mut b: u8 = (n as u8) << 5;
        for (i, &v) in values.iter().enumerate() {
            if v {
                b |= 1 << i;
            }
        }
        out.push(b);
        return;
    }
    let remain = (n & 0x7) as u8;
    out.push(remain);
    let mut i = 0;
    while i < n {
        let end = (i + 8).min(n);
        let mut b: u8 = 0;
        for (j, &v) in values[i..end].iter().enumerate() {
            if v {
                b |= 1 << j;
            }
        }
        out.push(b);
        i = end;
    }
}

pub(crate) fn read_bool_array_body(bytes: &[u8]) -> Result<Vec<bool>, PackError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    if bytes.len() == 1 {
        let b = bytes[0];
        let n = (b >> 5) as usize;
        let mut out = Vec::with_capacity(n);
        let mut bits = b;
        for _ in 0..n {
            out.push(bits & 1 != 0);
            bits >>= 1;
        }
        return Ok(out);
    }
    let remain = bytes[0];
    if remain >> 3 != 0 {
        return Err(data_err(PackError::BitInfoOverflow));
    }
    let data = &bytes[1..];
    let n = if remain == 0 {
        data.len() * 8
    } else {
        (data.len() - 1) * 8 + remain as usize
    };
    let mut out = Vec::with_capacity(n);
    for &byte in data {
        for bit in 0..8 {
            if out.len() == n {
                break;
            }
            out.push(byte & (1 << bit) != 0);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------- enum

/// Picks the element bit width (as a `bitShift`, where elements occupy
/// `2^bitShift` bits each) that fits every value, and the total byte
/// count (including the one header byte) the encoded array will take.
pub(crate) fn enum_array_plan(values: &[i32]) -> Result<(u8, usize), PackError> {
    let n = values.len();
    let mut sum: i32 = 0;
    for &v in values {
        sum |= v;
    }
    let bit_shift: u8 = if (sum >> 1) == 0 {
        0
    } else if (sum >> 2) == 0 {
        1
    } else if (sum >> 4) == 0 {
        2
    } else if (sum >> 8) == 0 {
        3
    } else {
        return Err(data_err(PackError::EnumOverflow));
    };
    let byte_count = if bit_shift == 3 {
        n + 1
    } else {
        let total_bits = n << bit_shift;
        let remain = total_bits & 0x7;
        (total_bits >> 3) + if remain == 0 { 1 } else { 2 }
    };
    Ok((bit_shift, byte_count))
}

pub(crate) fn write_enum_array_body(out: &mut Vec<u8>, values: &[i32], bit_shift: u8) {
    let n = values.len();
    if bit_shift == 3 {
        out.push(3 << 3);
        for &v in values {
            out.push(v as u8);
        }
        return;
    }
    let total_bits = n << bit_shift;
    let remain = (total_bits & 0x7) as u8;
    out.push((bit_shift << 3) | remain);
    let index_shift = 3 - bit_shift;
    let index_mask = (1usize << index_shift) - 1;
    let step = 1usize << index_shift;
    let mut i = 0;
    while i < n {
        let end = (i + step).min(n);
        let mut b: u8 = 0;
        for j in i..end {
            b |= (values[j] as u8) << ((j & index_mask) << bit_shift);
        }
        out.push(b);
        i = end;
    }
}

pub(crate) fn read_enum_array_body(bytes: &[u8]) -> Result<Vec<i32>, PackError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let header = bytes[0];
    if header >> 5 != 0 {
        return Err(data_err(PackError::BitInfoOverflow));
    }
    let bit_shift = header >> 3;
    let byte_count = bytes.len() - 1;
    let data = &bytes[1..];
    if bit_shift == 3 {
        return Ok(data.iter().map(|&b| b as i32).collect());
    }
    let remain = (header & 0x7) as usize;
    let index_shift = 3 - bit_shift;
    let mut n = byte_count << index_shift;
    if remain > 0 {
        n -= (8 - remain) >> bit_shift;
    }
    let value_mask: u8 = (1u8 << (1 << bit_shift)) - 1;
    let step = 1usize << index_shift;
    let mut out = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        let end = (i + step).min(n);
        let mut b = data[i >> index_shift];
        for _ in i..end {
            out.push((b & value_mask) as i32);
            b >>= 1 << bit_shift;
        }
        i = end;
    }
    Ok(out)
}

// ------------------------------------------------------ compact numbers

/// Upper bound on the encoded byte length of a compact int/int64/double
/// array: the length is data-dependent (each element is 0, 1, 2, or
/// `elem_width` bytes) so the encoder frames the field with this bound
/// before writing, then backpatches the true length once known; the
/// bound is never less than the true length, so the length field chosen
/// from it is always wide enough.
pub(crate) fn compact_numbers_upper_bound(n: usize, elem_width: usize) -> usize {
    let flag_bytes = (n * 2 + 7) / 8;
    buffer::varint32_size(n as u32) + flag_bytes + n * elem_width
}

fn write_compact_values(out: &mut Vec<u8>, values: &[i64], full_width: u8) {
    let n = values.len();
    buffer::push_varint32(out, n as u32);
    let flag_bytes = (n * 2 + 7) / 8;
    let p_flag = out.len();
    out.resize(p_flag + flag_bytes, 0);
    let mut i = 0;
    while i < n {
        let end = (i + 4).min(n);
        let mut flags: u8 = 0;
        for (j, &e) in values[i..end].iter().enumerate() {
            if e == 0 {
                continue;
            }
            let shift = (j as u8) << 1;
            if (e >> 8) == 0 {
                buffer::push_u8(out, e as u8);
                flags |= 1 << shift;
            } else if (e >> 16) == 0 {
                buffer::push_i16_le(out, e as i16);
                flags |= 2 << shift;
            } else if full_width == 4 {
                buffer::push_i32_le(out, e as i32);
                flags |= 3 << shift;
            } else {
                buffer::push_i64_le(out, e);
                flags |= 3 << shift;
            }
        }
        out[p_flag + (i >> 2)] = flags;
        i = end;
    }
}

pub(crate) fn write_compact_int_values(out: &mut Vec<u8>, values: &[i32]) {
    let widened: Vec<i64> = values.iter().map(|&v| v as i64).collect();
    write_compact_values(out, &widened, 4);
}

pub(crate) fn write_compact_int64_values(out: &mut Vec<u8>, values: &[i64]) {
    write_compact_values(out, values, 8);
}

pub(crate) fn write_compact_double_values(out: &mut Vec<u8>, values: &[f64]) {
    let n = values.len();
    buffer::push_varint32(out, n as u32);
    let flag_bytes = (n * 2 + 7) / 8;
    let p_flag = out.len();
    out.resize(p_flag + flag_bytes, 0);
    let mut i = 0;
    while i < n {
        let end = (i + 4).min(n);
        let mut flags: u8 = 0;
        for (j, &d) in values[i..end].iter().enumerate() {
            if d == 0.0 {
                continue;
            }
            let shift = (j as u8) << 1;
            let bits = d.to_bits() as i64;
            if (bits << 16) == 0 {
                buffer::push_i16_le(out, (bits >> 48) as i16);
                flags |= 1 << shift;
            } else if (bits << 32) == 0 {
                buffer::push_i32_le(out, (bits >> 32) as i32);
                flags |= 2 << shift;
            } else {
                buffer::push_i64_le(out, bits);
                flags |= 3 << shift;
            }
        }
        out[p_flag + (i >> 2)] = flags;
        i = end;
    }
}

fn read_compact_values(bytes: &[u8], full_width: u8) -> Result<Vec<i64>, PackError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let mut pos = 0usize;
    let n = buffer::read_varint32(bytes, &mut pos)? as usize;
    let flag_bytes = (n * 2 + 7) / 8;
    buffer::check_bound(bytes.len(), pos, flag_bytes)?;
    let p_flag = pos;
    pos += flag_bytes;
    let mut out = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        let end = (i + 4).min(n);
        let mut b = bytes[p_flag + (i >> 2)];
        for _ in i..end {
            let flag = b & 0x3;
            let v = match flag {
                0 => 0,
                1 => buffer::read_u8(bytes, &mut pos)? as i64,
                2 => (buffer::read_i16_le(bytes, &mut pos)? as u16) as i64,
                _ => {
                    if full_width == 4 {
                        buffer::read_i32_le(bytes, &mut pos)? as i64
                    } else {
                        buffer::read_i64_le(bytes, &mut pos)?
                    }
                }
            };
            out.push(v);
            b >>= 2;
        }
        i = end;
    }
    Ok(out)
}

pub(crate) fn read_compact_int_array(bytes: &[u8]) -> Result<Vec<i32>, PackError> {
    Ok(read_compact_values(bytes, 4)?
        .into_iter()
        .map(|v| v as i32)
        .collect())
}

pub(crate) fn read_compact_int64_array(bytes: &[u8]) -> Result<Vec<i64>, PackError> {
    read_compact_values(bytes, 8)
}

pub(crate) fn read_compact_double_array(bytes: &[u8]) -> Result<Vec<f64>, PackError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let mut pos = 0usize;
    let n = buffer::read_varint32(bytes, &mut pos)? as usize;
    let flag_bytes = (n * 2 + 7) / 8;
    buffer::check_bound(bytes.len(), pos, flag_bytes)?;
    let p_flag = pos;
    pos += flag_bytes;
    let mut out = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        let end = (i + 4).min(n);
        let mut b = bytes[p_flag + (i >> 2)];
        for _ in i..end {
            let flag = b & 0x3;
            let bits: u64 = match flag {
                0 => 0,
                1 => (buffer::read_i16_le(bytes, &mut pos)? as u16 as u64) << 48,
                2 => (buffer::read_i32_le(bytes, &mut pos)? as u32 as u64) << 32,
                _ => buffer::read_i64_le(bytes, &mut pos)? as u64,
            };
            out.push(f64::from_bits(bits));
            b >>= 2;
        }
        i = end;
    }
    Ok(out)
}
