use std::cmp::min;

use lanes::layouts::LaneWord;

/// Interprets `bytes` as a little-endian base-256 unsigned integer and
/// writes it into the `dst` words: the first `min(bytes.len(), fixnum
/// bytes)` bytes are copied, the remaining words are zero-filled, excess
/// input is ignored. Returns the number of bytes copied.
///
/// Purely word-local, so it runs identically on the host and inside a lane
/// group.
pub fn from_bytes<T: LaneWord>(dst: &mut [T], bytes: &[u8]) -> usize {
    let nbytes: usize = min(bytes.len(), dst.len() * T::BYTES);
    dst.fill(T::ZERO);
    for (w, dst_word) in dst.iter_mut().enumerate() {
        let start: usize = w * T::BYTES;
        if start >= nbytes {
            break;
        }
        let end: usize = min(start + T::BYTES, nbytes);
        *dst_word = T::read_le(&bytes[start..end]);
    }
    nbytes
}

/// Inverse of [`from_bytes`]: writes `min(bytes.len(), fixnum bytes)`
/// little-endian bytes of the value into `bytes`, leaving any excess
/// capacity untouched. Returns the number of bytes written.
pub fn to_bytes<T: LaneWord>(bytes: &mut [u8], src: &[T]) -> usize {
    let nbytes: usize = min(bytes.len(), src.len() * T::BYTES);
    for (w, &src_word) in src.iter().enumerate() {
        let start: usize = w * T::BYTES;
        if start >= nbytes {
            break;
        }
        let end: usize = min(start + T::BYTES, nbytes);
        src_word.write_le(&mut bytes[start..end]);
    }
    nbytes
}
