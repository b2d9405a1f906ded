
use lanes::layouts::LaneWord;
use rand_core::RngCore;
use rug::Integer;
use rug::integer::Order;
use sampling::source::Source;

/// Fills a value with uniform words drawn from `source`.
pub fn fill_random<T: LaneWord>(words: &mut [T], source: &mut Source) {
    let mut bytes: Vec<u8> = vec![0u8; std::mem::size_of_val(words)];
    source.fill_bytes(&mut bytes);
    crate::bytes::from_bytes(words, &bytes);
}

/// Reads a value back as an exact big integer (the test oracle domain).
pub fn to_integer<T: LaneWord>(words: &[T]) -> Integer {
    let mut bytes: Vec<u8> = vec![0u8; std::mem::size_of_val(words)];
    crate::bytes::to_bytes(&mut bytes, words);
    Integer::from_digits(&bytes, Order::Lsf)
}
