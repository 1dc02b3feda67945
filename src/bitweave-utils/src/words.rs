//! Fixed-width word conversion for byte-packed streams.
//!
//! Bit-sequence storage is plain bytes; algorithms built on top of it
//! (rotate-based digests in particular) tend to work in 16, 32 or
//! 64-bit words instead. The converters here bridge the two: widening
//! packs a byte stream into little-endian words, zero-padding a
//! trailing partial word, and narrowing emits every word back out as
//! its little-endian bytes.

use std::mem;

use byteorder::{ByteOrder, LittleEndian};

macro_rules! widen_impl {
    ($($fn:ident() -> $ty:ty [$read:ident, $read_into:ident]),* $(,)*) => {
        $(
            #[doc = concat!("Packs a byte stream into little-endian [`", stringify!($ty), "`] words.")]
            ///
            /// A trailing partial word is zero-padded at its high end.
            pub fn $fn(bytes: &[u8]) -> Vec<$ty> {
                const SIZE: usize = mem::size_of::<$ty>();

                let whole = bytes.len() / SIZE;
                let mut out = vec![0; bytes.len().div_ceil(SIZE)];
                LittleEndian::$read_into(&bytes[..whole * SIZE], &mut out[..whole]);

                if whole < out.len() {
                    let mut tail = [0; SIZE];
                    tail[..bytes.len() - whole * SIZE].copy_from_slice(&bytes[whole * SIZE..]);
                    out[whole] = LittleEndian::$read(&tail);
                }

                out
            }
        )*
    };
}

macro_rules! narrow_impl {
    ($($fn:ident($ty:ty) [$write_into:ident]),* $(,)*) => {
        $(
            #[doc = concat!("Unpacks little-endian [`", stringify!($ty), "`] words into their byte stream.")]
            pub fn $fn(words: &[$ty]) -> Vec<u8> {
                let mut out = vec![0; words.len() * mem::size_of::<$ty>()];
                LittleEndian::$write_into(words, &mut out);

                out
            }
        )*
    };
}

widen_impl! {
    to_u16() -> u16 [read_u16, read_u16_into],
    to_u32() -> u32 [read_u32, read_u32_into],
    to_u64() -> u64 [read_u64, read_u64_into],
}

narrow_impl! {
    from_u16(u16) [write_u16_into],
    from_u32(u32) [write_u32_into],
    from_u64(u64) [write_u64_into],
}
