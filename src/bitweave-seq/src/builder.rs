use crate::{bytes_for, BitSequence, BitStore, Error};

/// A mutable accumulator that packs appended bit runs into a growable
/// byte buffer.
///
/// The builder tracks a cursor counting the bits committed so far;
/// each append lands at the cursor and advances it. Storage grows
/// zero-filled as needed and never shrinks. Builders are written
/// forward only — there is no way to remove or rewrite bits short of
/// starting over.
///
/// A builder is exclusively owned mutable state; share snapshots taken
/// via [`Self::to_bit_sequence`] instead of the builder itself.
#[derive(Clone, Debug)]
pub struct BitSequenceBuilder {
    bytes: Vec<u8>,
    cursor: usize,
}

impl BitSequenceBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            bytes: vec![0],
            cursor: 0,
        }
    }

    /// Creates a builder pre-seeded with whole bytes; the cursor
    /// starts past all of them.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let cursor = bytes.len() * 8;
        Self { bytes, cursor }
    }

    /// Creates a builder pre-seeded with `count` bits over the given
    /// bytes.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `bytes` holds fewer
    /// than [`bytes_for`]`(count)` bytes.
    pub fn from_bytes_with_count(bytes: Vec<u8>, count: usize) -> Result<Self, Error> {
        if bytes.len() < bytes_for(count) {
            return Err(Error::IndexOutOfRange {
                index: count,
                len: bytes.len() * 8,
            });
        }

        Ok(Self {
            bytes,
            cursor: count,
        })
    }

    /// The number of bits committed so far; the next append starts
    /// here.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.cursor
    }

    /// Indicates whether no bits have been committed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Gets a view of the builder's storage as a byte slice.
    ///
    /// The slice may extend past the last committed bit; those bytes
    /// are zero until an append reaches them.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends the low `bit_count` bits taken from `source` at the
    /// cursor, then advances the cursor by `bit_count`.
    ///
    /// `source` must hold at least [`bytes_for`]`(bit_count)` bytes;
    /// extra bytes are ignored. When `bit_count` is not a multiple of
    /// 8, the bits of the final source byte above the `bit_count`
    /// boundary must already be zero: they are not masked off here,
    /// and stray high bits are carried into the stream (or run the
    /// carry past the grown buffer, which panics). Callers assembling
    /// sub-byte values are responsible for masking first.
    ///
    /// # Panics
    ///
    /// Panics when `source` holds fewer than
    /// [`bytes_for`]`(bit_count)` bytes.
    pub fn append_bits(&mut self, bit_count: usize, source: &[u8]) {
        let byte_count = bytes_for(bit_count);
        assert!(
            source.len() >= byte_count,
            "append of {bit_count} bits requires {byte_count} source bytes"
        );

        let shift = self.cursor % 8;
        let byte_index = self.cursor / 8;

        // Grow zero-filled up to the last byte this append touches so
        // the loop below only ever ORs into initialized storage.
        let needed = bytes_for(self.cursor + bit_count);
        if needed > self.bytes.len() {
            self.bytes.resize(needed, 0);
        }

        // Align every source byte with the cursor's bit offset inside
        // its target byte. Bits pushed past the target's MSB become the
        // carry OR'd into the next target; widening through u16 keeps
        // the shift-by-zero case on the same path.
        let mut carry = 0;
        for (i, &byte) in source[..byte_count].iter().enumerate() {
            let shifted = (byte as u16) << shift;
            self.bytes[byte_index + i] |= carry | shifted as u8;
            carry = (shifted >> 8) as u8;
        }
        if carry != 0 {
            self.bytes[byte_index + byte_count] |= carry;
        }

        self.cursor += bit_count;
    }

    /// Appends every valid bit of another container.
    #[inline]
    pub fn append<B: BitStore + ?Sized>(&mut self, bits: &B) {
        self.append_bits(bits.bit_len(), bits.as_bytes());
    }

    /// Snapshots the current contents into an independent
    /// [`BitSequence`].
    ///
    /// The snapshot copies the backing storage; appending to the
    /// builder afterwards never affects sequences it already issued.
    pub fn to_bit_sequence(&self) -> BitSequence {
        let data = self.bytes[..bytes_for(self.cursor)].to_vec();
        BitSequence::from_raw_parts(data, self.cursor)
    }

    /// Consumes the builder and returns its contents as a
    /// [`BitSequence`] without copying.
    pub fn into_bit_sequence(mut self) -> BitSequence {
        self.bytes.truncate(bytes_for(self.cursor));
        BitSequence::from_raw_parts(self.bytes, self.cursor)
    }
}

impl Default for BitSequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BitStore for BitSequenceBuilder {
    #[inline]
    fn bit_len(&self) -> usize {
        self.cursor
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
