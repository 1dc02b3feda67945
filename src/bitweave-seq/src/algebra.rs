//! Bitwise operators over bit-packed containers.
//!
//! Every operator accepts any [`BitStore`] operand, allocates a fresh
//! [`BitSequence`] and leaves its operands untouched. Operands of
//! unequal length are zero-extended at their high-index end until both
//! reach the longer bit count; the binary operators are therefore
//! commutative regardless of operand order.
//!
//! The two shift operators are stream operations, not arithmetic:
//! [`prepend_zeroes`] slides every existing bit up by `n` positions
//! and [`drop_prefix`] discards the low `n` positions, repacking the
//! remainder from index 0.

use std::ops::{Add, BitAnd, BitOr, BitXor, Not};

use crate::{bytes_for, BitSequence, BitSequenceBuilder, BitStore, Error};

/// Concatenates two containers into a fresh sequence.
///
/// The result holds all of `a`'s bits at their existing indices,
/// followed by `b`'s bits starting at index `a.bit_len()`.
pub fn concat<A, B>(a: &A, b: &B) -> BitSequence
where
    A: BitStore + ?Sized,
    B: BitStore + ?Sized,
{
    let mut out = BitSequenceBuilder::new();
    out.append(a);
    out.append(b);

    out.into_bit_sequence()
}

/// Combines two containers with bitwise OR.
pub fn or<A, B>(a: &A, b: &B) -> BitSequence
where
    A: BitStore + ?Sized,
    B: BitStore + ?Sized,
{
    combine(a, b, |a, b| a | b)
}

/// Combines two containers with bitwise AND.
///
/// Since the shorter operand is zero-extended first, every bit past
/// its original length clears in the result.
pub fn and<A, B>(a: &A, b: &B) -> BitSequence
where
    A: BitStore + ?Sized,
    B: BitStore + ?Sized,
{
    combine(a, b, |a, b| a & b)
}

/// Combines two containers with bitwise XOR.
pub fn xor<A, B>(a: &A, b: &B) -> BitSequence
where
    A: BitStore + ?Sized,
    B: BitStore + ?Sized,
{
    combine(a, b, |a, b| a ^ b)
}

/// Complements every byte backing the container; the bit count is
/// unchanged.
///
/// Bits past the valid count flip along with the rest and are NOT
/// guaranteed zero afterwards. Callers relying on clean trailing bits
/// must mask explicitly, e.g. by combining with
/// [`BitSequence::ones`] of the same length.
pub fn not<A>(a: &A) -> BitSequence
where
    A: BitStore + ?Sized,
{
    let data = a.as_bytes().iter().map(|&byte| !byte).collect();
    BitSequence::from_raw_parts(data, a.bit_len())
}

/// Prepends `n` zero bits, sliding every existing bit index up by `n`.
pub fn prepend_zeroes<A>(a: &A, n: usize) -> BitSequence
where
    A: BitStore + ?Sized,
{
    concat(&BitSequence::zeroes(n), a)
}

/// Drops the low `n` bits and repacks the remainder from index 0.
///
/// Fails with [`Error::IndexOutOfRange`] when `n` exceeds the bit
/// count; dropping exactly all bits yields the empty sequence.
pub fn drop_prefix<A>(a: &A, n: usize) -> Result<BitSequence, Error>
where
    A: BitStore + ?Sized,
{
    let len = a.bit_len();
    if n > len {
        return Err(Error::IndexOutOfRange { index: n, len });
    }

    let mut out = BitSequenceBuilder::new();
    for i in n..len {
        out.append_bits(1, &[a.bit(i)? as u8]);
    }

    Ok(out.into_bit_sequence())
}

// Byte-wise combination after ordering the operands by length.
fn combine<A, B>(a: &A, b: &B, op: fn(u8, u8) -> u8) -> BitSequence
where
    A: BitStore + ?Sized,
    B: BitStore + ?Sized,
{
    if a.bit_len() >= b.bit_len() {
        combine_ordered(a, b, op)
    } else {
        combine_ordered(b, a, op)
    }
}

fn combine_ordered<L, S>(longer: &L, shorter: &S, op: fn(u8, u8) -> u8) -> BitSequence
where
    L: BitStore + ?Sized,
    S: BitStore + ?Sized,
{
    // Zero-extend the shorter operand at its high-index end until the
    // counts match, then combine byte for byte. Should the padded
    // array still come up short of a byte, the longer operand's
    // remainder passes through unchanged.
    let padding = BitSequence::zeroes(longer.bit_len() - shorter.bit_len());
    let padded = concat(shorter, &padding);

    let nbytes = bytes_for(longer.bit_len());
    let padded_bytes = padded.as_bytes();

    let data = longer.as_bytes()[..nbytes]
        .iter()
        .enumerate()
        .map(|(i, &byte)| match padded_bytes.get(i) {
            Some(&other) => op(byte, other),
            None => byte,
        })
        .collect();

    BitSequence::from_raw_parts(data, longer.bit_len())
}

impl Add<&BitSequence> for &BitSequence {
    type Output = BitSequence;

    fn add(self, rhs: &BitSequence) -> BitSequence {
        concat(self, rhs)
    }
}

impl BitOr<&BitSequence> for &BitSequence {
    type Output = BitSequence;

    fn bitor(self, rhs: &BitSequence) -> BitSequence {
        or(self, rhs)
    }
}

impl BitAnd<&BitSequence> for &BitSequence {
    type Output = BitSequence;

    fn bitand(self, rhs: &BitSequence) -> BitSequence {
        and(self, rhs)
    }
}

impl BitXor<&BitSequence> for &BitSequence {
    type Output = BitSequence;

    fn bitxor(self, rhs: &BitSequence) -> BitSequence {
        xor(self, rhs)
    }
}

impl Not for &BitSequence {
    type Output = BitSequence;

    fn not(self) -> BitSequence {
        self::not(self)
    }
}
