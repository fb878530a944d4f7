//! Fixed-width multi-precision arithmetic on little-endian 64-bit words.
//!
//! Field elements are four words (256 bits). Products are eight words (512 bits) so that no
//! intermediate value of the Montgomery reduction is ever truncated.

use core::cmp::Ordering;

/// 256-bit integer as little-endian words.
pub(crate) type U256Words = [u64; 4];

/// 512-bit integer as little-endian words.
pub(crate) type U512Words = [u64; 8];

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `u64::MAX`, so it can be used directly as a mask.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Full 256 x 256 -> 512-bit schoolbook product.
pub(crate) const fn mul_wide(a: &U256Words, b: &U256Words) -> U512Words {
    let mut out = [0u64; 8];
    let mut i = 0;

    while i < 4 {
        let mut carry = 0;
        let mut j = 0;

        while j < 4 {
            let (w, c) = mac(out[i + j], a[i], b[j], carry);
            out[i + j] = w;
            carry = c;
            j += 1;
        }

        out[i + 4] = carry;
        i += 1;
    }

    out
}

/// 512-bit addition. The carry out of the top word is returned separately.
pub(crate) const fn add_wide(a: &U512Words, b: &U512Words) -> (U512Words, u64) {
    let mut out = [0u64; 8];
    let mut carry = 0;
    let mut i = 0;

    while i < 8 {
        let (w, c) = adc(a[i], b[i], carry);
        out[i] = w;
        carry = c;
        i += 1;
    }

    (out, carry)
}

/// 256-bit addition, returning the sum and the carry out.
pub(crate) const fn add(a: &U256Words, b: &U256Words) -> (U256Words, u64) {
    let (w0, carry) = adc(a[0], b[0], 0);
    let (w1, carry) = adc(a[1], b[1], carry);
    let (w2, carry) = adc(a[2], b[2], carry);
    let (w3, carry) = adc(a[3], b[3], carry);
    ([w0, w1, w2, w3], carry)
}

/// 256-bit subtraction, returning the difference and a borrow mask (`0` or `u64::MAX`).
pub(crate) const fn sub(a: &U256Words, b: &U256Words) -> (U256Words, u64) {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);
    ([w0, w1, w2, w3], borrow)
}

/// Bitwise AND of each word with `mask`.
#[inline]
pub(crate) const fn and(a: &U256Words, mask: &U256Words) -> U256Words {
    [
        a[0] & mask[0],
        a[1] & mask[1],
        a[2] & mask[2],
        a[3] & mask[3],
    ]
}

/// Returns `a - m` if `a >= m`, otherwise `a`.
///
/// `carry` is an extra top bit of `a` (e.g. the carry out of an addition).
pub(crate) const fn sub_if_ge(a: &U256Words, carry: u64, m: &U256Words) -> U256Words {
    let (w, borrow) = sub(a, m);
    let (_, borrow) = sbb(carry, 0, borrow);

    // If underflow occurred on the final limb, borrow = 0xfff...fff, otherwise
    // borrow = 0x000...000. Select the unreduced input in the former case.
    [
        (a[0] & borrow) | (w[0] & !borrow),
        (a[1] & borrow) | (w[1] & !borrow),
        (a[2] & borrow) | (w[2] & !borrow),
        (a[3] & borrow) | (w[3] & !borrow),
    ]
}

/// Returns the low half of a 512-bit integer.
#[inline]
pub(crate) const fn lo(a: &U512Words) -> U256Words {
    [a[0], a[1], a[2], a[3]]
}

/// Returns the high half of a 512-bit integer, i.e. `a >> 256`.
#[inline]
pub(crate) const fn hi(a: &U512Words) -> U256Words {
    [a[4], a[5], a[6], a[7]]
}

/// Zero-extends a 256-bit integer to 512 bits.
#[inline]
pub(crate) const fn widen(a: &U256Words) -> U512Words {
    [a[0], a[1], a[2], a[3], 0, 0, 0, 0]
}

/// `a < b`
#[inline]
pub(crate) const fn lt(a: &U256Words, b: &U256Words) -> bool {
    let (_, borrow) = sub(a, b);
    borrow != 0
}

/// Numerical comparison, most significant word first.
pub(crate) const fn cmp_vartime(a: &U256Words, b: &U256Words) -> Ordering {
    let mut i = 4;

    while i > 0 {
        i -= 1;

        if a[i] < b[i] {
            return Ordering::Less;
        }

        if a[i] > b[i] {
            return Ordering::Greater;
        }
    }

    Ordering::Equal
}

/// Interpret 32 big-endian bytes as little-endian words.
pub(crate) const fn from_be_bytes(b: &[u8; 32]) -> U256Words {
    let mut out = [0u64; 4];
    let mut i = 0;

    while i < 4 {
        let mut w = 0u64;
        let mut j = 0;

        while j < 8 {
            w = (w << 8) | (b[(3 - i) * 8 + j] as u64);
            j += 1;
        }

        out[i] = w;
        i += 1;
    }

    out
}

/// Serialize little-endian words as 32 big-endian bytes.
pub(crate) const fn to_be_bytes(a: &U256Words) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;

    while i < 4 {
        let bytes = a[3 - i].to_be_bytes();
        let mut j = 0;

        while j < 8 {
            out[i * 8 + j] = bytes[j];
            j += 1;
        }

        i += 1;
    }

    out
}
