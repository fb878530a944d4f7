//! Base field element of alt-bn128, stored in Montgomery form.
//!
//! An element with canonical value `a` is stored as `n = a * R mod p`, where `R = 2^256`.
//! The stored value is always fully reduced into `[0, p)`, so equality of elements is
//! equality of their stored words.

mod sqrt;

use crate::{
    Error, FieldElement, Result,
    constants::{self, FACTOR, MASK, MODULUS, MODULUS_BITS, MODULUS_HEX, MODULUS_MINUS_2, R2, R3},
    limbs::{self, U256Words, U512Words},
};
use bigint::{ArrayEncoding, Limb, U256, Uint};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Deref, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Size of a fixed-width big endian encoding of a field element.
pub const FQ_BYTES: usize = 32;

/// Montgomery reduction (REDC): returns `x * R^{-1} mod p`.
///
/// ```text
/// t = (x * FACTOR) & MASK
/// u = (t * p + x) >> 256
/// return u < p ? u : u - p
/// ```
///
/// Requires `x < R * p`, which holds for the product of any two values below `p` and for any
/// 256-bit value multiplied by `R^2 mod p`. The result is always in `[0, p)`.
pub(crate) const fn redc(x: &U512Words) -> U256Words {
    // Only the low half of `x` contributes to `x * FACTOR mod R`.
    let t = limbs::and(
        &limbs::lo(&limbs::mul_wide(&limbs::lo(x), &FACTOR)),
        &MASK,
    );

    // t * p ≡ -x (mod R), so the low half of the sum is zero and the shift is exact.
    let (sum, carry) = limbs::add_wide(&limbs::mul_wide(&t, &MODULUS), x);
    debug_assert!(carry == 0);

    // u < 2p
    limbs::sub_if_ge(&limbs::hi(&sum), 0, &MODULUS)
}

/// Convert any 256-bit integer `a` into Montgomery form: `REDC(a * R^2) = a * R mod p`.
#[inline]
pub(crate) const fn to_montgomery(a: &U256Words) -> U256Words {
    redc(&limbs::mul_wide(a, &R2))
}

/// Convert `n = a * R mod p` back to the canonical value `a`.
#[inline]
pub(crate) const fn from_montgomery(n: &U256Words) -> U256Words {
    redc(&limbs::widen(n))
}

/// Raw modular inverse `x^{-1} mod p` of a non-zero integer below `p`, by Fermat's little
/// theorem. Zero maps to zero.
const fn modular_inverse(x: &U256Words) -> U256Words {
    Fq(to_montgomery(x))
        .pow_words(&MODULUS_MINUS_2)
        .to_canonical()
}

/// Element of the alt-bn128 base field `GF(p)`:
///
/// ```text
/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
/// ```
#[derive(Clone, Copy)]
pub struct Fq(U256Words);

impl Fq {
    /// Zero element (additive identity).
    pub const ZERO: Self = Self([0; 4]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_u64(1);

    /// Convert a `u64` into an [`Fq`].
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        Self(to_montgomery(&[w, 0, 0, 0]))
    }

    /// Convert an `i64` into an [`Fq`], mapping negative values to their residue mod `p`.
    #[inline]
    pub const fn from_i64(w: i64) -> Self {
        let abs = Self::from_u64(w.unsigned_abs());

        if w < 0 { Fq::neg(&abs) } else { abs }
    }

    /// Convert a [`U256`] into an [`Fq`], reducing it modulo `p`.
    #[inline]
    pub fn from_uint_reduced(uint: &U256) -> Self {
        Self(to_montgomery(&uint_to_words(uint)))
    }

    /// Convert a [`U256`] into an [`Fq`].
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_uint(uint: &U256) -> CtOption<Self> {
        Self::from_words(uint_to_words(uint))
    }

    /// Decode an [`Fq`] from its 32-byte big endian encoding.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the encoded integer is not less than `p`.
    #[inline]
    pub fn from_bytes(bytes: &[u8; FQ_BYTES]) -> CtOption<Self> {
        Self::from_words(limbs::from_be_bytes(bytes))
    }

    /// Decode an [`Fq`] from a big endian byte slice.
    ///
    /// Slice is expected to be zero padded to 32 bytes.
    #[inline]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes = <&[u8; FQ_BYTES]>::try_from(slice).ok()?;
        Self::from_bytes(bytes).into()
    }

    /// Decode a big endian integer of any length, reducing it modulo `p`.
    ///
    /// Never fails. An empty slice decodes to zero.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        // 2^256 mod p
        const RADIX: Fq = Fq(R2);

        let (head, tail) = bytes.split_at(bytes.len() % FQ_BYTES);
        let mut acc = Self::from_be_chunk(head);

        for chunk in tail.chunks_exact(FQ_BYTES) {
            acc = Fq::add(&acc.multiply(&RADIX), &Self::from_be_chunk(chunk));
        }

        acc
    }

    /// Create an [`Fq`] from words which are already in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// This bypasses the conversion into Montgomery form: `words` are taken to be `a * R mod p`,
    /// not `a`. The only check performed is that `words` are less than `p`.
    #[inline]
    pub fn from_montgomery_words(words: [u64; 4]) -> CtOption<Self> {
        let in_range = Choice::from(limbs::lt(&words, &MODULUS) as u8);
        CtOption::new(Self(words), in_range)
    }

    /// Borrow the internal words, which are in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// This is not the canonical value: see [`Fq::to_canonical`].
    pub const fn as_montgomery(&self) -> &[u64; 4] {
        &self.0
    }

    /// Translate the field element out of Montgomery form, returning little endian words.
    #[inline]
    pub const fn to_canonical(&self) -> [u64; 4] {
        from_montgomery(&self.0)
    }

    /// Returns the minimal-length big endian encoding of the canonical value.
    ///
    /// Zero encodes as an empty byte string.
    #[inline]
    pub const fn to_bytes(&self) -> FqBytes {
        FqBytes::new(self.to_be_bytes())
    }

    /// Returns the 32-byte zero padded big endian encoding of the canonical value.
    #[inline]
    pub const fn to_be_bytes(&self) -> [u8; FQ_BYTES] {
        limbs::to_be_bytes(&self.to_canonical())
    }

    /// Determine if this field element is zero.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Determine if both the internal words and the canonical value they decode to are less
    /// than `p`.
    ///
    /// Always true for elements built by this crate's constructors.
    pub fn is_valid(&self) -> Choice {
        let words_in_range = limbs::lt(&self.0, &MODULUS);
        let canonical_in_range = limbs::lt(&self.to_canonical(), &MODULUS);
        Choice::from((words_in_range & canonical_in_range) as u8)
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = limbs::add(&self.0, &rhs.0);
        Self(limbs::sub_if_ge(&sum, carry, &MODULUS))
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = limbs::sub(&self.0, &rhs.0);

        // borrow is a mask selecting the modulus on underflow
        let (w, _) = limbs::add(&diff, &limbs::and(&MODULUS, &[borrow; 4]));
        Self(w)
    }

    /// Multiply elements.
    ///
    /// `(aR)(bR) = abR^2`, and one reduction yields `abR`.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self(redc(&limbs::mul_wide(&self.0, &rhs.0)))
    }

    /// Multiply by a small signed integer.
    ///
    /// The factor is the field element of the residue `k mod p`, so `a.mul_small(3) == a + a + a`.
    #[inline]
    pub const fn mul_small(&self, k: i64) -> Self {
        self.multiply(&Self::from_i64(k))
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Fq::sub(&Self::ZERO, self)
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// The raw inverse of the stored words is `(aR)^{-1} = a^{-1} R^{-1}`; one reduction of its
    /// product with `R^3` yields `a^{-1} R`.
    pub fn invert(&self) -> CtOption<Self> {
        let inv = redc(&limbs::mul_wide(&modular_inverse(&self.0), &R3));
        CtOption::new(Self(inv), !self.is_zero())
    }

    /// Compute `self / rhs`.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Option::<Self>::from(rhs.invert())
            .map(|inv| self.multiply(&inv))
            .ok_or(Error::DivisionByZero)
    }

    /// Returns `self^exp`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    pub const fn power(&self, exp: u64) -> Self {
        self.pow_words(&[exp])
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub const fn pow_vartime<const RHS_LIMBS: usize>(&self, exp: &Uint<RHS_LIMBS>) -> Self {
        let words = exp.as_words();
        let mut i = RHS_LIMBS;

        // Ignore "leading" zeros (in little endian)
        while i > 0 && words[i - 1] == 0 {
            i -= 1;
        }

        let mut res = Self::ONE;

        while i > 0 {
            i -= 1;
            let mut j = Limb::BITS;

            while j > 0 {
                j -= 1;
                res = res.square();

                if ((words[i] >> j) & 1) == 1 {
                    res = res.multiply(self);
                }
            }
        }

        res
    }

    /// Returns `self^exp`, where `exp` is a big endian integer of any length.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    pub fn pow_be_bytes_vartime(&self, exp: &[u8]) -> Self {
        let mut res = Self::ONE;

        for byte in exp.iter().skip_while(|&&b| b == 0) {
            for j in (0..8).rev() {
                res = res.square();

                if (byte >> j) & 1 == 1 {
                    res = res.multiply(self);
                }
            }
        }

        res
    }

    /// Square-and-multiply over little endian 64-bit exponent words, most significant bit first.
    pub(crate) const fn pow_words<const N: usize>(&self, exp: &[u64; N]) -> Self {
        let mut res = Self::ONE;
        let mut i = N;

        while i > 0 {
            i -= 1;
            let mut j = 64;

            while j > 0 {
                j -= 1;
                res = res.square();

                if ((exp[i] >> j) & 1) == 1 {
                    res = res.multiply(self);
                }
            }
        }

        res
    }

    /// Decode at most 32 big endian bytes, reducing modulo `p`.
    fn from_be_chunk(chunk: &[u8]) -> Self {
        debug_assert!(chunk.len() <= FQ_BYTES);
        let mut padded = [0u8; FQ_BYTES];
        padded[FQ_BYTES - chunk.len()..].copy_from_slice(chunk);
        Self(to_montgomery(&limbs::from_be_bytes(&padded)))
    }

    /// Checked conversion of canonical words into Montgomery form.
    fn from_words(words: U256Words) -> CtOption<Self> {
        let in_range = Choice::from(limbs::lt(&words, &MODULUS) as u8);
        CtOption::new(Self(to_montgomery(&words)), in_range)
    }
}

fn uint_to_words(uint: &U256) -> U256Words {
    let mut bytes = [0u8; FQ_BYTES];
    bytes.copy_from_slice(&uint.to_be_byte_array());
    limbs::from_be_bytes(&bytes)
}

/// Minimal-length big endian encoding of a field element's canonical value.
///
/// Dereferences to the encoded bytes, with no leading zero bytes. Zero is empty.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct FqBytes {
    padded: [u8; FQ_BYTES],
    start: usize,
}

impl FqBytes {
    const fn new(padded: [u8; FQ_BYTES]) -> Self {
        let mut start = 0;

        while start < FQ_BYTES && padded[start] == 0 {
            start += 1;
        }

        Self { padded, start }
    }

    /// Borrow the encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.padded[self.start..]
    }

    /// Left-pad the encoding with zeros to 32 bytes.
    pub const fn to_padded(&self) -> [u8; FQ_BYTES] {
        self.padded
    }
}

impl AsRef<[u8]> for FqBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Deref for FqBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for FqBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FqBytes(")?;
        for byte in self.as_slice() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

//
// Capability contract
//

impl FieldElement for Fq {
    type Bytes = FqBytes;

    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> Choice {
        Fq::is_zero(self)
    }

    fn is_valid(&self) -> Choice {
        Fq::is_valid(self)
    }

    fn add(&self, rhs: &Self) -> Self {
        Fq::add(self, rhs)
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Fq::sub(self, rhs)
    }

    fn multiply_scalar(&self, k: i64) -> Self {
        self.mul_small(k)
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Fq::multiply(self, rhs)
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        Fq::divide(self, rhs)
    }

    fn negate(&self) -> Self {
        Fq::neg(self)
    }

    fn power(&self, exp: u64) -> Self {
        Fq::power(self, exp)
    }

    fn power_uint<const LIMBS: usize>(&self, exp: &Uint<LIMBS>) -> Self {
        self.pow_vartime(exp)
    }

    fn to_bytes(&self) -> FqBytes {
        Fq::to_bytes(self)
    }
}

//
// `ff` crate trait impls
//

impl Field for Fq {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn try_from_rng<R: rand_core::TryRng + ?Sized>(
        rng: &mut R,
    ) -> core::result::Result<Self, R::Error> {
        let mut bytes = [0u8; FQ_BYTES];

        loop {
            rng.try_fill_bytes(&mut bytes)?;

            // p is 254 bits: clearing the top two bits keeps the sample uniform
            bytes[0] &= 0x3f;

            if let Some(fe) = Self::from_bytes(&bytes).into() {
                return Ok(fe);
            }
        }
    }

    fn is_zero(&self) -> Choice {
        Self::ZERO.ct_eq(self)
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl PrimeField for Fq {
    type Repr = [u8; FQ_BYTES];

    const MODULUS: &'static str = MODULUS_HEX;
    const NUM_BITS: u32 = MODULUS_BITS;
    const CAPACITY: u32 = MODULUS_BITS - 1;
    const TWO_INV: Self = Self(to_montgomery(&constants::TWO_INV));
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(3);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self = Fq::neg(&Self::ONE);
    const ROOT_OF_UNITY_INV: Self = Fq::neg(&Self::ONE);
    const DELTA: Self = Self::from_u64(9);

    fn from_repr(bytes: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_be_bytes()
    }

    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! fq_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl $op for Fq {
            type Output = Fq;

            #[inline]
            fn $func(self, rhs: Fq) -> Fq {
                Fq::$inner_func(&self, &rhs)
            }
        }

        impl $op<&Fq> for Fq {
            type Output = Fq;

            #[inline]
            fn $func(self, rhs: &Fq) -> Fq {
                Fq::$inner_func(&self, rhs)
            }
        }

        impl $op<&Fq> for &Fq {
            type Output = Fq;

            #[inline]
            fn $func(self, rhs: &Fq) -> Fq {
                Fq::$inner_func(self, rhs)
            }
        }
    };
}

fq_op!(Add, add, add);
fq_op!(Sub, sub, sub);
fq_op!(Mul, mul, multiply);

/// Emit a `core::ops` assignment trait wrapper for a binary operator.
macro_rules! fq_op_assign {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl $op for Fq {
            #[inline]
            fn $func(&mut self, rhs: Fq) {
                *self = Fq::$inner_func(self, &rhs);
            }
        }

        impl $op<&Fq> for Fq {
            #[inline]
            fn $func(&mut self, rhs: &Fq) {
                *self = Fq::$inner_func(self, rhs);
            }
        }
    };
}

fq_op_assign!(AddAssign, add_assign, add);
fq_op_assign!(SubAssign, sub_assign, sub);
fq_op_assign!(MulAssign, mul_assign, multiply);

impl Neg for Fq {
    type Output = Fq;

    #[inline]
    fn neg(self) -> Fq {
        Fq::neg(&self)
    }
}

impl Neg for &Fq {
    type Output = Fq;

    #[inline]
    fn neg(self) -> Fq {
        Fq::neg(self)
    }
}

impl Sum for Fq {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a> Sum<&'a Fq> for Fq {
    fn sum<I: Iterator<Item = &'a Fq>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fq {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a> Product<&'a Fq> for Fq {
    fn product<I: Iterator<Item = &'a Fq>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl ConditionallySelectable for Fq {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for Fq {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

//
// `core::fmt` trait impls
//

impl fmt::Debug for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq(0x{:x})", self)
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

//
// Miscellaneous trait impls
//

impl Default for Fq {
    fn default() -> Self {
        Self::ZERO
    }
}

impl zeroize::DefaultIsZeroes for Fq {}

impl Eq for Fq {}
impl PartialEq for Fq {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl Hash for Fq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Ord for Fq {
    fn cmp(&self, other: &Self) -> Ordering {
        limbs::cmp_vartime(&self.to_canonical(), &other.to_canonical())
    }
}

impl PartialOrd for Fq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for Fq {
    #[inline]
    fn from(n: u32) -> Fq {
        Self::from_u64(n.into())
    }
}

impl From<u64> for Fq {
    #[inline]
    fn from(n: u64) -> Fq {
        Self::from_u64(n)
    }
}

impl From<u128> for Fq {
    fn from(n: u128) -> Fq {
        Self(to_montgomery(&[n as u64, (n >> 64) as u64, 0, 0]))
    }
}

impl From<i64> for Fq {
    #[inline]
    fn from(n: i64) -> Fq {
        Self::from_i64(n)
    }
}

impl From<Fq> for [u8; FQ_BYTES] {
    fn from(fe: Fq) -> Self {
        fe.to_be_bytes()
    }
}

impl From<Fq> for U256 {
    fn from(fe: Fq) -> U256 {
        U256::from(&fe)
    }
}

impl From<&Fq> for U256 {
    fn from(fe: &Fq) -> U256 {
        U256::from_be_slice(&fe.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for Fq {
    type Error = Error;

    /// Strict decoding of a 32-byte big endian encoding, as found in precompile input words.
    fn try_from(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; FQ_BYTES]>::try_from(slice).map_err(|_| Error::InvalidLength)?;
        Option::from(Self::from_bytes(bytes)).ok_or(Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::{FQ_BYTES, Fq, from_montgomery, redc, to_montgomery};
    use crate::{
        Error, FieldElement,
        constants::MODULUS,
        limbs::{U256Words, U512Words},
        test_field_element, test_primefield_constants,
    };
    use bigint::U256;
    use hex_literal::hex;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    test_field_element!(Fq);
    test_primefield_constants!(Fq);

    fn modulus() -> BigUint {
        words_to_biguint(&MODULUS)
    }

    fn words_to_biguint(words: &[u64]) -> BigUint {
        words
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &w| (acc << 64u32) + w)
    }

    fn biguint_to_words<const N: usize>(x: &BigUint) -> [u64; N] {
        let mut out = [0u64; N];
        for (o, d) in out.iter_mut().zip(x.to_u64_digits()) {
            *o = d;
        }
        out
    }

    fn to_biguint(fe: &Fq) -> BigUint {
        BigUint::from_bytes_be(&fe.to_be_bytes())
    }

    fn from_biguint(x: &BigUint) -> Fq {
        Fq::from_be_bytes_reduced(&x.to_bytes_be())
    }

    /// R^{-1} mod p
    fn r_inv() -> BigUint {
        let p = modulus();
        (BigUint::one() << 256u32).modpow(&(&p - 2u32), &p)
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(Fq::ZERO.as_montgomery(), &[0; 4]);
        assert_eq!(Fq::ONE.to_canonical(), [1, 0, 0, 0]);
        assert_eq!(<Fq as FieldElement>::zero(), Fq::from_u64(0));
        assert_eq!(<Fq as FieldElement>::one(), Fq::from_u64(1));
    }

    #[test]
    fn add_small() {
        assert_eq!(Fq::from_u64(5) + Fq::from_u64(7), Fq::from_u64(12));
    }

    #[test]
    fn add_wraps_at_modulus() {
        let p_minus_one = Fq::from_i64(-1);
        assert_eq!(p_minus_one + Fq::ONE, Fq::ZERO);
        assert_eq!(
            p_minus_one.to_canonical(),
            [MODULUS[0] - 1, MODULUS[1], MODULUS[2], MODULUS[3]]
        );
    }

    #[test]
    fn mul_small() {
        assert_eq!(Fq::from_u64(3) * Fq::from_u64(4), Fq::from_u64(12));
        assert_eq!(Fq::from_u64(3).mul_small(-4), -Fq::from_u64(12));
    }

    #[test]
    fn divide_small() {
        assert_eq!(Fq::from_u64(6).divide(&Fq::from_u64(3)), Ok(Fq::from_u64(2)));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(Fq::ONE.divide(&Fq::ZERO), Err(Error::DivisionByZero));
        assert!(bool::from(Fq::ZERO.invert().is_none()));
    }

    #[test]
    fn power_small() {
        assert_eq!(Fq::from_u64(2).power(10), Fq::from_u64(1024));
        assert_eq!(Fq::from_u64(2).pow_vartime(&U256::from_u64(10)), Fq::from_u64(1024));
        assert_eq!(Fq::from_u64(2).pow_be_bytes_vartime(&[0, 0, 10]), Fq::from_u64(1024));
        assert_eq!(Fq::from_u64(2).pow_be_bytes_vartime(&[]), Fq::ONE);
    }

    #[test]
    fn negate_then_add() {
        assert_eq!(Fq::from_u64(5).neg() + Fq::from_u64(5), Fq::ZERO);
        assert_eq!(-Fq::ZERO, Fq::ZERO);
    }

    #[test]
    fn fermat_little_theorem() {
        // a^(p-1) == 1 for a != 0
        let p_minus_one = (modulus() - 1u32).to_bytes_be();
        assert_eq!(Fq::from_u64(7).pow_be_bytes_vartime(&p_minus_one), Fq::ONE);
        assert_eq!(
            Fq::from_u64(7).pow_be_bytes_vartime(&modulus().to_bytes_be()),
            Fq::from_u64(7)
        );
    }

    #[test]
    fn to_bytes_minimal() {
        assert!(Fq::ZERO.to_bytes().is_empty());
        assert_eq!(Fq::from_u64(256).to_bytes().as_ref(), &[0x01, 0x00]);
        assert_eq!(Fq::ONE.to_bytes().as_ref(), &[0x01]);
        assert_eq!(Fq::from_u64(256).to_bytes().to_padded()[30..], [0x01, 0x00]);
    }

    #[test]
    fn to_bytes_is_canonical_not_montgomery() {
        // ONE is stored as R mod p, but serializes as 1
        assert_ne!(Fq::ONE.as_montgomery(), &[1, 0, 0, 0]);
        assert_eq!(
            Fq::ONE.to_be_bytes(),
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn from_bytes_rejects_modulus() {
        let p = hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
        assert!(bool::from(Fq::from_bytes(&p).is_none()));
        assert_eq!(Fq::try_from(&p[..]), Err(Error::Overflow));

        let p_minus_one = hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46");
        assert_eq!(Fq::from_bytes(&p_minus_one).unwrap(), -Fq::ONE);
        assert_eq!(Fq::try_from(&p_minus_one[..]), Ok(-Fq::ONE));
    }

    #[test]
    fn from_slice_length() {
        assert_eq!(Fq::from_slice(&[0u8; 31]), None);
        assert_eq!(Fq::from_slice(&[0u8; FQ_BYTES]), Some(Fq::ZERO));
        assert_eq!(Fq::try_from(&[1u8; 33][..]), Err(Error::InvalidLength));
    }

    #[test]
    fn from_be_bytes_reduced_wraps() {
        let p = hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
        assert_eq!(Fq::from_be_bytes_reduced(&p), Fq::ZERO);
        assert_eq!(Fq::from_be_bytes_reduced(&[]), Fq::ZERO);
        assert_eq!(Fq::from_be_bytes_reduced(&[0xff; 32]), Fq::from_uint_reduced(&U256::MAX));

        // 2^256 = R mod p
        let mut r = [0u8; 33];
        r[0] = 1;
        assert_eq!(Fq::from_be_bytes_reduced(&r), Fq::from_u64(2).power(256));
    }

    #[test]
    fn from_uint_checked() {
        let p = U256::from_be_hex(crate::MODULUS_HEX);
        assert!(bool::from(Fq::from_uint(&p).is_none()));
        assert_eq!(Fq::from_uint_reduced(&p), Fq::ZERO);
        assert_eq!(Fq::from_uint(&U256::from_u64(42)).unwrap(), Fq::from_u64(42));
        assert_eq!(U256::from(Fq::from_u64(42)), U256::from_u64(42));
    }

    #[test]
    fn from_i64_residues() {
        assert_eq!(Fq::from_i64(-1), -Fq::ONE);
        assert_eq!(Fq::from_i64(i64::MIN), -Fq::from_u64(1 << 63));
        assert_eq!(Fq::from(-12i64) + Fq::from(12u32), Fq::ZERO);
        assert_eq!(Fq::from(u128::MAX), Fq::from_u64(2).power(128) - Fq::ONE);
    }

    #[test]
    fn const_evaluation() {
        const MINUS_TWO: Fq = Fq::from_i64(-2);
        const MINUS_FIVE: Fq = Fq::neg(&Fq::from_u64(5));
        const SIX: Fq = Fq::mul_small(&Fq::from_u64(2), 3);

        assert_eq!(MINUS_TWO + Fq::from_u64(2), Fq::ZERO);
        assert_eq!(MINUS_FIVE, -Fq::from_u64(5));
        assert_eq!(SIX, Fq::from_u64(6));
        assert_eq!(<Fq as ff::PrimeField>::ROOT_OF_UNITY, -Fq::ONE);
        assert_eq!(<Fq as ff::PrimeField>::ROOT_OF_UNITY_INV, -Fq::ONE);
    }

    #[test]
    fn from_montgomery_words_rejects_out_of_range() {
        assert!(bool::from(Fq::from_montgomery_words(MODULUS).is_none()));
        let one = Fq::from_montgomery_words(*Fq::ONE.as_montgomery()).unwrap();
        assert_eq!(one, Fq::ONE);
    }

    #[test]
    fn validity() {
        assert!(bool::from(Fq::from_u64(99).is_valid()));

        // A representation that skipped the checked constructors
        let forged = Fq(MODULUS);
        assert!(!bool::from(forged.is_valid()));
    }

    #[test]
    fn montgomery_round_trip_edges() {
        for a in [[0u64; 4], [1, 0, 0, 0], [MODULUS[0] - 1, MODULUS[1], MODULUS[2], MODULUS[3]]] {
            assert_eq!(from_montgomery(&to_montgomery(&a)), a);
        }
    }

    #[test]
    fn redc_of_largest_input() {
        // x = R * p - 1 is the largest admissible input
        let x = (modulus() << 256u32) - 1u32;
        let expected = (&x * r_inv()) % modulus();
        let words: U512Words = biguint_to_words(&x);
        assert_eq!(words_to_biguint(&redc(&words)), expected);
    }

    #[test]
    fn ordering_uses_canonical_value() {
        assert!(Fq::from_u64(2) < Fq::from_u64(3));
        assert!(Fq::from_i64(-1) > Fq::from_u64(u64::MAX));
    }

    #[test]
    fn sum_and_product() {
        let xs = [Fq::from_u64(2), Fq::from_u64(3), Fq::from_u64(4)];
        assert_eq!(xs.iter().sum::<Fq>(), Fq::from_u64(9));
        assert_eq!(xs.iter().product::<Fq>(), Fq::from_u64(24));
        assert_eq!(core::iter::empty::<Fq>().product::<Fq>(), Fq::ONE);
    }

    #[test]
    fn debug_prints_canonical_value() {
        use std::format;

        assert_eq!(
            format!("{:?}", Fq::from_u64(0xabc)),
            "Fq(0x0000000000000000000000000000000000000000000000000000000000000abc)"
        );
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> Fq {
            from_biguint(&BigUint::from_bytes_be(&bytes))
        }
    }

    prop_compose! {
        /// Integer in `[0, R * p)`.
        fn redc_input()(bytes in any::<[u8; 64]>()) -> U512Words {
            let x = BigUint::from_bytes_be(&bytes) % (modulus() << 256u32);
            biguint_to_words(&x)
        }
    }

    proptest! {
        #[test]
        fn fuzzy_round_trip(bytes in any::<[u8; 32]>()) {
            let a = BigUint::from_bytes_be(&bytes) % modulus();
            let words: U256Words = biguint_to_words(&a);
            let fe = Fq::from_montgomery_words(to_montgomery(&words)).unwrap();
            prop_assert_eq!(fe.to_canonical(), words);
            prop_assert_eq!(to_biguint(&from_biguint(&a)), a);
        }

        #[test]
        fn fuzzy_redc(x in redc_input()) {
            let expected = (words_to_biguint(&x) * r_inv()) % modulus();
            prop_assert_eq!(words_to_biguint(&redc(&x)), expected);
        }

        #[test]
        fn fuzzy_reduced_decoding(bytes in proptest::collection::vec(any::<u8>(), 0..100)) {
            let expected = BigUint::from_bytes_be(&bytes) % modulus();
            prop_assert_eq!(to_biguint(&Fq::from_be_bytes_reduced(&bytes)), expected);
        }

        #[test]
        fn fuzzy_add(a in field_element(), b in field_element()) {
            let res = (to_biguint(&a) + to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a + b)), res);
        }

        #[test]
        fn fuzzy_sub(a in field_element(), b in field_element()) {
            let res = (to_biguint(&a) + modulus() - to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a - b)), res);
        }

        #[test]
        fn fuzzy_mul(a in field_element(), b in field_element()) {
            let res = (to_biguint(&a) * to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a * b)), res);
        }

        #[test]
        fn fuzzy_negate(a in field_element()) {
            let m = modulus();
            let res = (&m - to_biguint(&a)) % &m;
            prop_assert_eq!(to_biguint(&-a), res);
        }

        #[test]
        fn fuzzy_divide(a in field_element(), b in field_element()) {
            prop_assume!(!bool::from(b.is_zero()));
            let m = modulus();
            let b_inv = to_biguint(&b).modpow(&(&m - 2u32), &m);
            let res = (to_biguint(&a) * b_inv) % &m;
            prop_assert_eq!(to_biguint(&a.divide(&b).unwrap()), res);
        }

        #[test]
        fn fuzzy_power(a in field_element(), e in any::<u64>()) {
            let res = to_biguint(&a).modpow(&BigUint::from(e), &modulus());
            prop_assert_eq!(to_biguint(&a.power(e)), res);
        }

        #[test]
        fn fuzzy_power_wide(a in field_element(), e in any::<[u8; 40]>()) {
            let res = to_biguint(&a).modpow(&BigUint::from_bytes_be(&e), &modulus());
            prop_assert_eq!(to_biguint(&a.pow_be_bytes_vartime(&e)), res);
        }

        #[test]
        fn fuzzy_sqrt(a in field_element()) {
            let square = a.square();
            let root = square.sqrt().unwrap();
            prop_assert!(root == a || root == -a);
        }
    }
}
