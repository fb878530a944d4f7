//! Arithmetic contract shared by the base field and any field built on top of it.

use crate::Result;
use bigint::Uint;
use core::fmt;
use subtle::Choice;

/// Operations every field element type provides.
///
/// Extension fields (`Fq2`, `Fq6`, `Fq12`) are expected to implement this trait by delegating
/// to their base field's implementation. All values are immutable: every operation returns a new
/// element.
pub trait FieldElement: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Serialized form returned by [`FieldElement::to_bytes`].
    type Bytes: AsRef<[u8]>;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Is this the additive identity?
    fn is_zero(&self) -> Choice;

    /// Does this element decode to a canonical value less than the modulus?
    fn is_valid(&self) -> Choice;

    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`
    fn subtract(&self, rhs: &Self) -> Self;

    /// Multiply by a small signed integer, interpreted modulo the field characteristic.
    fn multiply_scalar(&self, k: i64) -> Self;

    /// `self * rhs`
    fn multiply(&self, rhs: &Self) -> Self;

    /// `self / rhs`
    ///
    /// Returns [`Error::DivisionByZero`](crate::Error::DivisionByZero) when `rhs` is zero.
    fn divide(&self, rhs: &Self) -> Result<Self>;

    /// `-self`
    fn negate(&self) -> Self;

    /// `self^exp`
    fn power(&self, exp: u64) -> Self;

    /// `self^exp` for an exponent of arbitrary width.
    ///
    /// Runtime is linear in the width of `exp`; callers handling untrusted exponents should bound
    /// their size.
    fn power_uint<const LIMBS: usize>(&self, exp: &Uint<LIMBS>) -> Self;

    /// Canonical serialization.
    fn to_bytes(&self) -> Self::Bytes;
}
