//! Modular square root, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::Fq;
use crate::constants::MODULUS_PLUS_1_OVER_4;
use subtle::{ConstantTimeEq, CtOption};

impl Fq {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// Shanks algorithm for `p ≡ 3 (mod 4)`: the candidate is `self^((p + 1) / 4)`, which
    /// takes a single exponentiation with a fixed exponent.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_words(&MODULUS_PLUS_1_OVER_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }
}
