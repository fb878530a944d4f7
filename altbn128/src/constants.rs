//! Field modulus of alt-bn128 and the Montgomery constants derived from it.
//!
//! All values are little-endian 64-bit words. The Montgomery base is `R = 2^256`, which is
//! never materialized: reduction modulo `R` is done with [`MASK`] and division by `R` is a
//! shift by four words.

use crate::limbs::U256Words;

/// Field modulus as a big-endian hexadecimal string.
pub const MODULUS_HEX: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

/// Field modulus `p`:
///
/// ```text
/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
/// ```
pub(crate) const MODULUS: U256Words = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// `R^2 mod p`, used to enter Montgomery form.
pub(crate) const R2: U256Words = [
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
];

/// `R^3 mod p`, used to carry a raw inverse back into Montgomery form.
pub(crate) const R3: U256Words = [
    0xb1cd_6daf_da15_30df,
    0x62f2_10e6_a728_3db6,
    0xef7f_0b0c_0ada_0afb,
    0x20fd_6e90_2d59_2544,
];

/// `-p^{-1} mod R`, the REDC multiplier.
pub(crate) const FACTOR: U256Words = [
    0x87d2_0782_e486_6389,
    0x9ede_7d65_1eca_6ac9,
    0xd8af_cbd0_1833_da80,
    0xf57a_22b7_9188_8c6b,
];

/// `R - 1`: AND with this is `mod R`.
pub(crate) const MASK: U256Words = [u64::MAX; 4];

/// `p - 2`, the Fermat inversion exponent.
pub(crate) const MODULUS_MINUS_2: U256Words = [
    0x3c20_8c16_d87c_fd45,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// `(p + 1) / 4`, the square root exponent for `p ≡ 3 (mod 4)`.
pub(crate) const MODULUS_PLUS_1_OVER_4: U256Words = [
    0x4f08_2305_b61f_3f52,
    0x65e0_5aa4_5a1c_72a3,
    0x6e14_116d_a060_5617,
    0x0c19_139c_b84c_680a,
];

/// `2^{-1} mod p` in canonical form.
pub(crate) const TWO_INV: U256Words = [
    0x9e10_460b_6c3e_7ea4,
    0xcbc0_b548_b438_e546,
    0xdc28_22db_40c0_ac2e,
    0x1832_2739_7098_d014,
];

/// Number of bits in the modulus.
pub(crate) const MODULUS_BITS: u32 = 254;
