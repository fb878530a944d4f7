#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod constants;
mod dev;
mod error;
mod field;
mod fq;
mod limbs;

pub use crate::{
    constants::MODULUS_HEX,
    error::{Error, Result},
    field::FieldElement,
    fq::{FQ_BYTES, Fq, FqBytes},
};
pub use bigint;
pub use ff;
pub use rand_core;
pub use subtle;
pub use zeroize;
