#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod dev;
mod monty;
mod uint;

pub use crate::{
    monty::{MontyFieldElement, MontyParams},
    uint::{uint_bits, uint_from_be_slice, uint_write_be_bytes},
};
pub use bigint::{self, Limb, Uint, WideWord, Word};
pub use ff::{self, Field, PrimeField};
pub use rand_core;
pub use subtle;
pub use zeroize;
