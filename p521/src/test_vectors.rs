//! Test vectors.

pub mod ecdh;
pub mod ecdsa;
pub mod group;
