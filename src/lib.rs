#![doc = include_str!("../README.md")]

pub mod checksum;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode, Decoded};
pub use encode::{encode, encode_with_checksum_buf};
pub use error::Error;

/// The bech32 alphabet, a bijection between 5 bit symbols and characters.
pub(crate) const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
pub(crate) const SEPARATOR: u8 = b'1';
