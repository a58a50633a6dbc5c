//! Hexbox - Keyed hex-armored text and file transformation
//!
//! A keystream XOR transform wrapped in a lowercase-hex armored form. The
//! transform is self-inverse and deliberately demo-grade: it satisfies a
//! reversible round-trip contract, not a confidentiality one.

#![forbid(unsafe_code)]

pub mod error;
pub mod file_ops;
pub mod hexarmor;
pub mod keyreader;
pub mod streamcrypt;
pub mod textcrypt;
