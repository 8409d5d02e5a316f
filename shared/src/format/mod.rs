//! Pure text formatters for the Indonesian government register
//!
//! - [`terbilang`]: spelled-out numerals and thousands grouping
//! - [`tanggal`]: calendar date renderings with dot placeholders for unset

pub mod tanggal;
pub mod terbilang;
