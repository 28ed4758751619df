// Bit-field framework for EEP payloads
// Flag bits, scaled readings and multi-byte fields inside fixed-length data

pub mod bits;
pub mod elements;
pub mod parser;

pub use bits::{bit, bits, linear_scale, linear_unscale, set_bit};
pub use elements::{read_be, read_u16_be, read_u24_be, read_u32_be, write_be, ElementError};
pub use parser::{bytes_to_hex, hex_to_bytes, parse_eep_id, parse_hex_bytes};
