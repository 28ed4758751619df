// Big-endian byte-range access inside a telegram payload
// A field that spans more than one data byte is read as one unsigned integer

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Invalid field width: {0} bytes (must be 1-4)")]
    InvalidWidth(usize),

    #[error("Value {value:#x} does not fit in {width} bytes")]
    ValueTooLarge { value: u32, width: usize },
}

pub type Result<T> = std::result::Result<T, ElementError>;

fn check_range(data_len: usize, offset: usize, width: usize) -> Result<()> {
    if width == 0 || width > 4 {
        return Err(ElementError::InvalidWidth(width));
    }

    let end = offset + width;
    if end > data_len {
        return Err(ElementError::InsufficientData {
            expected: end,
            actual: data_len,
        });
    }

    Ok(())
}

/// Read `width` bytes starting at `offset` as a big-endian unsigned integer
pub fn read_be(data: &[u8], offset: usize, width: usize) -> Result<u32> {
    check_range(data.len(), offset, width)?;

    Ok(data[offset..offset + width]
        .iter()
        .fold(0u32, |acc, &byte| (acc << 8) | byte as u32))
}

/// Write `value` as a big-endian unsigned integer of `width` bytes at `offset`
pub fn write_be(data: &mut [u8], offset: usize, width: usize, value: u32) -> Result<()> {
    check_range(data.len(), offset, width)?;

    if width < 4 && value >> (width * 8) != 0 {
        return Err(ElementError::ValueTooLarge { value, width });
    }

    let bytes = value.to_be_bytes();
    data[offset..offset + width].copy_from_slice(&bytes[4 - width..]);
    Ok(())
}

/// Read a u16 in big-endian format
pub fn read_u16_be(data: &[u8]) -> Result<u16> {
    read_be(data, 0, 2).map(|v| v as u16)
}

/// Read a u24 (3 bytes) in big-endian format
pub fn read_u24_be(data: &[u8]) -> Result<u32> {
    read_be(data, 0, 3)
}

/// Read a u32 in big-endian format
pub fn read_u32_be(data: &[u8]) -> Result<u32> {
    read_be(data, 0, 4)
}
