// Text parsers using nom for hex payloads and profile identifiers
// Hex text is what transformations and the command line hand us

use nom::{
    bytes::complete::take_while_m_n,
    error::{Error, ErrorKind},
    IResult,
};

const SEPARATORS: &[char] = &[' ', ':', '-', '_'];

fn skip_separators(input: &str) -> &str {
    input.trim_start_matches(SEPARATORS)
}

/// Parse exactly two hex digits into a byte
pub fn parse_hex_byte(input: &str) -> IResult<&str, u8> {
    let (rest, digits) = take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit())(input)?;
    let value = u8::from_str_radix(digits, 16)
        .map_err(|_| nom::Err::Error(Error::new(input, ErrorKind::HexDigit)))?;
    Ok((rest, value))
}

/// Parse a run of hex bytes, optionally prefixed with `0x` and separated by
/// spaces, colons, dashes or underscores
pub fn parse_hex_bytes(input: &str) -> IResult<&str, Vec<u8>> {
    let trimmed = input.trim();
    let mut input = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let mut bytes = Vec::new();
    loop {
        input = skip_separators(input);
        if input.is_empty() {
            break;
        }
        let (rest, byte) = parse_hex_byte(input)?;
        bytes.push(byte);
        input = rest;
    }

    Ok((input, bytes))
}

/// Decode a complete hex string; trailing garbage is an error
pub fn hex_to_bytes(input: &str) -> Option<Vec<u8>> {
    match parse_hex_bytes(input) {
        Ok((rest, bytes)) if rest.is_empty() => Some(bytes),
        _ => None,
    }
}

/// Format bytes as contiguous upper-case hex (e.g. "A50701")
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// Parse a profile identifier such as "A5-07-01" or "A50701" into (rorg, func, type)
pub fn parse_eep_id(input: &str) -> IResult<&str, (u8, u8, u8)> {
    let (input, rorg) = parse_hex_byte(skip_separators(input))?;
    let (input, func) = parse_hex_byte(skip_separators(input))?;
    let (input, type_) = parse_hex_byte(skip_separators(input))?;
    Ok((input, (rorg, func, type_)))
}
