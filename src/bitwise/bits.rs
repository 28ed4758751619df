// Single-bit access and linear scaling of raw sensor readings

/// Test bit `index` of `byte` (0 = least significant)
pub fn bit(byte: u8, index: u8) -> bool {
    let mask = 1u8 << index;
    (byte & mask) != 0
}

/// Return `byte` with bit `index` set or cleared
pub fn set_bit(byte: u8, index: u8, value: bool) -> u8 {
    let mask = 1u8 << index;
    if value {
        byte | mask
    } else {
        byte & !mask
    }
}

/// Extract `width` bits starting at bit `offset` (counted from the LSB)
/// Example: bits(0b1011_0000, 4, 3) -> 0b011
pub fn bits(byte: u8, offset: u8, width: u8) -> u8 {
    let mask = ((1u16 << width) - 1) as u8;
    (byte >> offset) & mask
}

/// Map a raw integer reading onto a physical range.
///
/// `raw` is clamped into the raw bounds first. The raw range may be inverted
/// (`raw_min > raw_max`) for sensors that count down as the measured value rises.
pub fn linear_scale(raw: u32, raw_min: u32, raw_max: u32, phys_min: f64, phys_max: f64) -> f64 {
    if raw_min == raw_max {
        return phys_min;
    }

    let (lo, hi) = (raw_min.min(raw_max), raw_min.max(raw_max));
    let raw = raw.clamp(lo, hi) as f64;

    let raw_min = raw_min as f64;
    let raw_max = raw_max as f64;
    phys_min + (raw - raw_min) * (phys_max - phys_min) / (raw_max - raw_min)
}

/// Inverse of [`linear_scale`]: quantize a physical value back to the nearest raw reading
pub fn linear_unscale(value: f64, raw_min: u32, raw_max: u32, phys_min: f64, phys_max: f64) -> u32 {
    if phys_min == phys_max {
        return raw_min;
    }

    let (lo, hi) = (phys_min.min(phys_max), phys_min.max(phys_max));
    let value = if value.is_nan() { lo } else { value.clamp(lo, hi) };

    let raw_min_f = raw_min as f64;
    let raw_max_f = raw_max as f64;
    let raw = raw_min_f + (value - phys_min) * (raw_max_f - raw_min_f) / (phys_max - phys_min);

    raw.round() as u32
}
