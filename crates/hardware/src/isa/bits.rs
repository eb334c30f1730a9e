//! Bit-field codec.
//!
//! Text-level helpers for moving between hexadecimal words, fixed-width
//! binary strings and integers, and for cutting a binary string into the
//! fields of an instruction format. The decoder's text path
//! ([`crate::isa::decode::decode_hex`]) is built on these; the word path uses
//! [`crate::isa::instruction::InstructionBits`] directly.

use crate::common::error::DecodeError;

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 32;

/// Cut points of the register format: `op | rs | rt | rd | shamt | funct`.
pub const R_LAYOUT: [usize; 7] = [0, 6, 11, 16, 21, 26, 32];

/// Cut points of the immediate format: `op | rs | rt | immediate`.
pub const I_LAYOUT: [usize; 5] = [0, 6, 11, 16, 32];

/// Cut points of the jump format: `op | target`.
pub const J_LAYOUT: [usize; 3] = [0, 6, 32];

/// Largest width any helper here handles.
const MAX_WIDTH: u32 = u64::BITS;

/// Renders hexadecimal text as a zero-padded binary string of `width` bits.
///
/// An optional `0x`/`0X` prefix and surrounding whitespace are accepted. Values
/// wider than `width` keep only their low `width` bits, the way a register
/// stores a two's-complement word; this is not an error.
///
/// # Errors
///
/// * [`DecodeError::InvalidWidth`] when `width` is 0 or above 64.
/// * [`DecodeError::MalformedHex`] when the text is empty or has a non-hex digit.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::bits::hex_to_binary;
///
/// assert_eq!(hex_to_binary("a", 8).unwrap(), "00001010");
/// assert_eq!(hex_to_binary("1ff", 8).unwrap(), "11111111");
/// ```
pub fn hex_to_binary(text: &str, width: u32) -> Result<String, DecodeError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(DecodeError::InvalidWidth(width));
    }
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(DecodeError::MalformedHex(text.to_owned()));
    }

    // Shifting left drops the high nibbles, which is exactly the wrap we want.
    let mut value: u64 = 0;
    for ch in digits.chars() {
        let digit = ch
            .to_digit(16)
            .ok_or_else(|| DecodeError::MalformedHex(text.to_owned()))?;
        value = (value << 4) | u64::from(digit);
    }

    let masked = if width == MAX_WIDTH {
        value
    } else {
        value & ((1u64 << width) - 1)
    };
    Ok(format!("{masked:0w$b}", w = width as usize))
}

/// Parses a binary string as an unsigned integer.
///
/// No modular reduction is applied; callers reinterpret the value as signed
/// when they need to.
///
/// # Errors
///
/// [`DecodeError::MalformedBinary`] when the string is empty, longer than 64
/// digits, or contains anything but `0` and `1`.
pub fn binary_to_int(bits: &str) -> Result<u64, DecodeError> {
    let malformed = || DecodeError::MalformedBinary(bits.to_owned());
    if bits.is_empty()
        || bits.len() > MAX_WIDTH as usize
        || !bits.bytes().all(|b| b == b'0' || b == b'1')
    {
        return Err(malformed());
    }
    u64::from_str_radix(bits, 2).map_err(|_| malformed())
}

/// Cuts a binary string at ascending bit offsets.
///
/// For cut points `(b0, b1, ..., bn)` returns the `n` slices
/// `[b0, b1), [b1, b2), ...`, borrowing from `bits`.
///
/// # Errors
///
/// [`DecodeError::InvalidBoundaries`] when fewer than two cut points are given,
/// a cut point decreases, or one lies past the end of the string.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::bits::{J_LAYOUT, slice_fields};
///
/// let bits = "00001000000100000000000000000011";
/// let fields = slice_fields(bits, &J_LAYOUT).unwrap();
/// assert_eq!(fields, ["000010", "00000100000000000000000011"]);
/// ```
pub fn slice_fields<'a>(bits: &'a str, boundaries: &[usize]) -> Result<Vec<&'a str>, DecodeError> {
    let invalid = || DecodeError::InvalidBoundaries {
        boundaries: boundaries.to_vec(),
        len: bits.len(),
    };
    if boundaries.len() < 2 {
        return Err(invalid());
    }
    boundaries
        .windows(2)
        .map(|pair| match *pair {
            [begin, end] if begin <= end => bits.get(begin..end).ok_or_else(invalid),
            _ => Err(invalid()),
        })
        .collect()
}

/// Parses one hexadecimal instruction word.
///
/// Goes through [`hex_to_binary`] and [`binary_to_int`], so over-long input
/// wraps to its low 32 bits.
///
/// # Errors
///
/// [`DecodeError::MalformedHex`] when the text is not hexadecimal.
pub fn parse_word(text: &str) -> Result<u32, DecodeError> {
    let bits = hex_to_binary(text, WORD_BITS)?;
    binary_to_int(&bits).map(|value| value as u32)
}
