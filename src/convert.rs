#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("value {value} does not fit in {from_bits} bits")]
    OutOfRange { value: u8, from_bits: u32 },

    #[error("leftover bits are not valid zero padding")]
    InvalidPadding,
}

/// Regroups a sequence of `from_bits`-wide values into `to_bits`-wide values.
///
/// Bits are accumulated most significant first, so the first output group holds
/// the leading bits of the first input group. With `pad` any leftover bits are
/// emitted as a final group filled with zero bits, the form used when encoding
/// 8→5. Without `pad` leftover bits must be a strict zero padding: at most
/// `from_bits - 1` of them, all zero, the form used when decoding 5→8 so that
/// malformed strings with significant trailing bits are rejected.
///
/// ```
/// # use nbech32::convert::convert_bits;
/// let symbols = convert_bits(&[0xff], 8, 5, true).unwrap();
/// assert_eq!(symbols, [31, 28]);
/// assert_eq!(convert_bits(&symbols, 5, 8, false).unwrap(), [0xff]);
/// ```
pub fn convert_bits(
    input: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertError> {
    // u32 accumulator, wider than the 15 bits the 8↔5 case needs
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to_bits) - 1;
    let capacity = (input.len() * from_bits as usize + to_bits as usize - 1) / to_bits as usize;
    let mut output = Vec::with_capacity(capacity);

    for &value in input {
        if u32::from(value) >> from_bits != 0 {
            return Err(ConvertError::OutOfRange { value, from_bits });
        }
        acc = (acc << from_bits) | u32::from(value);
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            output.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            output.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits || (acc << (to_bits - bits)) & maxv != 0 {
        return Err(ConvertError::InvalidPadding);
    }

    Ok(output)
}
