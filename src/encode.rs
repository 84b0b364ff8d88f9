use crate::{
    checksum,
    convert::{convert_bits, ConvertError},
    CHARSET, SEPARATOR,
};

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("human readable part is empty")]
    EmptyHrp,

    #[error("human readable part byte {0:#04x} is outside printable ascii")]
    HrpOutOfRange(u8),

    #[error("checksum buffer of length {0} is too small, 6 bytes are needed")]
    ChecksumBufferTooSmall(usize),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Encodes `payload` into a bech32 string under the given human readable part.
///
/// `hrp` is lowercased in the output and must be non-empty printable ASCII.
///
/// ```
/// assert_eq!(nbech32::encode("a", &[]).unwrap(), "a12uel5l");
/// ```
pub fn encode(hrp: &str, payload: &[u8]) -> Result<String, EncodeError> {
    let mut checksum = [0u8; 6];
    encode_with_checksum_buf(hrp, payload, &mut checksum)
}

/// Like [`encode`] but fills the checksum symbols into the caller supplied
/// `chk_out`, which must be at least 6 bytes long. Lets hot paths reuse one
/// buffer across calls instead of allocating a fresh one per encode.
pub fn encode_with_checksum_buf(
    hrp: &str,
    payload: &[u8],
    chk_out: &mut [u8],
) -> Result<String, EncodeError> {
    let chk_len = chk_out.len();
    let chk_out: &mut [u8; 6] = chk_out
        .get_mut(..6)
        .and_then(|s| s.try_into().ok())
        .ok_or(EncodeError::ChecksumBufferTooSmall(chk_len))?;
    if hrp.is_empty() {
        return Err(EncodeError::EmptyHrp);
    }

    let mut hrp_lower = Vec::with_capacity(hrp.len());
    for b in hrp.bytes() {
        if !(0x21..=0x7e).contains(&b) {
            return Err(EncodeError::HrpOutOfRange(b));
        }
        hrp_lower.push(b.to_ascii_lowercase());
    }

    let data = convert_bits(payload, 8, 5, true)?;
    checksum::create_checksum(&hrp_lower, &data, chk_out);

    let mut ret = String::with_capacity(hrp_lower.len() + 1 + data.len() + 6);
    for &b in &hrp_lower {
        ret.push(b as char);
    }
    ret.push(SEPARATOR as char);
    for &symbol in &data {
        ret.push(CHARSET[symbol as usize] as char);
    }
    for &symbol in chk_out.iter() {
        ret.push(CHARSET[symbol as usize] as char);
    }

    log::debug!("encoded {} payload bytes under hrp {}", payload.len(), hrp);
    Ok(ret)
}
