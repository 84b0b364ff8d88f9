use crate::{
    checksum,
    convert::{convert_bits, ConvertError},
    CHARSET, SEPARATOR,
};

/// A decoded bech32 string: the human readable part, lowercased, and the
/// recovered payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub hrp: String,
    pub payload: Vec<u8>,
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("character {0:?} is outside printable ascii")]
    CharOutOfRange(char),

    #[error("separator '1' not found")]
    MissingSeparator,

    #[error("human readable part is empty")]
    EmptyHrp,

    #[error("{0} characters after the separator, at least 6 are needed for the checksum")]
    TooShort(usize),

    #[error("character {0:?} is not part of the bech32 alphabet")]
    InvalidChar(char),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Decodes and validates a bech32 string.
///
/// Uppercase ASCII is folded to lowercase before any other check, so uppercase
/// and mixed case strings are accepted whenever their checksum verifies. The
/// separator is the last `'1'` in the string, the hrp may contain `'1'` itself.
///
/// ```
/// let decoded = nbech32::decode("A12UEL5L").unwrap();
/// assert_eq!(decoded.hrp, "a");
/// assert!(decoded.payload.is_empty());
/// ```
pub fn decode(input: &str) -> Result<Decoded, DecodeError> {
    let mut bytes = Vec::with_capacity(input.len());
    for c in input.chars() {
        if !('\u{21}'..='\u{7e}').contains(&c) {
            return Err(DecodeError::CharOutOfRange(c));
        }
        bytes.push((c as u8).to_ascii_lowercase());
    }

    let sep = bytes
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .ok_or(DecodeError::MissingSeparator)?;
    if sep == 0 {
        return Err(DecodeError::EmptyHrp);
    }
    let (hrp, body) = bytes.split_at(sep);
    let body = &body[1..];
    if body.len() < 6 {
        return Err(DecodeError::TooShort(body.len()));
    }

    let mut symbols = Vec::with_capacity(body.len());
    for &b in body {
        let symbol = CHARSET
            .iter()
            .position(|&c| c == b)
            .ok_or(DecodeError::InvalidChar(b as char))?;
        symbols.push(symbol as u8);
    }

    if !checksum::verify_checksum(hrp, &symbols) {
        return Err(DecodeError::InvalidChecksum);
    }

    let payload = convert_bits(&symbols[..symbols.len() - 6], 5, 8, false)?;
    let hrp = std::str::from_utf8(hrp)
        .expect("hrp bytes are printable ascii")
        .to_string();

    log::debug!("decoded {} payload bytes under hrp {}", payload.len(), hrp);
    Ok(Decoded { hrp, payload })
}

#[cfg(test)]
mod test {
    use super::{decode, DecodeError};

    #[test]
    fn empty_payload() {
        let decoded = decode("a12uel5l").unwrap();
        assert_eq!(decoded.hrp, "a");
        assert!(decoded.payload.is_empty());
    }

    #[test]
    fn known_payload() {
        let decoded = decode("test1m6kmamca6j3yk").unwrap();
        assert_eq!(decoded.hrp, "test");
        assert_eq!(decoded.payload, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(decode("A12UEL5L").unwrap(), decode("a12uel5l").unwrap());
        // mixed case is accepted as long as the checksum verifies
        assert_eq!(decode("A12uel5l").unwrap(), decode("a12uel5l").unwrap());
    }

    #[test]
    fn separator_is_last_occurrence() {
        let decoded = decode("a1b14hrpay").unwrap();
        assert_eq!(decoded.hrp, "a1b");
        assert!(decoded.payload.is_empty());
    }

    #[test]
    fn missing_separator() {
        let err = decode("qqqqqq").unwrap_err();
        assert!(matches!(err, DecodeError::MissingSeparator));
    }

    #[test]
    fn empty_hrp() {
        let err = decode("1qqqqqq").unwrap_err();
        assert!(matches!(err, DecodeError::EmptyHrp));
    }

    #[test]
    fn body_shorter_than_checksum() {
        let err = decode("a1qqq").unwrap_err();
        assert!(matches!(err, DecodeError::TooShort(3)));
        let err = decode("a1").unwrap_err();
        assert!(matches!(err, DecodeError::TooShort(0)));
    }

    #[test]
    fn character_out_of_range() {
        let err = decode("a1 qqqqq").unwrap_err();
        assert!(matches!(err, DecodeError::CharOutOfRange(' ')));
        let err = decode("a1qqqqq\u{e9}").unwrap_err();
        assert!(matches!(err, DecodeError::CharOutOfRange('\u{e9}')));
    }

    #[test]
    fn character_not_in_alphabet() {
        let err = decode("a1bqqqqq").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidChar('b')));
    }

    #[test]
    fn residual_bits_rejected() {
        // checksum verifies but the single data symbol is 5 dangling bits
        let err = decode("a1lmyple6").unwrap_err();
        assert!(matches!(err, DecodeError::Convert(_)));
        // 3 symbols regroup into one byte plus 7 dangling bits
        let err = decode("a1lusl4h3z6").unwrap_err();
        assert!(matches!(err, DecodeError::Convert(_)));
    }

    #[test]
    fn corrupted_checksum() {
        let err = decode("a12uel5m").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidChecksum));
    }
}
