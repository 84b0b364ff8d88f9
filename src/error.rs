use crate::{convert::ConvertError, decode::DecodeError, encode::EncodeError};

/// Crate level error, for callers mixing encode and decode in one fallible
/// path. Each operation also returns its own narrower error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
