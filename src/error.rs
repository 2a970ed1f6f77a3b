use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid witness program length: {0} bytes")]
    InvalidWitnessProgram(usize),

    #[error("private key scalar is zero or exceeds the curve order")]
    ScalarOutOfRange,

    #[error("bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
