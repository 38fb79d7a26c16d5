use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("element {index} out of range for {len} elements")]
    IndexOutOfRange { index: i128, len: usize },
}

impl UnionFindError {
    pub fn is_out_of_range(&self) -> bool {
        match self {
            UnionFindError::IndexOutOfRange { .. } => true,
            _ => false,
        }
    }
}

pub type UnionFindRes<T = ()> = Result<T, UnionFindError>;

/// Failures of the stdin-driven client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),

    #[error("malformed constants line: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad configuration: {0}")]
    Config(String),

    #[error("line {line}: expected two integers, found {text:?}")]
    BadPair { line: usize, text: String },

    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
}

pub type ClientRes<T = ()> = Result<T, ClientError>;
