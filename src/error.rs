use std::{io, num::ParseIntError};

use thiserror::Error;

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("invalid port `{value}`: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_keeps_os_error() {
        let source = io::Error::from(io::ErrorKind::AddrInUse);
        let err = LaunchError::Bind { addr: "0.0.0.0:3000".to_string(), source };
        assert!(err.to_string().starts_with("failed to listen on 0.0.0.0:3000"));

        let LaunchError::Bind { source, .. } = err else { unreachable!() };
        assert_eq!(source.kind(), io::ErrorKind::AddrInUse);
    }
}
