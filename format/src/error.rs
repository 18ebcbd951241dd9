//! Error types shared by all format adapters.
//!
//! Adapter operations fail with a single [`Error`] enum.
//! Consumers which do not care about the precise variant can sort any
//! error into one of three coarse classes through [`Error::kind`]:
//! a system I/O error, an unsupported feature,
//! or invalid data in the stream.

use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// The coarse class of an adapter error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operating system I/O failure,
    /// such as a file which could not be opened or closed.
    Io,
    /// The data or the requested operation is valid,
    /// but not supported by this adapter.
    Unsupported,
    /// The stream contents are corrupt or otherwise
    /// rejected by the underlying codec.
    InvalidData,
}

/// An error from a format adapter operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum Error {
    /// Could not open a file for reading or writing.
    #[snafu(display("Could not open file '{}'", path.display()))]
    OpenFile {
        path: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not flush and close the file being written.
    #[snafu(display("Could not close file"))]
    CloseFile {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not seek the open file back to its first array.
    #[snafu(display("Could not rewind file"))]
    RewindFile {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The operation requires a file to be open in the right mode.
    #[snafu(display("No file is open for {}", operation))]
    NotOpen {
        operation: &'static str,
        backtrace: Backtrace,
    },
    /// The data or the requested operation is out of scope
    /// for this format.
    #[snafu(display("Unsupported feature: {}", feature))]
    Unsupported {
        feature: String,
        backtrace: Backtrace,
    },
    /// The format holds its arrays in sequence and cannot
    /// seek to the requested position.
    #[snafu(display("Unsupported seek to array #{}", index))]
    UnsupportedSeek { index: u32, backtrace: Backtrace },
    /// The stream contents were rejected by the codec in use.
    #[snafu(whatever, display("{}", message))]
    InvalidData {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl Error {
    /// The coarse class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OpenFile { .. } | Error::CloseFile { .. } | Error::RewindFile { .. } => {
                ErrorKind::Io
            }
            Error::NotOpen { .. }
            | Error::Unsupported { .. }
            | Error::UnsupportedSeek { .. } => ErrorKind::Unsupported,
            Error::InvalidData { .. } => ErrorKind::InvalidData,
        }
    }
}

/// The result of a format adapter operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use snafu::prelude::*;
    use snafu::IntoError;

    fn decode_broken_stream() -> Result<()> {
        whatever!("Broken stream header")
    }

    #[test]
    fn errors_sort_into_kinds() {
        let err = OpenFileSnafu { path: "nope.jpg" }
            .into_error(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("nope.jpg"));

        let err: Error = NotOpenSnafu { operation: "reading" }.build();
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let err: Error = UnsupportedSnafu {
            feature: "append mode",
        }
        .build();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(err.to_string(), "Unsupported feature: append mode");

        let err: Error = UnsupportedSeekSnafu { index: 3_u32 }.build();
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let err = decode_broken_stream().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "Broken stream header");
    }
}
