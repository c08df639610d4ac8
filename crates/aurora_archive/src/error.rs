//! Error types that can be emitted from this library

use std::{
    io::{self, SeekFrom},
    path::PathBuf,
};

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Tag;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// unable to open the archive file
    #[error("unable to open {}", path.display())]
    Open {
        /// Path that was opened
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// unable to seek to a position
    #[error("unable to seek to {position:?}")]
    Seek {
        /// Requested position
        position: SeekFrom,
        #[source]
        source: io::Error,
    },

    /// reading failed, or the data ended early
    #[error("unable to read from archive")]
    Read(#[source] io::Error),

    /// tag or version of the archive is not the expected one
    #[error("expected {expected}, found {found}")]
    #[diagnostic(help("only BZF archives of version V1 can be read"))]
    FormatMismatch {
        /// Four character code the reader wanted
        expected: Tag,
        /// Four character code the archive has
        found: Tag,
    },

    /// {0}
    #[error("unsupported archive feature: {0}")]
    UnsupportedFeature(String),

    /// the LZMA1 raw decoder can not be created
    #[error("LZMA1 decoding is not available")]
    CodecUnsupported(#[source] liblzma::stream::Error),

    /// {0}
    #[error("invalid LZMA1 properties: {0}")]
    CodecProperties(String),

    /// the compressed data is corrupt
    #[error("unable to decompress resource")]
    Decompression(#[source] liblzma::stream::Error),

    /// at index {0}
    #[error("unable to find resource at index {0}")]
    ResourceNotFound(usize),

    /// {context}
    #[error("{context}")]
    Context {
        /// What was being done when `source` happened
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with a description of the failed operation
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The root failure, with all [`Error::Context`] layers removed
    pub fn innermost(&self) -> &Error {
        let mut error = self;
        while let Error::Context { source, .. } = error {
            error = source;
        }
        error
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Read(source)
    }
}

impl From<binrw::Error> for Error {
    fn from(error: binrw::Error) -> Self {
        match error {
            binrw::Error::Io(source) => Error::Read(source),
            binrw::Error::Backtrace(backtrace) => Error::from(*backtrace.error),
            other => Error::Read(io::Error::new(io::ErrorKind::InvalidData, other.to_string())),
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
