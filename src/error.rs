//! Failures a conversion can surface. Nothing here is recovered from;
//! every variant terminates the run.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input listing could not be opened or read.
    #[error("cannot read `{path}`: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be created or written.
    #[error("cannot write `{path}`: {source}")]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A kept line whose first two tokens are not both numbers.
    #[error("line {line}: `{token}` is not a number: {source}")]
    MalformedNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
