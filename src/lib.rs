#[macro_use]
extern crate lazy_static;

mod types;
pub use crate::types::TagRecord;

mod id3v2;

mod dispatch;
mod display;
mod tools;


pub use crate::dispatch::edit;
pub use crate::dispatch::read_tag;
pub use crate::dispatch::view;
pub use crate::dispatch::write_tag;

use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    /// Fewer than 10 header bytes, or otherwise unreadable as a header.
    MalformedHeader(String),
    /// The first three bytes are not "ID3".
    NotAnID3Tag,
    /// Carries the major version that was encountered.
    UnsupportedVersion(u8),
    /// A frame whose declared layout cannot be satisfied by its own size.
    MalformedFrame(String),
    /// A declared size reaches past the bytes that actually exist.
    StreamTruncation(String),
    /// Edit requested for an identifier outside the recognized set.
    UnknownTagIdentifier(String),
    UnsupportedFormat,
    /// The rewritten file could not be moved over the original.
    /// Carries the original path and the temp path still holding the result.
    ReplaceFailed(PathBuf, PathBuf, io::Error),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::MalformedHeader(ref e) => write!(f, "Malformed ID3 header: {}", e),
            Error::NotAnID3Tag => write!(f, "Not a valid ID3 tag"),
            Error::UnsupportedVersion(v) => {
                write!(f, "Unsupported ID3v2.{} version (only v2.3 supported)", v)
            }
            Error::MalformedFrame(ref e) => write!(f, "Malformed frame: {}", e),
            Error::StreamTruncation(ref e) => write!(f, "Truncated stream: {}", e),
            Error::UnknownTagIdentifier(ref t) => write!(f, "Unknown tag identifier: {}", t),
            Error::UnsupportedFormat => write!(f, "Unsupported file format"),
            Error::ReplaceFailed(ref path, ref tmp, ref e) => write!(
                f,
                "Could not replace {} with rewritten file {}: {}",
                path.display(),
                tmp.display(),
                e
            ),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            Error::ReplaceFailed(_, _, ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
