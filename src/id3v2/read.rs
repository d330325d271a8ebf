use std;

use std::io::prelude::*;

use crate::id3v2::structure::{FrameHeader, Header};
use crate::tools::decode_int_be_u32;
use crate::tools::encoding::decode_iso_8859_1;
use crate::Error;

// a short read inside a frame means a declared size reached past the file
fn fill<T: Read>(input: &mut T, buf: &mut [u8], what: &str) -> Result<(), Error> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            Error::StreamTruncation(format!("unexpected end of stream reading {}", what))
        }
        _ => Error::IOError(e),
    })
}

pub fn header<T: Read + Seek>(input: &mut T) -> Result<Header, Error> {
    input.seek(std::io::SeekFrom::Start(0))?;

    let mut arr: [u8; 10] = [0; 10];
    input.read_exact(&mut arr).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            Error::MalformedHeader("file shorter than the 10-byte ID3 header".to_string())
        }
        _ => Error::IOError(e),
    })?;

    // ID3v2/file identifier      "ID3"
    if &arr[0..3] != b"ID3" {
        return Err(Error::NotAnID3Tag);
    }

    // only ID3v2.3.0 is handled; anything else is a hard rejection
    let major = arr[3];
    let minor = arr[4];
    if major != 3 || minor != 0 {
        return Err(Error::UnsupportedVersion(major));
    }

    Ok(Header {
        major,
        minor,
        flags: arr[5],
        // plain big-endian, exactly as written back on rewrite
        size: decode_int_be_u32([arr[6], arr[7], arr[8], arr[9]]),
    })
}

/// Reads one frame header. `Ok(None)` means the frame region ended: either
/// a pad byte where an identifier should start, or the stream ran out at
/// the identifier boundary. `remaining` is the count of tag bytes left; a
/// frame declaring more than that is a truncation.
pub fn frame_header<T: Read + Seek>(
    input: &mut T,
    remaining: u32,
) -> Result<Option<FrameHeader>, Error> {
    // not enough room left for another identifier, size field and flags
    if remaining < 10 {
        return Ok(None);
    }

    let mut id: [u8; 4] = [0; 4];
    match input.read_exact(&mut id) {
        Ok(()) => (),
        Err(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(Error::IOError(e)),
    }

    // padding reached
    if id[0] == 0 {
        return Ok(None);
    }

    let mut arr: [u8; 4 + 2] = [0; 6];
    fill(input, &mut arr, "frame size and flags")?;

    let frame = FrameHeader {
        id,
        size: decode_int_be_u32([arr[0], arr[1], arr[2], arr[3]]),
        flags: [arr[4], arr[5]],
    };

    if frame.size > remaining - 10 {
        return Err(Error::StreamTruncation(format!(
            "frame {} declares {} bytes with only {} left in the tag",
            frame.id_str(),
            frame.size,
            remaining - 10
        )));
    }

    Ok(Some(frame))
}

/// Text frame payload: 1 encoding byte, then `size - 1` content bytes.
/// The encoding byte is consumed but not interpreted - this codec only
/// handles single-byte ISO-8859-1 text.
pub fn text<T: Read + Seek>(input: &mut T, size: u32) -> Result<String, Error> {
    if size == 0 {
        return Err(Error::MalformedFrame(
            "text frame with no room for its encoding byte".to_string(),
        ));
    }

    let mut encoding: [u8; 1] = [0; 1];
    fill(input, &mut encoding, "text frame encoding byte")?;

    let mut vec = vec![0; size as usize - 1];
    fill(input, &mut vec, "text frame content")?;

    Ok(decode_iso_8859_1(&vec))
}

/// Comment frame payload: encoding byte, 3-byte language, null-terminated
/// description (discarded), remainder is the comment text.
pub fn comment<T: Read + Seek>(input: &mut T, size: u32) -> Result<String, Error> {
    // minimum layout: encoding + language + empty description null
    if size < 5 {
        return Err(Error::MalformedFrame(format!(
            "comment frame of {} bytes cannot hold encoding, language and description",
            size
        )));
    }

    let mut head: [u8; 4] = [0; 4];
    fill(input, &mut head, "comment frame encoding and language")?;

    // scan up to 255 bytes for the description terminator
    let mut desc_len: u32 = 0;
    loop {
        let mut b: [u8; 1] = [0; 1];
        fill(input, &mut b, "comment frame description")?;
        if b[0] == 0 {
            break;
        }
        desc_len += 1;
        if desc_len == 255 {
            return Err(Error::MalformedFrame(
                "comment description missing its null terminator".to_string(),
            ));
        }
    }

    // a description spilling past the frame would make this negative
    if size - 5 < desc_len {
        return Err(Error::MalformedFrame(
            "comment description runs past the declared frame size".to_string(),
        ));
    }

    let mut vec = vec![0; (size - 5 - desc_len) as usize];
    fill(input, &mut vec, "comment frame text")?;

    Ok(decode_iso_8859_1(&vec))
}
