use std;

use std::io::prelude::*;

use crate::id3v2::structure::FrameHeader;
use crate::tools::encode_int_be_u32;
use crate::tools::encoding::encode_iso_8859_1;
use crate::Error;

// The identifier has already been mirrored to the output by the caller;
// each path here emits the size field, flags and payload, and leaves the
// original stream positioned at the next frame.

/// Replace a text frame's payload. The size field is recomputed from the
/// new value, the original flag bytes are kept, the encoding is forced to
/// single-byte 0x00 and the text carries no terminator.
pub fn text_frame<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    frame: &FrameHeader,
    value: &str,
) -> Result<(), Error> {
    let text = encode_iso_8859_1(value);

    output.write_all(&encode_int_be_u32(text.len() as u32 + 1))?;
    output.write_all(&frame.flags)?;
    output.write_all(&[0x00])?;
    output.write_all(&text)?;

    // the old payload is fully superseded
    input.seek(std::io::SeekFrom::Current(frame.size as i64))?;
    Ok(())
}

/// Replace a comment frame's payload. Language is normalized to "eng" and
/// the description to a single null, whatever the original carried.
pub fn comment_frame<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    frame: &FrameHeader,
    value: &str,
) -> Result<(), Error> {
    let text = encode_iso_8859_1(value);

    // encoding + language + empty description + text
    output.write_all(&encode_int_be_u32(text.len() as u32 + 5))?;
    output.write_all(&frame.flags)?;
    output.write_all(&[0x00])?;
    output.write_all(b"eng\x00")?;
    output.write_all(&text)?;

    input.seek(std::io::SeekFrom::Current(frame.size as i64))?;
    Ok(())
}

/// Mirror a frame byte-for-byte: original size field, original flags,
/// exactly `size` payload bytes.
pub fn copy_frame<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    frame: &FrameHeader,
) -> Result<(), Error> {
    output.write_all(&encode_int_be_u32(frame.size))?;
    output.write_all(&frame.flags)?;

    let copied = std::io::copy(&mut input.by_ref().take(frame.size as u64), output)?;
    if copied < frame.size as u64 {
        return Err(Error::StreamTruncation(format!(
            "frame {} payload ended after {} of {} bytes",
            frame.id_str(),
            copied,
            frame.size
        )));
    }
    Ok(())
}
