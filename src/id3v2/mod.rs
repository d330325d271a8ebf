use std;

use std::io::prelude::*;

use crate::tools::encode_int_be_u32;
use crate::Error;
use crate::TagRecord;

mod get;
mod read;
pub(crate) mod structure;
mod write;


pub fn get<T: Read + Seek>(input: &mut T) -> Result<(structure::Header, TagRecord), Error> {
    let header = read::header(input)?;
    let record = get::frames(input, &header)?;
    Ok((header, record))
}

/// Rewrites the whole tag into `output`: the header is copied, every frame
/// whose identifier matches a populated record field is re-encoded with
/// that value, everything else is mirrored byte-for-byte, the padding is
/// dropped and the audio payload follows unchanged. The header's size
/// field is patched once the frame region is complete.
///
/// Note this replaces every populated field, not only one that was just
/// edited - unedited fields round-trip through the re-encode with their
/// last-read values.
pub fn set<R: Read + Seek, W: Write + Seek>(
    input: &mut R,
    output: &mut W,
    record: &TagRecord,
) -> Result<(), Error> {
    use std::io::SeekFrom;

    // same validation as the reader; nothing is written for a file that
    // is not an ID3v2.3 tag
    let header = read::header(input)?;

    output.write_all(b"ID3")?;
    output.write_all(&[header.major, header.minor, header.flags])?;
    // placeholder, patched below once the frame region is written
    output.write_all(&encode_int_be_u32(header.size))?;

    let mut remaining = header.size;
    loop {
        let frame = match read::frame_header(input, remaining)? {
            Some(f) => f,
            None => break,
        };

        output.write_all(&frame.id)?;
        if let Some(value) = record.text_field(&frame.id) {
            write::text_frame(input, output, &frame, value)?;
        } else if &frame.id == b"COMM" {
            match record.comment.as_deref() {
                Some(value) => write::comment_frame(input, output, &frame, value)?,
                None => write::copy_frame(input, output, &frame)?,
            }
        } else {
            write::copy_frame(input, output, &frame)?;
        }

        remaining -= 10 + frame.size;
    }

    // the size field covers the frame region only
    let tag_end = output.seek(SeekFrom::Current(0))?;

    // the remaining padding is not copied; audio starts right past the
    // declared tag end
    input.seek(SeekFrom::Start(10 + header.size as u64))?;
    std::io::copy(input, output)?;

    output.seek(SeekFrom::Start(6))?;
    output.write_all(&encode_int_be_u32((tag_end - 10) as u32))?;
    output.seek(SeekFrom::End(0))?;
    output.flush()?;
    Ok(())
}
