use std;

use std::io::prelude::*;

use crate::id3v2::read;
use crate::id3v2::structure::Header;
use crate::Error;
use crate::TagRecord;

/// Walks the frame region and fills a record from the recognized frames.
/// A repeated identifier overwrites the earlier value.
pub fn frames<T: Read + Seek>(input: &mut T, header: &Header) -> Result<TagRecord, Error> {
    let mut record: TagRecord = Default::default();

    let mut remaining = header.size;
    loop {
        let f = match read::frame_header(input, remaining)? {
            Some(f) => f,
            None => break,
        };

        match &f.id {
            b"TIT2" => record.title = Some(read::text(input, f.size)?),
            b"TRCK" => record.track = Some(read::text(input, f.size)?),
            b"TPE1" => record.artist = Some(read::text(input, f.size)?),
            b"TALB" => record.album = Some(read::text(input, f.size)?),
            b"TYER" => record.year = Some(read::text(input, f.size)?),
            b"TCON" => record.genre = Some(read::text(input, f.size)?),
            b"COMM" => record.comment = Some(read::comment(input, f.size)?),

            // seek ahead if the frame is not getting read in
            _ => {
                input.seek(std::io::SeekFrom::Current(f.size as i64))?;
            }
        }

        remaining -= 10 + f.size;
    }

    Ok(record)
}
