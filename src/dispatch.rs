use std;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::display;
use crate::id3v2;
use crate::Error;
use crate::TagRecord;

macro_rules! unsupported {
    ($path:ident) => {{
        match $path.extension().unwrap_or_default().to_str() {
            Some("mp3") => (),
            None | Some(_) => return Err(Error::UnsupportedFormat),
        }
    }};
}

/// Reads the tag without touching the file.
pub fn read_tag<P: AsRef<Path>>(path: P) -> Result<TagRecord, Error> {
    let path = path.as_ref();
    unsupported!(path);

    let mut file = File::open(path)?;
    let (_, record) = id3v2::get(&mut file)?;
    Ok(record)
}

/// Rewrites the file's tag from `record`, leaving the audio untouched.
/// The rewrite goes to a temp file first; the original is only replaced
/// once the whole rewrite completed.
pub fn write_tag<P: AsRef<Path>>(path: P, record: &TagRecord) -> Result<(), Error> {
    let path = path.as_ref();
    unsupported!(path);

    let tmp_path = {
        let mut p = path.to_path_buf();
        let mut e = std::ffi::OsString::from(p.extension().unwrap_or_default());
        e.push("tmp");
        p.set_extension(e);
        p
    };

    {
        let mut file = File::open(path)?;
        let mut tmp_file = BufWriter::new(
            std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp_path)?,
        );

        if let Err(x) = id3v2::set(&mut file, &mut tmp_file, record) {
            // on failure, delete the temporary file
            std::fs::remove_file(&tmp_path)?;
            return Err(x);
        }

        if let Err(x) = tmp_file.into_inner() {
            std::fs::remove_file(&tmp_path)?;
            return Err(Error::IOError(x.into_error()));
        }
    }

    // replace the original file; a failure here must not lose the fully
    // written temp file silently
    if let Err(x) = std::fs::rename(&tmp_path, path) {
        return Err(Error::ReplaceFailed(path.to_path_buf(), tmp_path, x));
    }
    Ok(())
}

/// Prints the tag in the human-readable report format.
pub fn view<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    unsupported!(path);

    let mut file = File::open(path)?;
    let (header, record) = id3v2::get(&mut file)?;
    print!("{}", display::format_record(&header, &record));
    Ok(())
}

/// Replaces one field and rewrites the tag. `tag` must be one of the
/// recognized frame identifiers.
pub fn edit<P: AsRef<Path>>(path: P, tag: &str, value: &str) -> Result<(), Error> {
    let path = path.as_ref();
    unsupported!(path);

    let mut record = read_tag(path)?;
    match tag {
        "TIT2" => record.title = Some(value.to_string()),
        "TRCK" => record.track = Some(value.to_string()),
        "TPE1" => record.artist = Some(value.to_string()),
        "TALB" => record.album = Some(value.to_string()),
        "TYER" => record.year = Some(value.to_string()),
        "TCON" => record.genre = Some(value.to_string()),
        "COMM" => record.comment = Some(value.to_string()),
        _ => return Err(Error::UnknownTagIdentifier(tag.to_string())),
    }

    write_tag(path, &record)
}
