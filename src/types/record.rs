/// The decoded contents of one ID3v2.3 tag.
///
/// A `None` field means the frame was not present in the source; an empty
/// string means the frame was present with no text. Each field owns its
/// string, so replacing a value releases the old one.
#[derive(PartialEq, Debug, Default)]
pub struct TagRecord {
    pub title: Option<String>,
    pub track: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,
}

impl TagRecord {
    /// The current value for a recognized text-frame identifier.
    /// COMM is handled separately - its payload is not a plain text frame.
    pub fn text_field(&self, id: &[u8; 4]) -> Option<&str> {
        let field = match id {
            b"TIT2" => &self.title,
            b"TRCK" => &self.track,
            b"TPE1" => &self.artist,
            b"TALB" => &self.album,
            b"TYER" => &self.year,
            b"TCON" => &self.genre,
            _ => return None,
        };
        field.as_deref()
    }
}
