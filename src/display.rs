extern crate regex;
use self::regex::Regex;

use crate::id3v2::structure::Header;
use crate::TagRecord;

/// Renders the report printed by `view`. Absent fields are left out
/// entirely; an empty field still gets its line.
pub fn format_record(header: &Header, record: &TagRecord) -> String {
    let mut out = String::new();

    out.push_str("-------------------------\n");
    out.push_str("MP3 TAG READER & EDITOR :\n");
    out.push_str("-------------------------\n");
    out.push_str(&format!("ID3 Version : v2.{}\n", header.major));
    out.push_str("-------------------------\n");

    if let Some(ref x) = record.title {
        out.push_str(&format!("Title   : {}\n", x));
    }
    if let Some(ref x) = record.track {
        out.push_str(&format!("Track   : {}\n", x));
    }
    if let Some(ref x) = record.artist {
        out.push_str(&format!("Artist  : {}\n", x));
    }
    if let Some(ref x) = record.album {
        out.push_str(&format!("Album   : {}\n", x));
    }
    if let Some(ref x) = record.year {
        out.push_str(&format!("Year    : {}\n", x));
    }
    if let Some(ref x) = record.genre {
        out.push_str(&format!("Genre   : {}\n", genre_name(x)));
    }
    if let Some(ref x) = record.comment {
        out.push_str(&format!("Comment : {}\n", x));
    }

    out.push_str("-------------------------\n\n");
    out
}

/// TCON values are often stored as a parenthesized ID3v1 genre reference
/// like "(17)"; resolve those for display and pass anything else through.
pub fn genre_name(raw: &str) -> String {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\((\d+)\)$").unwrap();
    }

    let index = RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok());

    match index {
        Some(i) if i < GENRES.len() => GENRES[i].to_string(),
        _ => raw.to_string(),
    }
}

// the classic ID3v1 genre list
const GENRES: [&str; 80] = [
    "Blues",
    "Classic Rock",
    "Country",
    "Dance",
    "Disco",
    "Funk",
    "Grunge",
    "Hip-Hop",
    "Jazz",
    "Metal",
    "New Age",
    "Oldies",
    "Other",
    "Pop",
    "R&B",
    "Rap",
    "Reggae",
    "Rock",
    "Techno",
    "Industrial",
    "Alternative",
    "Ska",
    "Death Metal",
    "Pranks",
    "Soundtrack",
    "Euro-Techno",
    "Ambient",
    "Trip-Hop",
    "Vocal",
    "Jazz+Funk",
    "Fusion",
    "Trance",
    "Classical",
    "Instrumental",
    "Acid",
    "House",
    "Game",
    "Sound Clip",
    "Gospel",
    "Noise",
    "AlternRock",
    "Bass",
    "Soul",
    "Punk",
    "Space",
    "Meditative",
    "Instrumental Pop",
    "Instrumental Rock",
    "Ethnic",
    "Gothic",
    "Darkwave",
    "Techno-Industrial",
    "Electronic",
    "Pop-Folk",
    "Eurodance",
    "Dream",
    "Southern Rock",
    "Comedy",
    "Cult",
    "Gangsta",
    "Top 40",
    "Christian Rap",
    "Pop/Funk",
    "Jungle",
    "Native American",
    "Cabaret",
    "New Wave",
    "Psychedelic",
    "Rave",
    "Showtunes",
    "Trailer",
    "Lo-Fi",
    "Tribal",
    "Acid Punk",
    "Acid Jazz",
    "Polka",
    "Retro",
    "Musical",
    "Rock & Roll",
    "Hard Rock",
];
