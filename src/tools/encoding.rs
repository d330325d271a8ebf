extern crate encoding;
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

pub fn encode_iso_8859_1(input: &str) -> Vec<u8> {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .encode(input, EncoderTrap::Replace)
        .unwrap_or(Vec::new())
}

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string()
}
