//! Characters sampled by the rain: hiragana, katakana and a few kanji/punctuation

pub const GLYPHS: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん\
アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン\
中日人日語。！？";

/// The glyph set as a vector, duplicates kept so sampling weights match the source string.
pub fn glyph_set() -> Vec<char> {
    GLYPHS.chars().collect()
}
