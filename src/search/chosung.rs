//! Hangul initial-consonant (초성) matching.
//!
//! Korean users habitually type only the leading consonants of a word
//! ("ㅇㄴㅅㅌ" for "유니시티"). Reducing both sides to their consonant
//! skeleton makes that shortcut a plain substring test.

/// The 19 initial consonants, in code-point order within a syllable block.
const CHOSUNG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_COUNT: u32 = 11_172;
const PER_CHOSUNG: u32 = 588;

/// Replace every Hangul syllable with its leading consonant; everything else
/// passes through unchanged.
pub fn chosung_skeleton(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = (c as u32).wrapping_sub(SYLLABLE_BASE);
            if code < SYLLABLE_COUNT {
                CHOSUNG[(code / PER_CHOSUNG) as usize]
            } else {
                c
            }
        })
        .collect()
}

/// Does `term` match `target`? Empty terms match everything. Tries a
/// case-insensitive substring first, then the consonant skeletons.
pub fn matches_search(target: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    if target.to_lowercase().contains(&term.to_lowercase()) {
        return true;
    }

    chosung_skeleton(target).contains(&chosung_skeleton(term))
}
