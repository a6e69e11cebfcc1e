//! Majuscule normalization for Greek transcriptions
//!
//! Maps precomposed Greek letters (every accent, breathing, iota subscript
//! and case combination) onto a reduced alphabet of undiacritized capitals,
//! then removes punctuation and diacritic marks that carry no letter value.

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;

/// Letterforms accepted as input, paired position by position with [`MAJUSCULE_OUTPUT`]
const MAJUSCULE_INPUT: [&str; 7] = [
    "ΌΏΎΊΉᾲᾀᾁᾂᾃᾅᾇέάΐήώίόύϝϛϋϊᾄᾆᾳᾴᾷαβγδεζηθικλ",
    "μνξοπρστυφχψωἀἄἂἆἁἅἃἇάὰᾶἐἔἒἑἕἓὲέἠἤἢἦἡἥἣἧ",
    "ὴήᾐᾑᾒᾓᾔᾕᾖᾗῂῃῄῆῇἰἴἲἶἱἵἳἷὶίῐῑῒΐῖῗὀὄὂὁὅὃὸόὐ",
    "ὑὒὓὔὕὖὗὺῦύῠῡῢΰῧὠὤὢὦὡὥὣὧώὼᾠᾡᾢᾣᾤᾥᾦᾧῲῳῴῶῷῤῥ",
    "ἈἌἊἎἉἍἋἏᾺΆᾼᾈᾉᾊᾋᾌᾍᾎᾏἘἜἚἙἝἛῈΈἨἬἪἮἩἭἫἯῊΉῌᾘᾙ",
    "ᾚᾛᾜᾝᾞᾟἸἼἺἾἹἽἻἿΊῚῘῙὈὌὊὉὍὋΌῸὙὝὛὟΎῪῨῩὨὬὪὮὩὭ",
    "ὫὯΏῺῼᾨᾩᾪᾫᾬᾭᾮᾯῬςϲϹ",
];

const MAJUSCULE_OUTPUT: [&str; 7] = [
    "ΟΩΥΙΗΑΑΑΑΑΑΑΕΑΙΗΩΙΟΥϜϚΥΙΑΑΑΑΑΑΒΓΔΕΖΗΘΙΚΛ",
    "ΜΝΞΟΠΡΣΤΥΦΧΨΩΑΑΑΑΑΑΑΑΑΑΑΕΕΕΕΕΕΕΕΗΗΗΗΗΗΗΗ",
    "ΗΗΗΗΗΗΗΗΗΗΗΗΗΗΗΙΙΙΙΙΙΙΙΙΙΙΙΙΙΙΙΟΟΟΟΟΟΟΟΥ",
    "ΥΥΥΥΥΥΥΥΥΥΥΥΥΥΥΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΩΡΡ",
    "ΑΑΑΑΑΑΑΑΑΑΑΑΑΑΑΑΑΑΑΕΕΕΕΕΕΕΕΗΗΗΗΗΗΗΗΗΗΗΗΗ",
    "ΗΗΗΗΗΗΙΙΙΙΙΙΙΙΙΙΙΙΟΟΟΟΟΟΟΟΥΥΥΥΥΥΥΥΩΩΩΩΩΩ",
    "ΩΩΩΩΩΩΩΩΩΩΩΩΩΡΣΣΣ",
];

/// Characters removed after mapping
///
/// Apostrophes and breathings, interpuncts, editorial brackets that are
/// structural elsewhere, spacing accents, combining breve/perispomeni/psili,
/// line feeds and spaces.
pub const STRIPPED_CHARS: &[char] = &[
    '\u{2BC}', '\u{2020}', '\u{2219}', '\u{B7}', '\u{2022}', '{', '}', '(', ')', '\'', ',', ';',
    ':', '.', '-', '\u{23D1}', '\u{306}', '\u{342}', '\u{1FBD}', '\u{1FBF}', '\u{1FCE}', '\u{1FDE}',
    '\u{1FFE}', '`', '\u{384}', '\u{201C}', '\u{201D}', '\u{2019}', '\u{313}', '\u{2BD}',
    '\u{2018}', '\u{230A}', '\u{230B}', '\n', ' ',
];

lazy_static! {
    static ref MAJUSCULE_MAP: HashMap<char, char> = MAJUSCULE_INPUT
        .concat()
        .chars()
        .zip(MAJUSCULE_OUTPUT.concat().chars())
        .collect();
    static ref OUTPUT_ALPHABET: BTreeSet<char> = MAJUSCULE_OUTPUT.concat().chars().collect();
}

/// The reduced capital alphabet every Greek letter is normalized to
pub fn output_alphabet() -> &'static BTreeSet<char> {
    &OUTPUT_ALPHABET
}

/// Normalize Greek text to standardized majuscule
///
/// Characters outside the input alphabet pass through unchanged (before
/// the strip step). Normalizing twice yields the same result as once.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| MAJUSCULE_MAP.get(&c).copied().unwrap_or(c))
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}
