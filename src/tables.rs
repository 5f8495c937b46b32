//! Unicode 14.0.0 `Script` property ranges, one entry per script.
//!
//! Generated from the Unicode Character Database `Scripts.txt`. Runs of
//! evenly spaced single codepoints are folded into strided intervals.

use crate::range_table::{Interval, Script};

/// The Unicode version the built-in table was generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(crate) static SCRIPTS: &[Script] = &[
    Script::from_static("Adlam", ADLAM),
    Script::from_static("Ahom", AHOM),
    Script::from_static("Anatolian_Hieroglyphs", ANATOLIAN_HIEROGLYPHS),
    Script::from_static("Arabic", ARABIC),
    Script::from_static("Armenian", ARMENIAN),
    Script::from_static("Avestan", AVESTAN),
    Script::from_static("Balinese", BALINESE),
    Script::from_static("Bamum", BAMUM),
    Script::from_static("Bassa_Vah", BASSA_VAH),
    Script::from_static("Batak", BATAK),
    Script::from_static("Bengali", BENGALI),
    Script::from_static("Bhaiksuki", BHAIKSUKI),
    Script::from_static("Bopomofo", BOPOMOFO),
    Script::from_static("Brahmi", BRAHMI),
    Script::from_static("Braille", BRAILLE),
    Script::from_static("Buginese", BUGINESE),
    Script::from_static("Buhid", BUHID),
    Script::from_static("Canadian_Aboriginal", CANADIAN_ABORIGINAL),
    Script::from_static("Carian", CARIAN),
    Script::from_static("Caucasian_Albanian", CAUCASIAN_ALBANIAN),
    Script::from_static("Chakma", CHAKMA),
    Script::from_static("Cham", CHAM),
    Script::from_static("Cherokee", CHEROKEE),
    Script::from_static("Chorasmian", CHORASMIAN),
    Script::from_static("Common", COMMON),
    Script::from_static("Coptic", COPTIC),
    Script::from_static("Cuneiform", CUNEIFORM),
    Script::from_static("Cypriot", CYPRIOT),
    Script::from_static("Cypro_Minoan", CYPRO_MINOAN),
    Script::from_static("Cyrillic", CYRILLIC),
    Script::from_static("Deseret", DESERET),
    Script::from_static("Devanagari", DEVANAGARI),
    Script::from_static("Dives_Akuru", DIVES_AKURU),
    Script::from_static("Dogra", DOGRA),
    Script::from_static("Duployan", DUPLOYAN),
    Script::from_static("Egyptian_Hieroglyphs", EGYPTIAN_HIEROGLYPHS),
    Script::from_static("Elbasan", ELBASAN),
    Script::from_static("Elymaic", ELYMAIC),
    Script::from_static("Ethiopic", ETHIOPIC),
    Script::from_static("Georgian", GEORGIAN),
    Script::from_static("Glagolitic", GLAGOLITIC),
    Script::from_static("Gothic", GOTHIC),
    Script::from_static("Grantha", GRANTHA),
    Script::from_static("Greek", GREEK),
    Script::from_static("Gujarati", GUJARATI),
    Script::from_static("Gunjala_Gondi", GUNJALA_GONDI),
    Script::from_static("Gurmukhi", GURMUKHI),
    Script::from_static("Han", HAN),
    Script::from_static("Hangul", HANGUL),
    Script::from_static("Hanifi_Rohingya", HANIFI_ROHINGYA),
    Script::from_static("Hanunoo", HANUNOO),
    Script::from_static("Hatran", HATRAN),
    Script::from_static("Hebrew", HEBREW),
    Script::from_static("Hiragana", HIRAGANA),
    Script::from_static("Imperial_Aramaic", IMPERIAL_ARAMAIC),
    Script::from_static("Inherited", INHERITED),
    Script::from_static("Inscriptional_Pahlavi", INSCRIPTIONAL_PAHLAVI),
    Script::from_static("Inscriptional_Parthian", INSCRIPTIONAL_PARTHIAN),
    Script::from_static("Javanese", JAVANESE),
    Script::from_static("Kaithi", KAITHI),
    Script::from_static("Kannada", KANNADA),
    Script::from_static("Katakana", KATAKANA),
    Script::from_static("Kayah_Li", KAYAH_LI),
    Script::from_static("Kharoshthi", KHAROSHTHI),
    Script::from_static("Khitan_Small_Script", KHITAN_SMALL_SCRIPT),
    Script::from_static("Khmer", KHMER),
    Script::from_static("Khojki", KHOJKI),
    Script::from_static("Khudawadi", KHUDAWADI),
    Script::from_static("Lao", LAO),
    Script::from_static("Latin", LATIN),
    Script::from_static("Lepcha", LEPCHA),
    Script::from_static("Limbu", LIMBU),
    Script::from_static("Linear_A", LINEAR_A),
    Script::from_static("Linear_B", LINEAR_B),
    Script::from_static("Lisu", LISU),
    Script::from_static("Lycian", LYCIAN),
    Script::from_static("Lydian", LYDIAN),
    Script::from_static("Mahajani", MAHAJANI),
    Script::from_static("Makasar", MAKASAR),
    Script::from_static("Malayalam", MALAYALAM),
    Script::from_static("Mandaic", MANDAIC),
    Script::from_static("Manichaean", MANICHAEAN),
    Script::from_static("Marchen", MARCHEN),
    Script::from_static("Masaram_Gondi", MASARAM_GONDI),
    Script::from_static("Medefaidrin", MEDEFAIDRIN),
    Script::from_static("Meetei_Mayek", MEETEI_MAYEK),
    Script::from_static("Mende_Kikakui", MENDE_KIKAKUI),
    Script::from_static("Meroitic_Cursive", MEROITIC_CURSIVE),
    Script::from_static("Meroitic_Hieroglyphs", MEROITIC_HIEROGLYPHS),
    Script::from_static("Miao", MIAO),
    Script::from_static("Modi", MODI),
    Script::from_static("Mongolian", MONGOLIAN),
    Script::from_static("Mro", MRO),
    Script::from_static("Multani", MULTANI),
    Script::from_static("Myanmar", MYANMAR),
    Script::from_static("Nabataean", NABATAEAN),
    Script::from_static("Nandinagari", NANDINAGARI),
    Script::from_static("New_Tai_Lue", NEW_TAI_LUE),
    Script::from_static("Newa", NEWA),
    Script::from_static("Nko", NKO),
    Script::from_static("Nushu", NUSHU),
    Script::from_static("Nyiakeng_Puachue_Hmong", NYIAKENG_PUACHUE_HMONG),
    Script::from_static("Ogham", OGHAM),
    Script::from_static("Ol_Chiki", OL_CHIKI),
    Script::from_static("Old_Hungarian", OLD_HUNGARIAN),
    Script::from_static("Old_Italic", OLD_ITALIC),
    Script::from_static("Old_North_Arabian", OLD_NORTH_ARABIAN),
    Script::from_static("Old_Permic", OLD_PERMIC),
    Script::from_static("Old_Persian", OLD_PERSIAN),
    Script::from_static("Old_Sogdian", OLD_SOGDIAN),
    Script::from_static("Old_South_Arabian", OLD_SOUTH_ARABIAN),
    Script::from_static("Old_Turkic", OLD_TURKIC),
    Script::from_static("Old_Uyghur", OLD_UYGHUR),
    Script::from_static("Oriya", ORIYA),
    Script::from_static("Osage", OSAGE),
    Script::from_static("Osmanya", OSMANYA),
    Script::from_static("Pahawh_Hmong", PAHAWH_HMONG),
    Script::from_static("Palmyrene", PALMYRENE),
    Script::from_static("Pau_Cin_Hau", PAU_CIN_HAU),
    Script::from_static("Phags_Pa", PHAGS_PA),
    Script::from_static("Phoenician", PHOENICIAN),
    Script::from_static("Psalter_Pahlavi", PSALTER_PAHLAVI),
    Script::from_static("Rejang", REJANG),
    Script::from_static("Runic", RUNIC),
    Script::from_static("Samaritan", SAMARITAN),
    Script::from_static("Saurashtra", SAURASHTRA),
    Script::from_static("Sharada", SHARADA),
    Script::from_static("Shavian", SHAVIAN),
    Script::from_static("Siddham", SIDDHAM),
    Script::from_static("SignWriting", SIGNWRITING),
    Script::from_static("Sinhala", SINHALA),
    Script::from_static("Sogdian", SOGDIAN),
    Script::from_static("Sora_Sompeng", SORA_SOMPENG),
    Script::from_static("Soyombo", SOYOMBO),
    Script::from_static("Sundanese", SUNDANESE),
    Script::from_static("Syloti_Nagri", SYLOTI_NAGRI),
    Script::from_static("Syriac", SYRIAC),
    Script::from_static("Tagalog", TAGALOG),
    Script::from_static("Tagbanwa", TAGBANWA),
    Script::from_static("Tai_Le", TAI_LE),
    Script::from_static("Tai_Tham", TAI_THAM),
    Script::from_static("Tai_Viet", TAI_VIET),
    Script::from_static("Takri", TAKRI),
    Script::from_static("Tamil", TAMIL),
    Script::from_static("Tangsa", TANGSA),
    Script::from_static("Tangut", TANGUT),
    Script::from_static("Telugu", TELUGU),
    Script::from_static("Thaana", THAANA),
    Script::from_static("Thai", THAI),
    Script::from_static("Tibetan", TIBETAN),
    Script::from_static("Tifinagh", TIFINAGH),
    Script::from_static("Tirhuta", TIRHUTA),
    Script::from_static("Toto", TOTO),
    Script::from_static("Ugaritic", UGARITIC),
    Script::from_static("Vai", VAI),
    Script::from_static("Vithkuqi", VITHKUQI),
    Script::from_static("Wancho", WANCHO),
    Script::from_static("Warang_Citi", WARANG_CITI),
    Script::from_static("Yezidi", YEZIDI),
    Script::from_static("Yi", YI),
    Script::from_static("Zanabazar_Square", ZANABAZAR_SQUARE),
];

const ADLAM: &[Interval] = &[
    Interval::new(0x1e900, 0x1e94b, 1),
    Interval::new(0x1e950, 0x1e959, 1),
    Interval::new(0x1e95e, 0x1e95f, 1),
];

const AHOM: &[Interval] = &[
    Interval::new(0x11700, 0x1171a, 1),
    Interval::new(0x1171d, 0x1172b, 1),
    Interval::new(0x11730, 0x11746, 1),
];

const ANATOLIAN_HIEROGLYPHS: &[Interval] = &[
    Interval::new(0x14400, 0x14646, 1),
];

const ARABIC: &[Interval] = &[
    Interval::new(0x0600, 0x0604, 1),
    Interval::new(0x0606, 0x060b, 1),
    Interval::new(0x060d, 0x061a, 1),
    Interval::new(0x061c, 0x061e, 1),
    Interval::new(0x0620, 0x063f, 1),
    Interval::new(0x0641, 0x064a, 1),
    Interval::new(0x0656, 0x066f, 1),
    Interval::new(0x0671, 0x06dc, 1),
    Interval::new(0x06de, 0x06ff, 1),
    Interval::new(0x0750, 0x077f, 1),
    Interval::new(0x0870, 0x088e, 1),
    Interval::new(0x0890, 0x0891, 1),
    Interval::new(0x0898, 0x08e1, 1),
    Interval::new(0x08e3, 0x08ff, 1),
    Interval::new(0xfb50, 0xfbc2, 1),
    Interval::new(0xfbd3, 0xfd3d, 1),
    Interval::new(0xfd40, 0xfd8f, 1),
    Interval::new(0xfd92, 0xfdc7, 1),
    Interval::new(0xfdcf, 0xfdcf, 1),
    Interval::new(0xfdf0, 0xfdff, 1),
    Interval::new(0xfe70, 0xfe74, 1),
    Interval::new(0xfe76, 0xfefc, 1),
    Interval::new(0x10e60, 0x10e7e, 1),
    Interval::new(0x1ee00, 0x1ee03, 1),
    Interval::new(0x1ee05, 0x1ee1f, 1),
    Interval::new(0x1ee21, 0x1ee22, 1),
    Interval::new(0x1ee24, 0x1ee24, 1),
    Interval::new(0x1ee27, 0x1ee27, 1),
    Interval::new(0x1ee29, 0x1ee32, 1),
    Interval::new(0x1ee34, 0x1ee37, 1),
    Interval::new(0x1ee39, 0x1ee39, 1),
    Interval::new(0x1ee3b, 0x1ee3b, 1),
    Interval::new(0x1ee42, 0x1ee42, 1),
    Interval::new(0x1ee47, 0x1ee4b, 2),
    Interval::new(0x1ee4d, 0x1ee4f, 1),
    Interval::new(0x1ee51, 0x1ee52, 1),
    Interval::new(0x1ee54, 0x1ee54, 1),
    Interval::new(0x1ee57, 0x1ee5f, 2),
    Interval::new(0x1ee61, 0x1ee62, 1),
    Interval::new(0x1ee64, 0x1ee64, 1),
    Interval::new(0x1ee67, 0x1ee6a, 1),
    Interval::new(0x1ee6c, 0x1ee72, 1),
    Interval::new(0x1ee74, 0x1ee77, 1),
    Interval::new(0x1ee79, 0x1ee7c, 1),
    Interval::new(0x1ee7e, 0x1ee7e, 1),
    Interval::new(0x1ee80, 0x1ee89, 1),
    Interval::new(0x1ee8b, 0x1ee9b, 1),
    Interval::new(0x1eea1, 0x1eea3, 1),
    Interval::new(0x1eea5, 0x1eea9, 1),
    Interval::new(0x1eeab, 0x1eebb, 1),
    Interval::new(0x1eef0, 0x1eef1, 1),
];

const ARMENIAN: &[Interval] = &[
    Interval::new(0x0531, 0x0556, 1),
    Interval::new(0x0559, 0x058a, 1),
    Interval::new(0x058d, 0x058f, 1),
    Interval::new(0xfb13, 0xfb17, 1),
];

const AVESTAN: &[Interval] = &[
    Interval::new(0x10b00, 0x10b35, 1),
    Interval::new(0x10b39, 0x10b3f, 1),
];

const BALINESE: &[Interval] = &[
    Interval::new(0x1b00, 0x1b4c, 1),
    Interval::new(0x1b50, 0x1b7e, 1),
];

const BAMUM: &[Interval] = &[
    Interval::new(0xa6a0, 0xa6f7, 1),
    Interval::new(0x16800, 0x16a38, 1),
];

const BASSA_VAH: &[Interval] = &[
    Interval::new(0x16ad0, 0x16aed, 1),
    Interval::new(0x16af0, 0x16af5, 1),
];

const BATAK: &[Interval] = &[
    Interval::new(0x1bc0, 0x1bf3, 1),
    Interval::new(0x1bfc, 0x1bff, 1),
];

const BENGALI: &[Interval] = &[
    Interval::new(0x0980, 0x0983, 1),
    Interval::new(0x0985, 0x098c, 1),
    Interval::new(0x098f, 0x0990, 1),
    Interval::new(0x0993, 0x09a8, 1),
    Interval::new(0x09aa, 0x09b0, 1),
    Interval::new(0x09b2, 0x09b2, 1),
    Interval::new(0x09b6, 0x09b9, 1),
    Interval::new(0x09bc, 0x09c4, 1),
    Interval::new(0x09c7, 0x09c8, 1),
    Interval::new(0x09cb, 0x09ce, 1),
    Interval::new(0x09d7, 0x09d7, 1),
    Interval::new(0x09dc, 0x09dd, 1),
    Interval::new(0x09df, 0x09e3, 1),
    Interval::new(0x09e6, 0x09fe, 1),
];

const BHAIKSUKI: &[Interval] = &[
    Interval::new(0x11c00, 0x11c08, 1),
    Interval::new(0x11c0a, 0x11c36, 1),
    Interval::new(0x11c38, 0x11c45, 1),
    Interval::new(0x11c50, 0x11c6c, 1),
];

const BOPOMOFO: &[Interval] = &[
    Interval::new(0x02ea, 0x02eb, 1),
    Interval::new(0x3105, 0x312f, 1),
    Interval::new(0x31a0, 0x31bf, 1),
];

const BRAHMI: &[Interval] = &[
    Interval::new(0x11000, 0x1104d, 1),
    Interval::new(0x11052, 0x11075, 1),
    Interval::new(0x1107f, 0x1107f, 1),
];

const BRAILLE: &[Interval] = &[
    Interval::new(0x2800, 0x28ff, 1),
];

const BUGINESE: &[Interval] = &[
    Interval::new(0x1a00, 0x1a1b, 1),
    Interval::new(0x1a1e, 0x1a1f, 1),
];

const BUHID: &[Interval] = &[
    Interval::new(0x1740, 0x1753, 1),
];

const CANADIAN_ABORIGINAL: &[Interval] = &[
    Interval::new(0x1400, 0x167f, 1),
    Interval::new(0x18b0, 0x18f5, 1),
    Interval::new(0x11ab0, 0x11abf, 1),
];

const CARIAN: &[Interval] = &[
    Interval::new(0x102a0, 0x102d0, 1),
];

const CAUCASIAN_ALBANIAN: &[Interval] = &[
    Interval::new(0x10530, 0x10563, 1),
    Interval::new(0x1056f, 0x1056f, 1),
];

const CHAKMA: &[Interval] = &[
    Interval::new(0x11100, 0x11134, 1),
    Interval::new(0x11136, 0x11147, 1),
];

const CHAM: &[Interval] = &[
    Interval::new(0xaa00, 0xaa36, 1),
    Interval::new(0xaa40, 0xaa4d, 1),
    Interval::new(0xaa50, 0xaa59, 1),
    Interval::new(0xaa5c, 0xaa5f, 1),
];

const CHEROKEE: &[Interval] = &[
    Interval::new(0x13a0, 0x13f5, 1),
    Interval::new(0x13f8, 0x13fd, 1),
    Interval::new(0xab70, 0xabbf, 1),
];

const CHORASMIAN: &[Interval] = &[
    Interval::new(0x10fb0, 0x10fcb, 1),
];

const COMMON: &[Interval] = &[
    Interval::new(0x0000, 0x0040, 1),
    Interval::new(0x005b, 0x0060, 1),
    Interval::new(0x007b, 0x00a9, 1),
    Interval::new(0x00ab, 0x00b9, 1),
    Interval::new(0x00bb, 0x00bf, 1),
    Interval::new(0x00d7, 0x00d7, 1),
    Interval::new(0x00f7, 0x00f7, 1),
    Interval::new(0x02b9, 0x02df, 1),
    Interval::new(0x02e5, 0x02e9, 1),
    Interval::new(0x02ec, 0x02ff, 1),
    Interval::new(0x0374, 0x0374, 1),
    Interval::new(0x037e, 0x037e, 1),
    Interval::new(0x0385, 0x0385, 1),
    Interval::new(0x0387, 0x0387, 1),
    Interval::new(0x0605, 0x0605, 1),
    Interval::new(0x060c, 0x060c, 1),
    Interval::new(0x061b, 0x061b, 1),
    Interval::new(0x061f, 0x061f, 1),
    Interval::new(0x0640, 0x0640, 1),
    Interval::new(0x06dd, 0x06dd, 1),
    Interval::new(0x08e2, 0x08e2, 1),
    Interval::new(0x0964, 0x0965, 1),
    Interval::new(0x0e3f, 0x0e3f, 1),
    Interval::new(0x0fd5, 0x0fd8, 1),
    Interval::new(0x10fb, 0x10fb, 1),
    Interval::new(0x16eb, 0x16ed, 1),
    Interval::new(0x1735, 0x1736, 1),
    Interval::new(0x1802, 0x1803, 1),
    Interval::new(0x1805, 0x1805, 1),
    Interval::new(0x1cd3, 0x1cd3, 1),
    Interval::new(0x1ce1, 0x1ce1, 1),
    Interval::new(0x1ce9, 0x1cec, 1),
    Interval::new(0x1cee, 0x1cf3, 1),
    Interval::new(0x1cf5, 0x1cf7, 1),
    Interval::new(0x1cfa, 0x1cfa, 1),
    Interval::new(0x2000, 0x200b, 1),
    Interval::new(0x200e, 0x2064, 1),
    Interval::new(0x2066, 0x2070, 1),
    Interval::new(0x2074, 0x207e, 1),
    Interval::new(0x2080, 0x208e, 1),
    Interval::new(0x20a0, 0x20c0, 1),
    Interval::new(0x2100, 0x2125, 1),
    Interval::new(0x2127, 0x2129, 1),
    Interval::new(0x212c, 0x2131, 1),
    Interval::new(0x2133, 0x214d, 1),
    Interval::new(0x214f, 0x215f, 1),
    Interval::new(0x2189, 0x218b, 1),
    Interval::new(0x2190, 0x2426, 1),
    Interval::new(0x2440, 0x244a, 1),
    Interval::new(0x2460, 0x27ff, 1),
    Interval::new(0x2900, 0x2b73, 1),
    Interval::new(0x2b76, 0x2b95, 1),
    Interval::new(0x2b97, 0x2bff, 1),
    Interval::new(0x2e00, 0x2e5d, 1),
    Interval::new(0x2ff0, 0x2ffb, 1),
    Interval::new(0x3000, 0x3004, 1),
    Interval::new(0x3006, 0x3006, 1),
    Interval::new(0x3008, 0x3020, 1),
    Interval::new(0x3030, 0x3037, 1),
    Interval::new(0x303c, 0x303f, 1),
    Interval::new(0x309b, 0x309c, 1),
    Interval::new(0x30a0, 0x30a0, 1),
    Interval::new(0x30fb, 0x30fc, 1),
    Interval::new(0x3190, 0x319f, 1),
    Interval::new(0x31c0, 0x31e3, 1),
    Interval::new(0x3220, 0x325f, 1),
    Interval::new(0x327f, 0x32cf, 1),
    Interval::new(0x32ff, 0x32ff, 1),
    Interval::new(0x3358, 0x33ff, 1),
    Interval::new(0x4dc0, 0x4dff, 1),
    Interval::new(0xa700, 0xa721, 1),
    Interval::new(0xa788, 0xa78a, 1),
    Interval::new(0xa830, 0xa839, 1),
    Interval::new(0xa92e, 0xa92e, 1),
    Interval::new(0xa9cf, 0xa9cf, 1),
    Interval::new(0xab5b, 0xab5b, 1),
    Interval::new(0xab6a, 0xab6b, 1),
    Interval::new(0xfd3e, 0xfd3f, 1),
    Interval::new(0xfe10, 0xfe19, 1),
    Interval::new(0xfe30, 0xfe52, 1),
    Interval::new(0xfe54, 0xfe66, 1),
    Interval::new(0xfe68, 0xfe6b, 1),
    Interval::new(0xfeff, 0xfeff, 1),
    Interval::new(0xff01, 0xff20, 1),
    Interval::new(0xff3b, 0xff40, 1),
    Interval::new(0xff5b, 0xff65, 1),
    Interval::new(0xff70, 0xff70, 1),
    Interval::new(0xff9e, 0xff9f, 1),
    Interval::new(0xffe0, 0xffe6, 1),
    Interval::new(0xffe8, 0xffee, 1),
    Interval::new(0xfff9, 0xfffd, 1),
    Interval::new(0x10100, 0x10102, 1),
    Interval::new(0x10107, 0x10133, 1),
    Interval::new(0x10137, 0x1013f, 1),
    Interval::new(0x10190, 0x1019c, 1),
    Interval::new(0x101d0, 0x101fc, 1),
    Interval::new(0x102e1, 0x102fb, 1),
    Interval::new(0x1bca0, 0x1bca3, 1),
    Interval::new(0x1cf50, 0x1cfc3, 1),
    Interval::new(0x1d000, 0x1d0f5, 1),
    Interval::new(0x1d100, 0x1d126, 1),
    Interval::new(0x1d129, 0x1d166, 1),
    Interval::new(0x1d16a, 0x1d17a, 1),
    Interval::new(0x1d183, 0x1d184, 1),
    Interval::new(0x1d18c, 0x1d1a9, 1),
    Interval::new(0x1d1ae, 0x1d1ea, 1),
    Interval::new(0x1d2e0, 0x1d2f3, 1),
    Interval::new(0x1d300, 0x1d356, 1),
    Interval::new(0x1d360, 0x1d378, 1),
    Interval::new(0x1d400, 0x1d454, 1),
    Interval::new(0x1d456, 0x1d49c, 1),
    Interval::new(0x1d49e, 0x1d49f, 1),
    Interval::new(0x1d4a2, 0x1d4a2, 1),
    Interval::new(0x1d4a5, 0x1d4a6, 1),
    Interval::new(0x1d4a9, 0x1d4ac, 1),
    Interval::new(0x1d4ae, 0x1d4b9, 1),
    Interval::new(0x1d4bb, 0x1d4bb, 1),
    Interval::new(0x1d4bd, 0x1d4c3, 1),
    Interval::new(0x1d4c5, 0x1d505, 1),
    Interval::new(0x1d507, 0x1d50a, 1),
    Interval::new(0x1d50d, 0x1d514, 1),
    Interval::new(0x1d516, 0x1d51c, 1),
    Interval::new(0x1d51e, 0x1d539, 1),
    Interval::new(0x1d53b, 0x1d53e, 1),
    Interval::new(0x1d540, 0x1d544, 1),
    Interval::new(0x1d546, 0x1d546, 1),
    Interval::new(0x1d54a, 0x1d550, 1),
    Interval::new(0x1d552, 0x1d6a5, 1),
    Interval::new(0x1d6a8, 0x1d7cb, 1),
    Interval::new(0x1d7ce, 0x1d7ff, 1),
    Interval::new(0x1ec71, 0x1ecb4, 1),
    Interval::new(0x1ed01, 0x1ed3d, 1),
    Interval::new(0x1f000, 0x1f02b, 1),
    Interval::new(0x1f030, 0x1f093, 1),
    Interval::new(0x1f0a0, 0x1f0ae, 1),
    Interval::new(0x1f0b1, 0x1f0bf, 1),
    Interval::new(0x1f0c1, 0x1f0cf, 1),
    Interval::new(0x1f0d1, 0x1f0f5, 1),
    Interval::new(0x1f100, 0x1f1ad, 1),
    Interval::new(0x1f1e6, 0x1f1ff, 1),
    Interval::new(0x1f201, 0x1f202, 1),
    Interval::new(0x1f210, 0x1f23b, 1),
    Interval::new(0x1f240, 0x1f248, 1),
    Interval::new(0x1f250, 0x1f251, 1),
    Interval::new(0x1f260, 0x1f265, 1),
    Interval::new(0x1f300, 0x1f6d7, 1),
    Interval::new(0x1f6dd, 0x1f6ec, 1),
    Interval::new(0x1f6f0, 0x1f6fc, 1),
    Interval::new(0x1f700, 0x1f773, 1),
    Interval::new(0x1f780, 0x1f7d8, 1),
    Interval::new(0x1f7e0, 0x1f7eb, 1),
    Interval::new(0x1f7f0, 0x1f7f0, 1),
    Interval::new(0x1f800, 0x1f80b, 1),
    Interval::new(0x1f810, 0x1f847, 1),
    Interval::new(0x1f850, 0x1f859, 1),
    Interval::new(0x1f860, 0x1f887, 1),
    Interval::new(0x1f890, 0x1f8ad, 1),
    Interval::new(0x1f8b0, 0x1f8b1, 1),
    Interval::new(0x1f900, 0x1fa53, 1),
    Interval::new(0x1fa60, 0x1fa6d, 1),
    Interval::new(0x1fa70, 0x1fa74, 1),
    Interval::new(0x1fa78, 0x1fa7c, 1),
    Interval::new(0x1fa80, 0x1fa86, 1),
    Interval::new(0x1fa90, 0x1faac, 1),
    Interval::new(0x1fab0, 0x1faba, 1),
    Interval::new(0x1fac0, 0x1fac5, 1),
    Interval::new(0x1fad0, 0x1fad9, 1),
    Interval::new(0x1fae0, 0x1fae7, 1),
    Interval::new(0x1faf0, 0x1faf6, 1),
    Interval::new(0x1fb00, 0x1fb92, 1),
    Interval::new(0x1fb94, 0x1fbca, 1),
    Interval::new(0x1fbf0, 0x1fbf9, 1),
    Interval::new(0xe0001, 0xe0001, 1),
    Interval::new(0xe0020, 0xe007f, 1),
];

const COPTIC: &[Interval] = &[
    Interval::new(0x03e2, 0x03ef, 1),
    Interval::new(0x2c80, 0x2cf3, 1),
    Interval::new(0x2cf9, 0x2cff, 1),
];

const CUNEIFORM: &[Interval] = &[
    Interval::new(0x12000, 0x12399, 1),
    Interval::new(0x12400, 0x1246e, 1),
    Interval::new(0x12470, 0x12474, 1),
    Interval::new(0x12480, 0x12543, 1),
];

const CYPRIOT: &[Interval] = &[
    Interval::new(0x10800, 0x10805, 1),
    Interval::new(0x10808, 0x10808, 1),
    Interval::new(0x1080a, 0x10835, 1),
    Interval::new(0x10837, 0x10838, 1),
    Interval::new(0x1083c, 0x1083c, 1),
    Interval::new(0x1083f, 0x1083f, 1),
];

const CYPRO_MINOAN: &[Interval] = &[
    Interval::new(0x12f90, 0x12ff2, 1),
];

const CYRILLIC: &[Interval] = &[
    Interval::new(0x0400, 0x0484, 1),
    Interval::new(0x0487, 0x052f, 1),
    Interval::new(0x1c80, 0x1c88, 1),
    Interval::new(0x1d2b, 0x1d2b, 1),
    Interval::new(0x1d78, 0x1d78, 1),
    Interval::new(0x2de0, 0x2dff, 1),
    Interval::new(0xa640, 0xa69f, 1),
    Interval::new(0xfe2e, 0xfe2f, 1),
];

const DESERET: &[Interval] = &[
    Interval::new(0x10400, 0x1044f, 1),
];

const DEVANAGARI: &[Interval] = &[
    Interval::new(0x0900, 0x0950, 1),
    Interval::new(0x0955, 0x0963, 1),
    Interval::new(0x0966, 0x097f, 1),
    Interval::new(0xa8e0, 0xa8ff, 1),
];

const DIVES_AKURU: &[Interval] = &[
    Interval::new(0x11900, 0x11906, 1),
    Interval::new(0x11909, 0x11909, 1),
    Interval::new(0x1190c, 0x11913, 1),
    Interval::new(0x11915, 0x11916, 1),
    Interval::new(0x11918, 0x11935, 1),
    Interval::new(0x11937, 0x11938, 1),
    Interval::new(0x1193b, 0x11946, 1),
    Interval::new(0x11950, 0x11959, 1),
];

const DOGRA: &[Interval] = &[
    Interval::new(0x11800, 0x1183b, 1),
];

const DUPLOYAN: &[Interval] = &[
    Interval::new(0x1bc00, 0x1bc6a, 1),
    Interval::new(0x1bc70, 0x1bc7c, 1),
    Interval::new(0x1bc80, 0x1bc88, 1),
    Interval::new(0x1bc90, 0x1bc99, 1),
    Interval::new(0x1bc9c, 0x1bc9f, 1),
];

const EGYPTIAN_HIEROGLYPHS: &[Interval] = &[
    Interval::new(0x13000, 0x1342e, 1),
    Interval::new(0x13430, 0x13438, 1),
];

const ELBASAN: &[Interval] = &[
    Interval::new(0x10500, 0x10527, 1),
];

const ELYMAIC: &[Interval] = &[
    Interval::new(0x10fe0, 0x10ff6, 1),
];

const ETHIOPIC: &[Interval] = &[
    Interval::new(0x1200, 0x1248, 1),
    Interval::new(0x124a, 0x124d, 1),
    Interval::new(0x1250, 0x1256, 1),
    Interval::new(0x1258, 0x1258, 1),
    Interval::new(0x125a, 0x125d, 1),
    Interval::new(0x1260, 0x1288, 1),
    Interval::new(0x128a, 0x128d, 1),
    Interval::new(0x1290, 0x12b0, 1),
    Interval::new(0x12b2, 0x12b5, 1),
    Interval::new(0x12b8, 0x12be, 1),
    Interval::new(0x12c0, 0x12c0, 1),
    Interval::new(0x12c2, 0x12c5, 1),
    Interval::new(0x12c8, 0x12d6, 1),
    Interval::new(0x12d8, 0x1310, 1),
    Interval::new(0x1312, 0x1315, 1),
    Interval::new(0x1318, 0x135a, 1),
    Interval::new(0x135d, 0x137c, 1),
    Interval::new(0x1380, 0x1399, 1),
    Interval::new(0x2d80, 0x2d96, 1),
    Interval::new(0x2da0, 0x2da6, 1),
    Interval::new(0x2da8, 0x2dae, 1),
    Interval::new(0x2db0, 0x2db6, 1),
    Interval::new(0x2db8, 0x2dbe, 1),
    Interval::new(0x2dc0, 0x2dc6, 1),
    Interval::new(0x2dc8, 0x2dce, 1),
    Interval::new(0x2dd0, 0x2dd6, 1),
    Interval::new(0x2dd8, 0x2dde, 1),
    Interval::new(0xab01, 0xab06, 1),
    Interval::new(0xab09, 0xab0e, 1),
    Interval::new(0xab11, 0xab16, 1),
    Interval::new(0xab20, 0xab26, 1),
    Interval::new(0xab28, 0xab2e, 1),
    Interval::new(0x1e7e0, 0x1e7e6, 1),
    Interval::new(0x1e7e8, 0x1e7eb, 1),
    Interval::new(0x1e7ed, 0x1e7ee, 1),
    Interval::new(0x1e7f0, 0x1e7fe, 1),
];

const GEORGIAN: &[Interval] = &[
    Interval::new(0x10a0, 0x10c5, 1),
    Interval::new(0x10c7, 0x10c7, 1),
    Interval::new(0x10cd, 0x10cd, 1),
    Interval::new(0x10d0, 0x10fa, 1),
    Interval::new(0x10fc, 0x10ff, 1),
    Interval::new(0x1c90, 0x1cba, 1),
    Interval::new(0x1cbd, 0x1cbf, 1),
    Interval::new(0x2d00, 0x2d25, 1),
    Interval::new(0x2d27, 0x2d27, 1),
    Interval::new(0x2d2d, 0x2d2d, 1),
];

const GLAGOLITIC: &[Interval] = &[
    Interval::new(0x2c00, 0x2c5f, 1),
    Interval::new(0x1e000, 0x1e006, 1),
    Interval::new(0x1e008, 0x1e018, 1),
    Interval::new(0x1e01b, 0x1e021, 1),
    Interval::new(0x1e023, 0x1e024, 1),
    Interval::new(0x1e026, 0x1e02a, 1),
];

const GOTHIC: &[Interval] = &[
    Interval::new(0x10330, 0x1034a, 1),
];

const GRANTHA: &[Interval] = &[
    Interval::new(0x11300, 0x11303, 1),
    Interval::new(0x11305, 0x1130c, 1),
    Interval::new(0x1130f, 0x11310, 1),
    Interval::new(0x11313, 0x11328, 1),
    Interval::new(0x1132a, 0x11330, 1),
    Interval::new(0x11332, 0x11333, 1),
    Interval::new(0x11335, 0x11339, 1),
    Interval::new(0x1133c, 0x11344, 1),
    Interval::new(0x11347, 0x11348, 1),
    Interval::new(0x1134b, 0x1134d, 1),
    Interval::new(0x11350, 0x11350, 1),
    Interval::new(0x11357, 0x11357, 1),
    Interval::new(0x1135d, 0x11363, 1),
    Interval::new(0x11366, 0x1136c, 1),
    Interval::new(0x11370, 0x11374, 1),
];

const GREEK: &[Interval] = &[
    Interval::new(0x0370, 0x0373, 1),
    Interval::new(0x0375, 0x0377, 1),
    Interval::new(0x037a, 0x037d, 1),
    Interval::new(0x037f, 0x037f, 1),
    Interval::new(0x0384, 0x0384, 1),
    Interval::new(0x0386, 0x0386, 1),
    Interval::new(0x0388, 0x038a, 1),
    Interval::new(0x038c, 0x038c, 1),
    Interval::new(0x038e, 0x03a1, 1),
    Interval::new(0x03a3, 0x03e1, 1),
    Interval::new(0x03f0, 0x03ff, 1),
    Interval::new(0x1d26, 0x1d2a, 1),
    Interval::new(0x1d5d, 0x1d61, 1),
    Interval::new(0x1d66, 0x1d6a, 1),
    Interval::new(0x1dbf, 0x1dbf, 1),
    Interval::new(0x1f00, 0x1f15, 1),
    Interval::new(0x1f18, 0x1f1d, 1),
    Interval::new(0x1f20, 0x1f45, 1),
    Interval::new(0x1f48, 0x1f4d, 1),
    Interval::new(0x1f50, 0x1f57, 1),
    Interval::new(0x1f59, 0x1f5d, 2),
    Interval::new(0x1f5f, 0x1f7d, 1),
    Interval::new(0x1f80, 0x1fb4, 1),
    Interval::new(0x1fb6, 0x1fc4, 1),
    Interval::new(0x1fc6, 0x1fd3, 1),
    Interval::new(0x1fd6, 0x1fdb, 1),
    Interval::new(0x1fdd, 0x1fef, 1),
    Interval::new(0x1ff2, 0x1ff4, 1),
    Interval::new(0x1ff6, 0x1ffe, 1),
    Interval::new(0x2126, 0x2126, 1),
    Interval::new(0xab65, 0xab65, 1),
    Interval::new(0x10140, 0x1018e, 1),
    Interval::new(0x101a0, 0x101a0, 1),
    Interval::new(0x1d200, 0x1d245, 1),
];

const GUJARATI: &[Interval] = &[
    Interval::new(0x0a81, 0x0a83, 1),
    Interval::new(0x0a85, 0x0a8d, 1),
    Interval::new(0x0a8f, 0x0a91, 1),
    Interval::new(0x0a93, 0x0aa8, 1),
    Interval::new(0x0aaa, 0x0ab0, 1),
    Interval::new(0x0ab2, 0x0ab3, 1),
    Interval::new(0x0ab5, 0x0ab9, 1),
    Interval::new(0x0abc, 0x0ac5, 1),
    Interval::new(0x0ac7, 0x0ac9, 1),
    Interval::new(0x0acb, 0x0acd, 1),
    Interval::new(0x0ad0, 0x0ad0, 1),
    Interval::new(0x0ae0, 0x0ae3, 1),
    Interval::new(0x0ae6, 0x0af1, 1),
    Interval::new(0x0af9, 0x0aff, 1),
];

const GUNJALA_GONDI: &[Interval] = &[
    Interval::new(0x11d60, 0x11d65, 1),
    Interval::new(0x11d67, 0x11d68, 1),
    Interval::new(0x11d6a, 0x11d8e, 1),
    Interval::new(0x11d90, 0x11d91, 1),
    Interval::new(0x11d93, 0x11d98, 1),
    Interval::new(0x11da0, 0x11da9, 1),
];

const GURMUKHI: &[Interval] = &[
    Interval::new(0x0a01, 0x0a03, 1),
    Interval::new(0x0a05, 0x0a0a, 1),
    Interval::new(0x0a0f, 0x0a10, 1),
    Interval::new(0x0a13, 0x0a28, 1),
    Interval::new(0x0a2a, 0x0a30, 1),
    Interval::new(0x0a32, 0x0a33, 1),
    Interval::new(0x0a35, 0x0a36, 1),
    Interval::new(0x0a38, 0x0a39, 1),
    Interval::new(0x0a3c, 0x0a3c, 1),
    Interval::new(0x0a3e, 0x0a42, 1),
    Interval::new(0x0a47, 0x0a48, 1),
    Interval::new(0x0a4b, 0x0a4d, 1),
    Interval::new(0x0a51, 0x0a51, 1),
    Interval::new(0x0a59, 0x0a5c, 1),
    Interval::new(0x0a5e, 0x0a5e, 1),
    Interval::new(0x0a66, 0x0a76, 1),
];

const HAN: &[Interval] = &[
    Interval::new(0x2e80, 0x2e99, 1),
    Interval::new(0x2e9b, 0x2ef3, 1),
    Interval::new(0x2f00, 0x2fd5, 1),
    Interval::new(0x3005, 0x3005, 1),
    Interval::new(0x3007, 0x3007, 1),
    Interval::new(0x3021, 0x3029, 1),
    Interval::new(0x3038, 0x303b, 1),
    Interval::new(0x3400, 0x4dbf, 1),
    Interval::new(0x4e00, 0x9fff, 1),
    Interval::new(0xf900, 0xfa6d, 1),
    Interval::new(0xfa70, 0xfad9, 1),
    Interval::new(0x16fe2, 0x16fe3, 1),
    Interval::new(0x16ff0, 0x16ff1, 1),
    Interval::new(0x20000, 0x2a6df, 1),
    Interval::new(0x2a700, 0x2b738, 1),
    Interval::new(0x2b740, 0x2b81d, 1),
    Interval::new(0x2b820, 0x2cea1, 1),
    Interval::new(0x2ceb0, 0x2ebe0, 1),
    Interval::new(0x2f800, 0x2fa1d, 1),
    Interval::new(0x30000, 0x3134a, 1),
];

const HANGUL: &[Interval] = &[
    Interval::new(0x1100, 0x11ff, 1),
    Interval::new(0x302e, 0x302f, 1),
    Interval::new(0x3131, 0x318e, 1),
    Interval::new(0x3200, 0x321e, 1),
    Interval::new(0x3260, 0x327e, 1),
    Interval::new(0xa960, 0xa97c, 1),
    Interval::new(0xac00, 0xd7a3, 1),
    Interval::new(0xd7b0, 0xd7c6, 1),
    Interval::new(0xd7cb, 0xd7fb, 1),
    Interval::new(0xffa0, 0xffbe, 1),
    Interval::new(0xffc2, 0xffc7, 1),
    Interval::new(0xffca, 0xffcf, 1),
    Interval::new(0xffd2, 0xffd7, 1),
    Interval::new(0xffda, 0xffdc, 1),
];

const HANIFI_ROHINGYA: &[Interval] = &[
    Interval::new(0x10d00, 0x10d27, 1),
    Interval::new(0x10d30, 0x10d39, 1),
];

const HANUNOO: &[Interval] = &[
    Interval::new(0x1720, 0x1734, 1),
];

const HATRAN: &[Interval] = &[
    Interval::new(0x108e0, 0x108f2, 1),
    Interval::new(0x108f4, 0x108f5, 1),
    Interval::new(0x108fb, 0x108ff, 1),
];

const HEBREW: &[Interval] = &[
    Interval::new(0x0591, 0x05c7, 1),
    Interval::new(0x05d0, 0x05ea, 1),
    Interval::new(0x05ef, 0x05f4, 1),
    Interval::new(0xfb1d, 0xfb36, 1),
    Interval::new(0xfb38, 0xfb3c, 1),
    Interval::new(0xfb3e, 0xfb3e, 1),
    Interval::new(0xfb40, 0xfb41, 1),
    Interval::new(0xfb43, 0xfb44, 1),
    Interval::new(0xfb46, 0xfb4f, 1),
];

const HIRAGANA: &[Interval] = &[
    Interval::new(0x3041, 0x3096, 1),
    Interval::new(0x309d, 0x309f, 1),
    Interval::new(0x1b001, 0x1b11f, 1),
    Interval::new(0x1b150, 0x1b152, 1),
    Interval::new(0x1f200, 0x1f200, 1),
];

const IMPERIAL_ARAMAIC: &[Interval] = &[
    Interval::new(0x10840, 0x10855, 1),
    Interval::new(0x10857, 0x1085f, 1),
];

const INHERITED: &[Interval] = &[
    Interval::new(0x0300, 0x036f, 1),
    Interval::new(0x0485, 0x0486, 1),
    Interval::new(0x064b, 0x0655, 1),
    Interval::new(0x0670, 0x0670, 1),
    Interval::new(0x0951, 0x0954, 1),
    Interval::new(0x1ab0, 0x1ace, 1),
    Interval::new(0x1cd0, 0x1cd2, 1),
    Interval::new(0x1cd4, 0x1ce0, 1),
    Interval::new(0x1ce2, 0x1ce8, 1),
    Interval::new(0x1ced, 0x1ced, 1),
    Interval::new(0x1cf4, 0x1cf4, 1),
    Interval::new(0x1cf8, 0x1cf9, 1),
    Interval::new(0x1dc0, 0x1dff, 1),
    Interval::new(0x200c, 0x200d, 1),
    Interval::new(0x20d0, 0x20f0, 1),
    Interval::new(0x302a, 0x302d, 1),
    Interval::new(0x3099, 0x309a, 1),
    Interval::new(0xfe00, 0xfe0f, 1),
    Interval::new(0xfe20, 0xfe2d, 1),
    Interval::new(0x101fd, 0x101fd, 1),
    Interval::new(0x102e0, 0x102e0, 1),
    Interval::new(0x1133b, 0x1133b, 1),
    Interval::new(0x1cf00, 0x1cf2d, 1),
    Interval::new(0x1cf30, 0x1cf46, 1),
    Interval::new(0x1d167, 0x1d169, 1),
    Interval::new(0x1d17b, 0x1d182, 1),
    Interval::new(0x1d185, 0x1d18b, 1),
    Interval::new(0x1d1aa, 0x1d1ad, 1),
    Interval::new(0xe0100, 0xe01ef, 1),
];

const INSCRIPTIONAL_PAHLAVI: &[Interval] = &[
    Interval::new(0x10b60, 0x10b72, 1),
    Interval::new(0x10b78, 0x10b7f, 1),
];

const INSCRIPTIONAL_PARTHIAN: &[Interval] = &[
    Interval::new(0x10b40, 0x10b55, 1),
    Interval::new(0x10b58, 0x10b5f, 1),
];

const JAVANESE: &[Interval] = &[
    Interval::new(0xa980, 0xa9cd, 1),
    Interval::new(0xa9d0, 0xa9d9, 1),
    Interval::new(0xa9de, 0xa9df, 1),
];

const KAITHI: &[Interval] = &[
    Interval::new(0x11080, 0x110c2, 1),
    Interval::new(0x110cd, 0x110cd, 1),
];

const KANNADA: &[Interval] = &[
    Interval::new(0x0c80, 0x0c8c, 1),
    Interval::new(0x0c8e, 0x0c90, 1),
    Interval::new(0x0c92, 0x0ca8, 1),
    Interval::new(0x0caa, 0x0cb3, 1),
    Interval::new(0x0cb5, 0x0cb9, 1),
    Interval::new(0x0cbc, 0x0cc4, 1),
    Interval::new(0x0cc6, 0x0cc8, 1),
    Interval::new(0x0cca, 0x0ccd, 1),
    Interval::new(0x0cd5, 0x0cd6, 1),
    Interval::new(0x0cdd, 0x0cde, 1),
    Interval::new(0x0ce0, 0x0ce3, 1),
    Interval::new(0x0ce6, 0x0cef, 1),
    Interval::new(0x0cf1, 0x0cf2, 1),
];

const KATAKANA: &[Interval] = &[
    Interval::new(0x30a1, 0x30fa, 1),
    Interval::new(0x30fd, 0x30ff, 1),
    Interval::new(0x31f0, 0x31ff, 1),
    Interval::new(0x32d0, 0x32fe, 1),
    Interval::new(0x3300, 0x3357, 1),
    Interval::new(0xff66, 0xff6f, 1),
    Interval::new(0xff71, 0xff9d, 1),
    Interval::new(0x1aff0, 0x1aff3, 1),
    Interval::new(0x1aff5, 0x1affb, 1),
    Interval::new(0x1affd, 0x1affe, 1),
    Interval::new(0x1b000, 0x1b000, 1),
    Interval::new(0x1b120, 0x1b122, 1),
    Interval::new(0x1b164, 0x1b167, 1),
];

const KAYAH_LI: &[Interval] = &[
    Interval::new(0xa900, 0xa92d, 1),
    Interval::new(0xa92f, 0xa92f, 1),
];

const KHAROSHTHI: &[Interval] = &[
    Interval::new(0x10a00, 0x10a03, 1),
    Interval::new(0x10a05, 0x10a06, 1),
    Interval::new(0x10a0c, 0x10a13, 1),
    Interval::new(0x10a15, 0x10a17, 1),
    Interval::new(0x10a19, 0x10a35, 1),
    Interval::new(0x10a38, 0x10a3a, 1),
    Interval::new(0x10a3f, 0x10a48, 1),
    Interval::new(0x10a50, 0x10a58, 1),
];

const KHITAN_SMALL_SCRIPT: &[Interval] = &[
    Interval::new(0x16fe4, 0x16fe4, 1),
    Interval::new(0x18b00, 0x18cd5, 1),
];

const KHMER: &[Interval] = &[
    Interval::new(0x1780, 0x17dd, 1),
    Interval::new(0x17e0, 0x17e9, 1),
    Interval::new(0x17f0, 0x17f9, 1),
    Interval::new(0x19e0, 0x19ff, 1),
];

const KHOJKI: &[Interval] = &[
    Interval::new(0x11200, 0x11211, 1),
    Interval::new(0x11213, 0x1123e, 1),
];

const KHUDAWADI: &[Interval] = &[
    Interval::new(0x112b0, 0x112ea, 1),
    Interval::new(0x112f0, 0x112f9, 1),
];

const LAO: &[Interval] = &[
    Interval::new(0x0e81, 0x0e82, 1),
    Interval::new(0x0e84, 0x0e84, 1),
    Interval::new(0x0e86, 0x0e8a, 1),
    Interval::new(0x0e8c, 0x0ea3, 1),
    Interval::new(0x0ea5, 0x0ea5, 1),
    Interval::new(0x0ea7, 0x0ebd, 1),
    Interval::new(0x0ec0, 0x0ec4, 1),
    Interval::new(0x0ec6, 0x0ec6, 1),
    Interval::new(0x0ec8, 0x0ecd, 1),
    Interval::new(0x0ed0, 0x0ed9, 1),
    Interval::new(0x0edc, 0x0edf, 1),
];

const LATIN: &[Interval] = &[
    Interval::new(0x0041, 0x005a, 1),
    Interval::new(0x0061, 0x007a, 1),
    Interval::new(0x00aa, 0x00aa, 1),
    Interval::new(0x00ba, 0x00ba, 1),
    Interval::new(0x00c0, 0x00d6, 1),
    Interval::new(0x00d8, 0x00f6, 1),
    Interval::new(0x00f8, 0x02b8, 1),
    Interval::new(0x02e0, 0x02e4, 1),
    Interval::new(0x1d00, 0x1d25, 1),
    Interval::new(0x1d2c, 0x1d5c, 1),
    Interval::new(0x1d62, 0x1d65, 1),
    Interval::new(0x1d6b, 0x1d77, 1),
    Interval::new(0x1d79, 0x1dbe, 1),
    Interval::new(0x1e00, 0x1eff, 1),
    Interval::new(0x2071, 0x2071, 1),
    Interval::new(0x207f, 0x207f, 1),
    Interval::new(0x2090, 0x209c, 1),
    Interval::new(0x212a, 0x212b, 1),
    Interval::new(0x2132, 0x2132, 1),
    Interval::new(0x214e, 0x214e, 1),
    Interval::new(0x2160, 0x2188, 1),
    Interval::new(0x2c60, 0x2c7f, 1),
    Interval::new(0xa722, 0xa787, 1),
    Interval::new(0xa78b, 0xa7ca, 1),
    Interval::new(0xa7d0, 0xa7d1, 1),
    Interval::new(0xa7d3, 0xa7d3, 1),
    Interval::new(0xa7d5, 0xa7d9, 1),
    Interval::new(0xa7f2, 0xa7ff, 1),
    Interval::new(0xab30, 0xab5a, 1),
    Interval::new(0xab5c, 0xab64, 1),
    Interval::new(0xab66, 0xab69, 1),
    Interval::new(0xfb00, 0xfb06, 1),
    Interval::new(0xff21, 0xff3a, 1),
    Interval::new(0xff41, 0xff5a, 1),
    Interval::new(0x10780, 0x10785, 1),
    Interval::new(0x10787, 0x107b0, 1),
    Interval::new(0x107b2, 0x107ba, 1),
    Interval::new(0x1df00, 0x1df1e, 1),
];

const LEPCHA: &[Interval] = &[
    Interval::new(0x1c00, 0x1c37, 1),
    Interval::new(0x1c3b, 0x1c49, 1),
    Interval::new(0x1c4d, 0x1c4f, 1),
];

const LIMBU: &[Interval] = &[
    Interval::new(0x1900, 0x191e, 1),
    Interval::new(0x1920, 0x192b, 1),
    Interval::new(0x1930, 0x193b, 1),
    Interval::new(0x1940, 0x1940, 1),
    Interval::new(0x1944, 0x194f, 1),
];

const LINEAR_A: &[Interval] = &[
    Interval::new(0x10600, 0x10736, 1),
    Interval::new(0x10740, 0x10755, 1),
    Interval::new(0x10760, 0x10767, 1),
];

const LINEAR_B: &[Interval] = &[
    Interval::new(0x10000, 0x1000b, 1),
    Interval::new(0x1000d, 0x10026, 1),
    Interval::new(0x10028, 0x1003a, 1),
    Interval::new(0x1003c, 0x1003d, 1),
    Interval::new(0x1003f, 0x1004d, 1),
    Interval::new(0x10050, 0x1005d, 1),
    Interval::new(0x10080, 0x100fa, 1),
];

const LISU: &[Interval] = &[
    Interval::new(0xa4d0, 0xa4ff, 1),
    Interval::new(0x11fb0, 0x11fb0, 1),
];

const LYCIAN: &[Interval] = &[
    Interval::new(0x10280, 0x1029c, 1),
];

const LYDIAN: &[Interval] = &[
    Interval::new(0x10920, 0x10939, 1),
    Interval::new(0x1093f, 0x1093f, 1),
];

const MAHAJANI: &[Interval] = &[
    Interval::new(0x11150, 0x11176, 1),
];

const MAKASAR: &[Interval] = &[
    Interval::new(0x11ee0, 0x11ef8, 1),
];

const MALAYALAM: &[Interval] = &[
    Interval::new(0x0d00, 0x0d0c, 1),
    Interval::new(0x0d0e, 0x0d10, 1),
    Interval::new(0x0d12, 0x0d44, 1),
    Interval::new(0x0d46, 0x0d48, 1),
    Interval::new(0x0d4a, 0x0d4f, 1),
    Interval::new(0x0d54, 0x0d63, 1),
    Interval::new(0x0d66, 0x0d7f, 1),
];

const MANDAIC: &[Interval] = &[
    Interval::new(0x0840, 0x085b, 1),
    Interval::new(0x085e, 0x085e, 1),
];

const MANICHAEAN: &[Interval] = &[
    Interval::new(0x10ac0, 0x10ae6, 1),
    Interval::new(0x10aeb, 0x10af6, 1),
];

const MARCHEN: &[Interval] = &[
    Interval::new(0x11c70, 0x11c8f, 1),
    Interval::new(0x11c92, 0x11ca7, 1),
    Interval::new(0x11ca9, 0x11cb6, 1),
];

const MASARAM_GONDI: &[Interval] = &[
    Interval::new(0x11d00, 0x11d06, 1),
    Interval::new(0x11d08, 0x11d09, 1),
    Interval::new(0x11d0b, 0x11d36, 1),
    Interval::new(0x11d3a, 0x11d3a, 1),
    Interval::new(0x11d3c, 0x11d3d, 1),
    Interval::new(0x11d3f, 0x11d47, 1),
    Interval::new(0x11d50, 0x11d59, 1),
];

const MEDEFAIDRIN: &[Interval] = &[
    Interval::new(0x16e40, 0x16e9a, 1),
];

const MEETEI_MAYEK: &[Interval] = &[
    Interval::new(0xaae0, 0xaaf6, 1),
    Interval::new(0xabc0, 0xabed, 1),
    Interval::new(0xabf0, 0xabf9, 1),
];

const MENDE_KIKAKUI: &[Interval] = &[
    Interval::new(0x1e800, 0x1e8c4, 1),
    Interval::new(0x1e8c7, 0x1e8d6, 1),
];

const MEROITIC_CURSIVE: &[Interval] = &[
    Interval::new(0x109a0, 0x109b7, 1),
    Interval::new(0x109bc, 0x109cf, 1),
    Interval::new(0x109d2, 0x109ff, 1),
];

const MEROITIC_HIEROGLYPHS: &[Interval] = &[
    Interval::new(0x10980, 0x1099f, 1),
];

const MIAO: &[Interval] = &[
    Interval::new(0x16f00, 0x16f4a, 1),
    Interval::new(0x16f4f, 0x16f87, 1),
    Interval::new(0x16f8f, 0x16f9f, 1),
];

const MODI: &[Interval] = &[
    Interval::new(0x11600, 0x11644, 1),
    Interval::new(0x11650, 0x11659, 1),
];

const MONGOLIAN: &[Interval] = &[
    Interval::new(0x1800, 0x1801, 1),
    Interval::new(0x1804, 0x1804, 1),
    Interval::new(0x1806, 0x1819, 1),
    Interval::new(0x1820, 0x1878, 1),
    Interval::new(0x1880, 0x18aa, 1),
    Interval::new(0x11660, 0x1166c, 1),
];

const MRO: &[Interval] = &[
    Interval::new(0x16a40, 0x16a5e, 1),
    Interval::new(0x16a60, 0x16a69, 1),
    Interval::new(0x16a6e, 0x16a6f, 1),
];

const MULTANI: &[Interval] = &[
    Interval::new(0x11280, 0x11286, 1),
    Interval::new(0x11288, 0x11288, 1),
    Interval::new(0x1128a, 0x1128d, 1),
    Interval::new(0x1128f, 0x1129d, 1),
    Interval::new(0x1129f, 0x112a9, 1),
];

const MYANMAR: &[Interval] = &[
    Interval::new(0x1000, 0x109f, 1),
    Interval::new(0xa9e0, 0xa9fe, 1),
    Interval::new(0xaa60, 0xaa7f, 1),
];

const NABATAEAN: &[Interval] = &[
    Interval::new(0x10880, 0x1089e, 1),
    Interval::new(0x108a7, 0x108af, 1),
];

const NANDINAGARI: &[Interval] = &[
    Interval::new(0x119a0, 0x119a7, 1),
    Interval::new(0x119aa, 0x119d7, 1),
    Interval::new(0x119da, 0x119e4, 1),
];

const NEW_TAI_LUE: &[Interval] = &[
    Interval::new(0x1980, 0x19ab, 1),
    Interval::new(0x19b0, 0x19c9, 1),
    Interval::new(0x19d0, 0x19da, 1),
    Interval::new(0x19de, 0x19df, 1),
];

const NEWA: &[Interval] = &[
    Interval::new(0x11400, 0x1145b, 1),
    Interval::new(0x1145d, 0x11461, 1),
];

const NKO: &[Interval] = &[
    Interval::new(0x07c0, 0x07fa, 1),
    Interval::new(0x07fd, 0x07ff, 1),
];

const NUSHU: &[Interval] = &[
    Interval::new(0x16fe1, 0x16fe1, 1),
    Interval::new(0x1b170, 0x1b2fb, 1),
];

const NYIAKENG_PUACHUE_HMONG: &[Interval] = &[
    Interval::new(0x1e100, 0x1e12c, 1),
    Interval::new(0x1e130, 0x1e13d, 1),
    Interval::new(0x1e140, 0x1e149, 1),
    Interval::new(0x1e14e, 0x1e14f, 1),
];

const OGHAM: &[Interval] = &[
    Interval::new(0x1680, 0x169c, 1),
];

const OL_CHIKI: &[Interval] = &[
    Interval::new(0x1c50, 0x1c7f, 1),
];

const OLD_HUNGARIAN: &[Interval] = &[
    Interval::new(0x10c80, 0x10cb2, 1),
    Interval::new(0x10cc0, 0x10cf2, 1),
    Interval::new(0x10cfa, 0x10cff, 1),
];

const OLD_ITALIC: &[Interval] = &[
    Interval::new(0x10300, 0x10323, 1),
    Interval::new(0x1032d, 0x1032f, 1),
];

const OLD_NORTH_ARABIAN: &[Interval] = &[
    Interval::new(0x10a80, 0x10a9f, 1),
];

const OLD_PERMIC: &[Interval] = &[
    Interval::new(0x10350, 0x1037a, 1),
];

const OLD_PERSIAN: &[Interval] = &[
    Interval::new(0x103a0, 0x103c3, 1),
    Interval::new(0x103c8, 0x103d5, 1),
];

const OLD_SOGDIAN: &[Interval] = &[
    Interval::new(0x10f00, 0x10f27, 1),
];

const OLD_SOUTH_ARABIAN: &[Interval] = &[
    Interval::new(0x10a60, 0x10a7f, 1),
];

const OLD_TURKIC: &[Interval] = &[
    Interval::new(0x10c00, 0x10c48, 1),
];

const OLD_UYGHUR: &[Interval] = &[
    Interval::new(0x10f70, 0x10f89, 1),
];

const ORIYA: &[Interval] = &[
    Interval::new(0x0b01, 0x0b03, 1),
    Interval::new(0x0b05, 0x0b0c, 1),
    Interval::new(0x0b0f, 0x0b10, 1),
    Interval::new(0x0b13, 0x0b28, 1),
    Interval::new(0x0b2a, 0x0b30, 1),
    Interval::new(0x0b32, 0x0b33, 1),
    Interval::new(0x0b35, 0x0b39, 1),
    Interval::new(0x0b3c, 0x0b44, 1),
    Interval::new(0x0b47, 0x0b48, 1),
    Interval::new(0x0b4b, 0x0b4d, 1),
    Interval::new(0x0b55, 0x0b57, 1),
    Interval::new(0x0b5c, 0x0b5d, 1),
    Interval::new(0x0b5f, 0x0b63, 1),
    Interval::new(0x0b66, 0x0b77, 1),
];

const OSAGE: &[Interval] = &[
    Interval::new(0x104b0, 0x104d3, 1),
    Interval::new(0x104d8, 0x104fb, 1),
];

const OSMANYA: &[Interval] = &[
    Interval::new(0x10480, 0x1049d, 1),
    Interval::new(0x104a0, 0x104a9, 1),
];

const PAHAWH_HMONG: &[Interval] = &[
    Interval::new(0x16b00, 0x16b45, 1),
    Interval::new(0x16b50, 0x16b59, 1),
    Interval::new(0x16b5b, 0x16b61, 1),
    Interval::new(0x16b63, 0x16b77, 1),
    Interval::new(0x16b7d, 0x16b8f, 1),
];

const PALMYRENE: &[Interval] = &[
    Interval::new(0x10860, 0x1087f, 1),
];

const PAU_CIN_HAU: &[Interval] = &[
    Interval::new(0x11ac0, 0x11af8, 1),
];

const PHAGS_PA: &[Interval] = &[
    Interval::new(0xa840, 0xa877, 1),
];

const PHOENICIAN: &[Interval] = &[
    Interval::new(0x10900, 0x1091b, 1),
    Interval::new(0x1091f, 0x1091f, 1),
];

const PSALTER_PAHLAVI: &[Interval] = &[
    Interval::new(0x10b80, 0x10b91, 1),
    Interval::new(0x10b99, 0x10b9c, 1),
    Interval::new(0x10ba9, 0x10baf, 1),
];

const REJANG: &[Interval] = &[
    Interval::new(0xa930, 0xa953, 1),
    Interval::new(0xa95f, 0xa95f, 1),
];

const RUNIC: &[Interval] = &[
    Interval::new(0x16a0, 0x16ea, 1),
    Interval::new(0x16ee, 0x16f8, 1),
];

const SAMARITAN: &[Interval] = &[
    Interval::new(0x0800, 0x082d, 1),
    Interval::new(0x0830, 0x083e, 1),
];

const SAURASHTRA: &[Interval] = &[
    Interval::new(0xa880, 0xa8c5, 1),
    Interval::new(0xa8ce, 0xa8d9, 1),
];

const SHARADA: &[Interval] = &[
    Interval::new(0x11180, 0x111df, 1),
];

const SHAVIAN: &[Interval] = &[
    Interval::new(0x10450, 0x1047f, 1),
];

const SIDDHAM: &[Interval] = &[
    Interval::new(0x11580, 0x115b5, 1),
    Interval::new(0x115b8, 0x115dd, 1),
];

const SIGNWRITING: &[Interval] = &[
    Interval::new(0x1d800, 0x1da8b, 1),
    Interval::new(0x1da9b, 0x1da9f, 1),
    Interval::new(0x1daa1, 0x1daaf, 1),
];

const SINHALA: &[Interval] = &[
    Interval::new(0x0d81, 0x0d83, 1),
    Interval::new(0x0d85, 0x0d96, 1),
    Interval::new(0x0d9a, 0x0db1, 1),
    Interval::new(0x0db3, 0x0dbb, 1),
    Interval::new(0x0dbd, 0x0dbd, 1),
    Interval::new(0x0dc0, 0x0dc6, 1),
    Interval::new(0x0dca, 0x0dca, 1),
    Interval::new(0x0dcf, 0x0dd4, 1),
    Interval::new(0x0dd6, 0x0dd6, 1),
    Interval::new(0x0dd8, 0x0ddf, 1),
    Interval::new(0x0de6, 0x0def, 1),
    Interval::new(0x0df2, 0x0df4, 1),
    Interval::new(0x111e1, 0x111f4, 1),
];

const SOGDIAN: &[Interval] = &[
    Interval::new(0x10f30, 0x10f59, 1),
];

const SORA_SOMPENG: &[Interval] = &[
    Interval::new(0x110d0, 0x110e8, 1),
    Interval::new(0x110f0, 0x110f9, 1),
];

const SOYOMBO: &[Interval] = &[
    Interval::new(0x11a50, 0x11aa2, 1),
];

const SUNDANESE: &[Interval] = &[
    Interval::new(0x1b80, 0x1bbf, 1),
    Interval::new(0x1cc0, 0x1cc7, 1),
];

const SYLOTI_NAGRI: &[Interval] = &[
    Interval::new(0xa800, 0xa82c, 1),
];

const SYRIAC: &[Interval] = &[
    Interval::new(0x0700, 0x070d, 1),
    Interval::new(0x070f, 0x074a, 1),
    Interval::new(0x074d, 0x074f, 1),
    Interval::new(0x0860, 0x086a, 1),
];

const TAGALOG: &[Interval] = &[
    Interval::new(0x1700, 0x1715, 1),
    Interval::new(0x171f, 0x171f, 1),
];

const TAGBANWA: &[Interval] = &[
    Interval::new(0x1760, 0x176c, 1),
    Interval::new(0x176e, 0x1770, 1),
    Interval::new(0x1772, 0x1773, 1),
];

const TAI_LE: &[Interval] = &[
    Interval::new(0x1950, 0x196d, 1),
    Interval::new(0x1970, 0x1974, 1),
];

const TAI_THAM: &[Interval] = &[
    Interval::new(0x1a20, 0x1a5e, 1),
    Interval::new(0x1a60, 0x1a7c, 1),
    Interval::new(0x1a7f, 0x1a89, 1),
    Interval::new(0x1a90, 0x1a99, 1),
    Interval::new(0x1aa0, 0x1aad, 1),
];

const TAI_VIET: &[Interval] = &[
    Interval::new(0xaa80, 0xaac2, 1),
    Interval::new(0xaadb, 0xaadf, 1),
];

const TAKRI: &[Interval] = &[
    Interval::new(0x11680, 0x116b9, 1),
    Interval::new(0x116c0, 0x116c9, 1),
];

const TAMIL: &[Interval] = &[
    Interval::new(0x0b82, 0x0b83, 1),
    Interval::new(0x0b85, 0x0b8a, 1),
    Interval::new(0x0b8e, 0x0b90, 1),
    Interval::new(0x0b92, 0x0b95, 1),
    Interval::new(0x0b99, 0x0b9a, 1),
    Interval::new(0x0b9c, 0x0b9c, 1),
    Interval::new(0x0b9e, 0x0b9f, 1),
    Interval::new(0x0ba3, 0x0ba4, 1),
    Interval::new(0x0ba8, 0x0baa, 1),
    Interval::new(0x0bae, 0x0bb9, 1),
    Interval::new(0x0bbe, 0x0bc2, 1),
    Interval::new(0x0bc6, 0x0bc8, 1),
    Interval::new(0x0bca, 0x0bcd, 1),
    Interval::new(0x0bd0, 0x0bd0, 1),
    Interval::new(0x0bd7, 0x0bd7, 1),
    Interval::new(0x0be6, 0x0bfa, 1),
    Interval::new(0x11fc0, 0x11ff1, 1),
    Interval::new(0x11fff, 0x11fff, 1),
];

const TANGSA: &[Interval] = &[
    Interval::new(0x16a70, 0x16abe, 1),
    Interval::new(0x16ac0, 0x16ac9, 1),
];

const TANGUT: &[Interval] = &[
    Interval::new(0x16fe0, 0x16fe0, 1),
    Interval::new(0x17000, 0x187f7, 1),
    Interval::new(0x18800, 0x18aff, 1),
    Interval::new(0x18d00, 0x18d08, 1),
];

const TELUGU: &[Interval] = &[
    Interval::new(0x0c00, 0x0c0c, 1),
    Interval::new(0x0c0e, 0x0c10, 1),
    Interval::new(0x0c12, 0x0c28, 1),
    Interval::new(0x0c2a, 0x0c39, 1),
    Interval::new(0x0c3c, 0x0c44, 1),
    Interval::new(0x0c46, 0x0c48, 1),
    Interval::new(0x0c4a, 0x0c4d, 1),
    Interval::new(0x0c55, 0x0c56, 1),
    Interval::new(0x0c58, 0x0c5a, 1),
    Interval::new(0x0c5d, 0x0c5d, 1),
    Interval::new(0x0c60, 0x0c63, 1),
    Interval::new(0x0c66, 0x0c6f, 1),
    Interval::new(0x0c77, 0x0c7f, 1),
];

const THAANA: &[Interval] = &[
    Interval::new(0x0780, 0x07b1, 1),
];

const THAI: &[Interval] = &[
    Interval::new(0x0e01, 0x0e3a, 1),
    Interval::new(0x0e40, 0x0e5b, 1),
];

const TIBETAN: &[Interval] = &[
    Interval::new(0x0f00, 0x0f47, 1),
    Interval::new(0x0f49, 0x0f6c, 1),
    Interval::new(0x0f71, 0x0f97, 1),
    Interval::new(0x0f99, 0x0fbc, 1),
    Interval::new(0x0fbe, 0x0fcc, 1),
    Interval::new(0x0fce, 0x0fd4, 1),
    Interval::new(0x0fd9, 0x0fda, 1),
];

const TIFINAGH: &[Interval] = &[
    Interval::new(0x2d30, 0x2d67, 1),
    Interval::new(0x2d6f, 0x2d70, 1),
    Interval::new(0x2d7f, 0x2d7f, 1),
];

const TIRHUTA: &[Interval] = &[
    Interval::new(0x11480, 0x114c7, 1),
    Interval::new(0x114d0, 0x114d9, 1),
];

const TOTO: &[Interval] = &[
    Interval::new(0x1e290, 0x1e2ae, 1),
];

const UGARITIC: &[Interval] = &[
    Interval::new(0x10380, 0x1039d, 1),
    Interval::new(0x1039f, 0x1039f, 1),
];

const VAI: &[Interval] = &[
    Interval::new(0xa500, 0xa62b, 1),
];

const VITHKUQI: &[Interval] = &[
    Interval::new(0x10570, 0x1057a, 1),
    Interval::new(0x1057c, 0x1058a, 1),
    Interval::new(0x1058c, 0x10592, 1),
    Interval::new(0x10594, 0x10595, 1),
    Interval::new(0x10597, 0x105a1, 1),
    Interval::new(0x105a3, 0x105b1, 1),
    Interval::new(0x105b3, 0x105b9, 1),
    Interval::new(0x105bb, 0x105bc, 1),
];

const WANCHO: &[Interval] = &[
    Interval::new(0x1e2c0, 0x1e2f9, 1),
    Interval::new(0x1e2ff, 0x1e2ff, 1),
];

const WARANG_CITI: &[Interval] = &[
    Interval::new(0x118a0, 0x118f2, 1),
    Interval::new(0x118ff, 0x118ff, 1),
];

const YEZIDI: &[Interval] = &[
    Interval::new(0x10e80, 0x10ea9, 1),
    Interval::new(0x10eab, 0x10ead, 1),
    Interval::new(0x10eb0, 0x10eb1, 1),
];

const YI: &[Interval] = &[
    Interval::new(0xa000, 0xa48c, 1),
    Interval::new(0xa490, 0xa4c6, 1),
];

const ZANABAZAR_SQUARE: &[Interval] = &[
    Interval::new(0x11a00, 0x11a47, 1),
];
