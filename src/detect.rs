//! Finding which scripts a piece of text uses.

use once_cell::sync::Lazy;

use crate::range_table::{unicode_scripts, RangeTable};

/// The order scripts are tested in for each codepoint. This only shows in the output when one
/// codepoint is the first occurrence of several scripts at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptOrder {
    /// Byte-wise order of the script names
    #[default]
    Alphabetical,
    /// The order the scripts were given to the table in
    Table,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorConfig {
    pub order: ScriptOrder,
}

/// Reports the scripts used by text, in the order they first occur, each at most once.
#[derive(Debug, Clone)]
pub struct Detector<'t> {
    table: &'t RangeTable,
    /// Indices into the table's scripts, in the order they are tested
    order: Vec<usize>,
}
impl<'t> Detector<'t> {
    pub fn new(table: &'t RangeTable, conf: DetectorConfig) -> Detector<'t> {
        let scripts = table.scripts();
        let mut order: Vec<usize> = (0..scripts.len()).collect();
        if conf.order == ScriptOrder::Alphabetical {
            order.sort_by(|&a, &b| scripts[a].name().cmp(scripts[b].name()));
        }

        Detector { table, order }
    }

    /// A detector over the built-in Unicode table
    pub fn unicode() -> Detector<'static> {
        Detector::new(unicode_scripts(), DetectorConfig::default())
    }

    pub fn table(&self) -> &'t RangeTable {
        self.table
    }

    pub fn detect(&self, text: &str) -> Vec<&'t str> {
        self.detect_chars(text.chars())
    }

    /// Ill-formed UTF-8 is decoded as U+FFFD rather than skipped
    pub fn detect_bytes(&self, bytes: &[u8]) -> Vec<&'t str> {
        self.detect_chars(String::from_utf8_lossy(bytes).chars())
    }

    /// Unpaired surrogates are decoded as U+FFFD rather than skipped
    pub fn detect_utf16(&self, units: &[u16]) -> Vec<&'t str> {
        self.detect_chars(
            char::decode_utf16(units.iter().copied())
                .map(|ch| ch.unwrap_or(char::REPLACEMENT_CHARACTER)),
        )
    }

    pub fn detect_chars(&self, chars: impl IntoIterator<Item = char>) -> Vec<&'t str> {
        let table = self.table;
        let scripts = table.scripts();
        let mut seen = vec![false; scripts.len()];
        let mut res = Vec::new();

        for ch in chars {
            let cp = u32::from(ch);
            for &i in self.order.iter() {
                if !seen[i] && scripts[i].contains(cp) {
                    seen[i] = true;
                    res.push(scripts[i].name());
                }
            }

            // Nothing left to find
            if res.len() == scripts.len() {
                break;
            }
        }

        res
    }
}

static UNICODE_DETECTOR: Lazy<Detector<'static>> = Lazy::new(Detector::unicode);

/// The Unicode scripts used in `text`, in order of first occurrence.
///
/// ```
/// assert_eq!(unidetect::detect_scripts("北京beijing"), ["Han", "Latin"]);
/// assert!(unidetect::detect_scripts("").is_empty());
/// ```
pub fn detect_scripts(text: &str) -> Vec<&'static str> {
    UNICODE_DETECTOR.detect(text)
}

/// [`detect_scripts`] over UTF-8 that may be ill-formed
pub fn detect_scripts_in_bytes(bytes: &[u8]) -> Vec<&'static str> {
    UNICODE_DETECTOR.detect_bytes(bytes)
}

/// [`detect_scripts`] over UTF-16 that may contain unpaired surrogates
pub fn detect_scripts_in_utf16(units: &[u16]) -> Vec<&'static str> {
    UNICODE_DETECTOR.detect_utf16(units)
}

#[cfg(test)]
mod tests {
    use crate::range_table::{Interval, RangeTable, Script};

    use super::{Detector, DetectorConfig, ScriptOrder};

    /// Two scripts sharing the digits, listed out of alphabetical order
    fn overlapping() -> RangeTable {
        RangeTable::new([
            Script::new(
                "Zeta",
                vec![Interval::range(0x30, 0x39), Interval::range(0x61, 0x7A)],
            ),
            Script::new(
                "Alpha",
                vec![Interval::range(0x30, 0x39), Interval::range(0x41, 0x5A)],
            ),
        ])
    }

    #[test]
    fn alphabetical_tie_break() {
        let table = overlapping();
        let detector = Detector::new(&table, DetectorConfig::default());
        assert_eq!(detector.detect("7"), ["Alpha", "Zeta"]);
        assert_eq!(detector.detect("a7"), ["Zeta", "Alpha"]);
        assert_eq!(detector.detect("A"), ["Alpha"]);
    }

    #[test]
    fn table_tie_break() {
        let table = overlapping();
        let detector = Detector::new(
            &table,
            DetectorConfig {
                order: ScriptOrder::Table,
            },
        );
        assert_eq!(detector.detect("7"), ["Zeta", "Alpha"]);
        assert_eq!(detector.detect("A7"), ["Alpha", "Zeta"]);
    }

    #[test]
    fn empty_table() {
        let table = RangeTable::default();
        let detector = Detector::new(&table, DetectorConfig::default());
        assert!(detector.detect("anything at all").is_empty());
        assert!(detector.detect("").is_empty());
    }

    #[test]
    fn malformed_intervals_are_skipped() {
        let table = RangeTable::new([
            Script::new("Broken", vec![Interval::new(0x61, 0x7A, 0)]),
            Script::new("Inverted", vec![Interval::range(0x7A, 0x61)]),
            Script::new("Fine", vec![Interval::range(0x61, 0x7A)]),
        ]);
        let detector = Detector::new(&table, DetectorConfig::default());
        assert_eq!(detector.detect("abc"), ["Fine"]);
    }

    #[test]
    fn strided_script() {
        let table = RangeTable::new([Script::new("Even", vec![Interval::new(0x30, 0x38, 2)])]);
        let detector = Detector::new(&table, DetectorConfig::default());
        assert!(detector.detect("13579").is_empty());
        assert_eq!(detector.detect("1357 8"), ["Even"]);
    }

    #[test]
    fn stops_once_everything_is_seen() {
        let table = overlapping();
        let detector = Detector::new(&table, DetectorConfig::default());
        // Would panic if consumed past the first character
        let chars = "0".chars().chain(std::iter::repeat_with(|| -> char { unreachable!() }));
        assert_eq!(detector.detect_chars(chars), ["Alpha", "Zeta"]);
    }

    #[test]
    fn ill_formed_input() {
        let detector = Detector::unicode();
        assert_eq!(detector.detect_bytes(b"ab\xFF"), ["Latin", "Common"]);
        assert_eq!(detector.detect_bytes(b"\xC0"), ["Common"]);
        assert_eq!(detector.detect_bytes(b""), Vec::<&str>::new());
        // 'h', 'i', lone high surrogate
        assert_eq!(detector.detect_utf16(&[0x68, 0x69, 0xD800]), ["Latin", "Common"]);
        // Surrogate pair for U+1F600, which is Common
        assert_eq!(detector.detect_utf16(&[0xD83D, 0xDE00]), ["Common"]);
    }
}
