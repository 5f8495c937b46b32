//! Scripts described as sets of codepoint intervals, and the table that holds them.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, warn};

use crate::tables;

/// The largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// A closed range `[lo, hi]` of codepoints where only every `stride`th value, counting from `lo`,
/// is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub lo: u32,
    pub hi: u32,
    pub stride: u32,
}
impl Interval {
    pub const fn new(lo: u32, hi: u32, stride: u32) -> Interval {
        Interval { lo, hi, stride }
    }

    /// An interval that includes every codepoint in `[lo, hi]`
    pub const fn range(lo: u32, hi: u32) -> Interval {
        Interval::new(lo, hi, 1)
    }

    /// An interval of exactly one codepoint
    pub const fn single(cp: u32) -> Interval {
        Interval::new(cp, cp, 1)
    }

    /// Whether `cp` lies in `[lo, hi]` and sits on the stride.
    /// A zero stride or an inverted range never matches anything.
    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        if self.stride == 0 || cp < self.lo || cp > self.hi {
            return false;
        }

        self.stride == 1 || (cp - self.lo) % self.stride == 0
    }

    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        self.contains(u32::from(ch))
    }

    pub fn is_well_formed(&self) -> bool {
        self.stride > 0 && self.lo <= self.hi && self.hi <= MAX_CODEPOINT
    }

    fn check(&self, script: &str) -> Result<(), TableError> {
        if self.stride == 0 {
            Err(TableError::ZeroStride {
                script: script.to_owned(),
                lo: self.lo,
                hi: self.hi,
            })
        } else if self.lo > self.hi {
            Err(TableError::InvertedInterval {
                script: script.to_owned(),
                lo: self.lo,
                hi: self.hi,
            })
        } else if self.hi > MAX_CODEPOINT {
            Err(TableError::OutOfRange {
                script: script.to_owned(),
                hi: self.hi,
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Script {
    name: Cow<'static, str>,
    intervals: Cow<'static, [Interval]>,
}
impl Script {
    pub const fn from_static(name: &'static str, intervals: &'static [Interval]) -> Script {
        Script {
            name: Cow::Borrowed(name),
            intervals: Cow::Borrowed(intervals),
        }
    }

    pub fn new(
        name: impl Into<Cow<'static, str>>,
        intervals: impl Into<Cow<'static, [Interval]>>,
    ) -> Script {
        Script {
            name: name.into(),
            intervals: intervals.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Whether any of the intervals contain `cp`.
    /// The intervals are not assumed to be sorted or disjoint, so every one of them may be checked.
    pub fn contains(&self, cp: u32) -> bool {
        self.intervals.iter().any(|interval| interval.contains(cp))
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.contains(u32::from(ch))
    }

    fn check(&self) -> Result<(), TableError> {
        if self.name.is_empty() {
            return Err(TableError::EmptyName);
        }

        self.intervals
            .iter()
            .try_for_each(|interval| interval.check(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("script with an empty name")]
    EmptyName,
    #[error("script `{name}` is defined more than once")]
    DuplicateScript { name: String },
    #[error("script `{script}` has an inverted interval {lo:#x}..={hi:#x}")]
    InvertedInterval { script: String, lo: u32, hi: u32 },
    #[error("script `{script}` has a zero stride on interval {lo:#x}..={hi:#x}")]
    ZeroStride { script: String, lo: u32, hi: u32 },
    #[error("script `{script}` has an interval ending at {hi:#x}, past the last codepoint")]
    OutOfRange { script: String, hi: u32 },
}

/// An immutable mapping from script name to the intervals of that script.
/// Scripts keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    scripts: Vec<Script>,
}
impl RangeTable {
    /// Build a table without rejecting anything.
    /// Scripts that share a name have their intervals merged into the first occurrence, and
    /// malformed intervals are kept as-is since they can never match.
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> RangeTable {
        let mut res: Vec<Script> = Vec::new();
        for script in scripts {
            for interval in script.intervals.iter() {
                if let Err(err) = interval.check(&script.name) {
                    warn!(%err, "malformed interval will never match");
                }
            }

            match res.iter_mut().find(|existing| existing.name == script.name) {
                Some(existing) => {
                    warn!(name = %script.name, "merging duplicate script definition");
                    existing
                        .intervals
                        .to_mut()
                        .extend_from_slice(&script.intervals);
                }
                None => res.push(script),
            }
        }

        let table = RangeTable { scripts: res };
        debug!(
            scripts = table.len(),
            intervals = table.interval_count(),
            "built range table"
        );
        table
    }

    /// Build a table, rejecting empty names, duplicate names and malformed intervals.
    pub fn try_new(scripts: impl IntoIterator<Item = Script>) -> Result<RangeTable, TableError> {
        let mut res: Vec<Script> = Vec::new();
        for script in scripts {
            script.check()?;
            if res.iter().any(|existing| existing.name == script.name) {
                return Err(TableError::DuplicateScript {
                    name: script.name.into_owned(),
                });
            }

            res.push(script);
        }

        Ok(RangeTable { scripts: res })
    }

    /// Report the first malformed name or interval, if there is any.
    /// Names are always unique here, since both constructors rule duplicates out.
    pub fn validate(&self) -> Result<(), TableError> {
        self.scripts.iter().try_for_each(Script::check)
    }

    pub fn get(&self, name: &str) -> Option<&Script> {
        self.scripts.iter().find(|script| script.name == name)
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Script> {
        self.scripts.iter()
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Every script that contains `ch`, in table order
    pub fn scripts_of(&self, ch: char) -> impl Iterator<Item = &Script> + '_ {
        self.scripts
            .iter()
            .filter(move |script| script.contains_char(ch))
    }

    fn interval_count(&self) -> usize {
        self.scripts
            .iter()
            .map(|script| script.intervals.len())
            .sum()
    }
}
impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a Script;
    type IntoIter = std::slice::Iter<'a, Script>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.iter()
    }
}
impl FromIterator<Script> for RangeTable {
    fn from_iter<T: IntoIterator<Item = Script>>(iter: T) -> Self {
        RangeTable::new(iter)
    }
}

static UNICODE_SCRIPTS: Lazy<RangeTable> = Lazy::new(|| {
    let (major, minor, patch) = tables::UNICODE_VERSION;
    debug!("initializing Unicode {}.{}.{} script table", major, minor, patch);
    RangeTable::new(tables::SCRIPTS.iter().cloned())
});

/// The built-in table of every Unicode script, built on first use
pub fn unicode_scripts() -> &'static RangeTable {
    &UNICODE_SCRIPTS
}

#[cfg(test)]
mod tests {
    use super::{unicode_scripts, Interval, RangeTable, Script, TableError};

    const GREEKISH: &[Interval] = &[Interval::range(0x0370, 0x0373), Interval::single(0x0375)];

    #[test]
    fn interval_contiguous() {
        let interval = Interval::range(0x41, 0x5A);
        assert!(interval.contains(0x41));
        assert!(interval.contains(0x4D));
        assert!(interval.contains(0x5A));
        assert!(!interval.contains(0x40));
        assert!(!interval.contains(0x5B));
    }

    #[test]
    fn interval_strided() {
        let interval = Interval::new(0x1F59, 0x1F5F, 2);
        assert!(interval.contains(0x1F59));
        assert!(interval.contains(0x1F5B));
        assert!(interval.contains(0x1F5F));
        assert!(!interval.contains(0x1F5A));
        assert!(!interval.contains(0x1F5E));
        assert!(!interval.contains(0x1F61));
    }

    #[test]
    fn interval_malformed_never_matches() {
        let zero = Interval::new(0x10, 0x20, 0);
        let inverted = Interval::range(0x20, 0x10);
        for cp in 0..0x30 {
            assert!(!zero.contains(cp));
            assert!(!inverted.contains(cp));
        }
        assert!(!zero.is_well_formed());
        assert!(!inverted.is_well_formed());
        assert!(!Interval::range(0x10FFFF, 0x110000).is_well_formed());
        assert!(Interval::single(0x10FFFF).is_well_formed());
    }

    #[test]
    fn script_checks_every_interval() {
        // Deliberately unsorted
        let script = Script::new(
            "Test",
            vec![Interval::range(0x300, 0x310), Interval::range(0x10, 0x20)],
        );
        assert!(script.contains(0x15));
        assert!(script.contains(0x305));
        assert!(!script.contains(0x100));
        assert!(!Script::new("Empty", Vec::new()).contains(0x15));
    }

    #[test]
    fn lenient_merges_duplicates() {
        let table = RangeTable::new([
            Script::from_static("Greek", GREEKISH),
            Script::new("Latin", vec![Interval::range(0x41, 0x5A)]),
            Script::new("Greek", vec![Interval::single(0x3A3)]),
        ]);
        assert_eq!(table.len(), 2);
        let greek = table.get("Greek").unwrap();
        assert_eq!(greek.intervals().len(), 3);
        assert!(greek.contains(0x3A3));
        assert!(greek.contains(0x375));
        // Static data is left untouched
        assert_eq!(GREEKISH.len(), 2);
    }

    #[test]
    fn strict_rejects() {
        assert_eq!(
            RangeTable::try_new([Script::new("", Vec::new())]),
            Err(TableError::EmptyName)
        );
        assert_eq!(
            RangeTable::try_new([
                Script::from_static("Greek", GREEKISH),
                Script::from_static("Greek", GREEKISH),
            ]),
            Err(TableError::DuplicateScript {
                name: "Greek".to_string()
            })
        );
        assert_eq!(
            RangeTable::try_new([Script::new("Bad", vec![Interval::new(1, 5, 0)])]),
            Err(TableError::ZeroStride {
                script: "Bad".to_string(),
                lo: 1,
                hi: 5
            })
        );
        assert_eq!(
            RangeTable::try_new([Script::new("Bad", vec![Interval::range(5, 1)])]),
            Err(TableError::InvertedInterval {
                script: "Bad".to_string(),
                lo: 5,
                hi: 1
            })
        );
        assert_eq!(
            RangeTable::try_new([Script::new("Bad", vec![Interval::range(0x10FFF0, 0x110000)])]),
            Err(TableError::OutOfRange {
                script: "Bad".to_string(),
                hi: 0x110000
            })
        );
        assert!(RangeTable::try_new([Script::from_static("Greek", GREEKISH)]).is_ok());
    }

    #[test]
    fn validate_lenient_table() {
        let table = RangeTable::new([Script::new("Bad", vec![Interval::range(0, 0x110000)])]);
        assert_eq!(
            table.validate(),
            Err(TableError::OutOfRange {
                script: "Bad".to_string(),
                hi: 0x110000
            })
        );
        assert_eq!(RangeTable::default().validate(), Ok(()));
    }

    #[test]
    fn unicode_table_is_well_formed() {
        let table = unicode_scripts();
        assert_eq!(table.validate(), Ok(()));
        assert!(table.get("Latin").is_some());
        assert!(table.get("Common").is_some());
        assert!(table.get("Inherited").is_some());
        assert!(table.get("Unknown").is_none());
    }

    #[test]
    fn unicode_scripts_of() {
        let table = unicode_scripts();
        let names = |ch: char| table.scripts_of(ch).map(Script::name).collect::<Vec<_>>();
        assert_eq!(names('a'), ["Latin"]);
        assert_eq!(names('ж'), ["Cyrillic"]);
        assert_eq!(names('7'), ["Common"]);
        assert_eq!(names('\u{0301}'), ["Inherited"]);
        // Unassigned
        assert!(names('\u{0378}').is_empty());
    }
}
