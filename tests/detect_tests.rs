use unidetect::{
    detect_scripts, detect_scripts_in_bytes, detect_scripts_in_utf16, unicode_scripts, Detector,
    DetectorConfig, Interval, RangeTable, Script, ScriptOrder,
};

// Helper to check the scripts found in an expression
fn assert_scripts(text: &str, expected: &str) {
    let expected: Vec<&str> = expected.split_whitespace().collect();
    assert_eq!(
        detect_scripts(text),
        expected,
        "Unexpected scripts for: {}",
        text
    );
}

// =============================================================================
// Single Script Tests
// =============================================================================

#[test]
fn should_detect_nothing_in_empty_string() {
    assert!(detect_scripts("").is_empty());
}

#[test]
fn should_detect_common() {
    assert_scripts("0123456789", "Common");
    assert_scripts("-", "Common");
    assert_scripts("   ", "Common");
}

#[test]
fn should_detect_latin() {
    assert_scripts("abcdefghijklmnopqrstuvwxyz", "Latin");
    assert_scripts("straße", "Latin");
}

#[test]
fn should_detect_han() {
    assert_scripts("北京", "Han");
}

#[test]
fn should_detect_cyrillic() {
    assert_scripts("москва", "Cyrillic");
}

#[test]
fn should_detect_japanese_kana() {
    assert_scripts("みんな", "Hiragana");
    assert_scripts("カタカナ", "Katakana");
}

#[test]
fn should_detect_braille() {
    assert_scripts("⠋⠗", "Braille");
}

#[test]
fn should_detect_right_to_left() {
    assert_scripts("קוֹם", "Hebrew");
    assert_scripts("ابوظبي", "Arabic");
}

#[test]
fn should_detect_brahmic() {
    assert_scripts("कॉम", "Devanagari");
    assert_scripts("இ", "Tamil");
    assert_scripts("భారత్", "Telugu");
    assert_scripts("ලංකා", "Sinhala");
}

#[test]
fn should_detect_hangul_and_georgian() {
    assert_scripts("닷넷", "Hangul");
    assert_scripts("გე", "Georgian");
}

// =============================================================================
// Mixed Script Tests
// =============================================================================

#[test]
fn should_report_first_occurrence_order() {
    assert_scripts("北京beijing", "Han Latin");
    assert_scripts("beijing北京", "Latin Han");
    assert_scripts("Hello, мир! 123", "Latin Common Cyrillic");
    assert_scripts("日本語のテキスト", "Han Hiragana Katakana");
}

#[test]
fn should_not_repeat_scripts() {
    assert_scripts("a1b2c3", "Latin Common");
    assert_scripts("ΑΒΓ αβγ ΔΕΖ", "Greek Common");
}

#[test]
fn should_report_combining_marks_as_inherited() {
    assert_scripts("a\u{0301}", "Latin Inherited");
}

#[test]
fn should_ignore_unassigned_codepoints() {
    assert_scripts("\u{0378}", "");
    assert_scripts("\u{0378}x", "Latin");
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn should_replace_ill_formed_utf8() {
    assert_eq!(detect_scripts_in_bytes("москва".as_bytes()), ["Cyrillic"]);
    assert_eq!(detect_scripts_in_bytes(b"\xD0"), ["Common"]);
    assert_eq!(detect_scripts_in_bytes(b"x\xFE\xFFy"), ["Latin", "Common"]);
}

#[test]
fn should_replace_unpaired_surrogates() {
    let units: Vec<u16> = "北京".encode_utf16().collect();
    assert_eq!(detect_scripts_in_utf16(&units), ["Han"]);
    assert_eq!(detect_scripts_in_utf16(&[0xDC00]), ["Common"]);
}

// =============================================================================
// Custom Table Tests
// =============================================================================

#[test]
fn should_pass_names_through_verbatim() {
    let table = RangeTable::new([
        Script::new("my digits", vec![Interval::range(0x30, 0x39)]),
        Script::new("Lower-ASCII", vec![Interval::range(0x61, 0x7A)]),
    ]);
    let detector = Detector::new(&table, DetectorConfig::default());
    assert_eq!(detector.detect("x9"), ["Lower-ASCII", "my digits"]);
}

#[test]
fn should_share_detector_between_threads() {
    let detector = Detector::new(
        unicode_scripts(),
        DetectorConfig {
            order: ScriptOrder::Table,
        },
    );
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["москва", "北京", "abc"]
            .into_iter()
            .map(|text| {
                let detector = &detector;
                scope.spawn(move || detector.detect(text))
            })
            .collect();

        let res: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(res, [vec!["Cyrillic"], vec!["Han"], vec!["Latin"]]);
    });
}
