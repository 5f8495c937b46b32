use std::collections::HashSet;

use proptest::prelude::*;
use unidetect::{detect_scripts, detect_scripts_in_bytes, unicode_scripts, Interval};

fn text_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z0-9 ,.!?]{0,24}",
        "[а-яА-Я0-9 ]{0,24}",
        "[\u{4E00}-\u{4E80}a-z]{0,24}",
        "[\u{3041}-\u{3096}\u{30A1}-\u{30FA}\u{3000}-\u{3003}]{0,24}",
        "[\u{0591}-\u{05F4}\u{0600}-\u{06FF}\u{0300}-\u{036F} ]{0,24}",
    ]
    .boxed()
}

/// Where each reported script first occurs, by a direct scan of the table
fn first_positions(text: &str, scripts: &[&str]) -> Vec<usize> {
    let table = unicode_scripts();
    scripts
        .iter()
        .map(|name| {
            let script = table.get(name).expect("reported script is in the table");
            text.chars()
                .position(|ch| script.contains_char(ch))
                .expect("reported script occurs in the text")
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn never_repeats_a_script(text in text_strategy()) {
        let scripts = detect_scripts(&text);
        let unique: HashSet<&str> = scripts.iter().copied().collect();
        prop_assert_eq!(unique.len(), scripts.len());
    }

    #[test]
    fn reports_every_script_present(text in text_strategy()) {
        let scripts: HashSet<&str> = detect_scripts(&text).into_iter().collect();
        for ch in text.chars() {
            for script in unicode_scripts().scripts_of(ch) {
                prop_assert!(scripts.contains(script.name()));
            }
        }
    }

    #[test]
    fn ordered_by_first_occurrence(text in text_strategy()) {
        let scripts = detect_scripts(&text);
        let positions = first_positions(&text, &scripts);
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn concatenation_extends_the_prefix(a in text_strategy(), b in text_strategy()) {
        let left = detect_scripts(&a);
        let right = detect_scripts(&b);
        let joined = detect_scripts(&format!("{}{}", a, b));

        prop_assert_eq!(&joined[..left.len()], &left[..]);
        let expected_tail: Vec<&str> = right
            .iter()
            .copied()
            .filter(|name| !left.contains(name))
            .collect();
        prop_assert_eq!(&joined[left.len()..], &expected_tail[..]);
    }

    #[test]
    fn detection_is_repeatable(text in text_strategy()) {
        prop_assert_eq!(detect_scripts(&text), detect_scripts(&text));
    }

    #[test]
    fn membership_is_repeatable(cp in 0u32..=0x10FFFF, lo in 0u32..0x200, len in 0u32..0x200, stride in 0u32..8) {
        let interval = Interval::new(lo, lo + len, stride);
        prop_assert_eq!(interval.contains(cp), interval.contains(cp));
        prop_assert_eq!(interval.contains(cp % 0x400), interval.contains(cp % 0x400));
        for script in unicode_scripts() {
            prop_assert_eq!(script.contains(cp), script.contains(cp));
        }
    }

    #[test]
    fn arbitrary_bytes_never_fail(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let scripts = detect_scripts_in_bytes(&bytes);
        if bytes.is_empty() {
            prop_assert!(scripts.is_empty());
        }
        let unique: HashSet<&str> = scripts.iter().copied().collect();
        prop_assert_eq!(unique.len(), scripts.len());
    }
}
