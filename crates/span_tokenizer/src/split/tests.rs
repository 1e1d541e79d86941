use pretty_assertions::assert_eq;

use super::*;

fn build<T: SplitElement>(separators: &[T], options: SplitOptions) -> SplitConfig<T> {
    split_strategy(separators, options).expect("supported split configuration")
}

/// Tokenize `source` with `options` over `seps` and return the token text.
fn split_str<'a>(source: &'a str, seps: &str, options: SplitOptions) -> Vec<&'a str> {
    build(seps.as_bytes(), options)
        .tokenize(source.as_bytes())
        .map(|r| &source[r])
        .collect()
}

// === Forward ===

#[test]
fn forward_keep_empty() {
    assert_eq!(split_str("a,,b,", ",", SplitOptions::NONE), ["a", "", "b", ""]);
}

#[test]
fn forward_skip_empty() {
    assert_eq!(
        split_str("a,,b,", ",", SplitOptions::REMOVE_EMPTY_ENTRIES),
        ["a", "b"]
    );
}

#[test]
fn leading_separator_keeps_leading_empty() {
    assert_eq!(split_str(",a", ",", SplitOptions::NONE), ["", "a"]);
    assert_eq!(split_str(",", ",", SplitOptions::NONE), ["", ""]);
}

#[test]
fn no_separator_yields_whole_buffer() {
    assert_eq!(split_str("abc", ",", SplitOptions::NONE), ["abc"]);
    assert_eq!(
        split_str("abc", ",", SplitOptions::REMOVE_EMPTY_ENTRIES),
        ["abc"]
    );
}

#[test]
fn only_separators_with_skip_empty_yields_nothing() {
    assert!(split_str(",,,", ",", SplitOptions::REMOVE_EMPTY_ENTRIES).is_empty());
}

#[test]
fn multiple_separators() {
    assert_eq!(
        split_str("k=v;x:y", "=;:", SplitOptions::NONE),
        ["k", "v", "x", "y"]
    );
    assert_eq!(
        split_str("a\t b\n\nc", " \t\n\r", SplitOptions::REMOVE_EMPTY_ENTRIES),
        ["a", "b", "c"]
    );
}

#[test]
fn empty_input_yields_nothing_for_every_option_set() {
    for bits in 0..=SplitOptions::all().bits() {
        let options = SplitOptions::from_bits_truncate(bits);
        let config = build(b",", options);
        let mut tokenizer = config.tokenize(&[]);
        assert!(!tokenizer.advance(), "options {options:?}");
        assert!(tokenizer.is_exhausted());
    }
}

// === Trim ===

#[test]
fn trim_entries() {
    assert_eq!(split_str("  x  ", ",", SplitOptions::TRIM_ENTRIES), ["x"]);
    assert_eq!(
        split_str(" a , b ,  ,c", ",", SplitOptions::TRIM_ENTRIES),
        ["a", "b", "", "c"]
    );
}

#[test]
fn trim_then_remove_empty() {
    assert_eq!(
        split_str(
            " a , b ,  ,c",
            ",",
            SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES
        ),
        ["a", "b", "c"]
    );
}

#[test]
fn trimmed_ranges_stay_absolute() {
    let source = b"  ab , cd";
    let config = build(b",", SplitOptions::TRIM_ENTRIES);
    let ranges: Vec<_> = config.tokenize(source).collect();
    assert_eq!(ranges, [2..4, 7..9]);
}

#[test]
fn whitespace_trim_bounds() {
    let trim = WhitespaceTrim;
    assert_eq!(TrimStrategy::<u8>::trim(&trim, b"  x  "), 2..3);
    assert_eq!(TrimStrategy::<u8>::trim(&trim, b"xy"), 0..2);
    assert_eq!(TrimStrategy::<u8>::trim(&trim, b" \t\n"), 0..0);
    assert_eq!(TrimStrategy::<u8>::trim(&trim, b""), 0..0);
    let chars: Vec<char> = "\u{3000}word\u{2003}".chars().collect();
    assert_eq!(TrimStrategy::<char>::trim(&trim, &chars), 1..5);
}

#[test]
fn trim_over_chars_and_utf16() {
    let chars: Vec<char> = " α ; β ".chars().collect();
    let config = build(&[';'], SplitOptions::TRIM_ENTRIES);
    let tokens: Vec<String> = config
        .tokenize(&chars)
        .map(|r| chars[r].iter().collect())
        .collect();
    assert_eq!(tokens, ["α", "β"]);

    let units: Vec<u16> = " x | y ".encode_utf16().collect();
    let config = build(&[u16::from(b'|')], SplitOptions::TRIM_ENTRIES);
    let tokens: Vec<String> = config
        .tokenize(&units)
        .map(|r| String::from_utf16_lossy(&units[r]))
        .collect();
    assert_eq!(tokens, ["x", "y"]);
}

// === Unsupported configurations ===

#[test]
fn trim_over_integers_is_unsupported() {
    let options = SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES;
    let err = split_strategy(&[0i32], options).err();
    assert_eq!(
        err,
        Some(StrategyError::Unsupported {
            element: "i32",
            options,
        })
    );
}

#[test]
fn unsupported_error_message_names_type() {
    let err = split_strategy(&[0u64], SplitOptions::TRIM_ENTRIES).err();
    let message = err.map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("`u64`"), "{message}");
    assert!(message.contains("TRIM_ENTRIES"), "{message}");
}

#[test]
fn integers_split_without_trim() {
    let source = [1, 0, 2, 3, 0, 0, 4];
    let config = build(&[0], SplitOptions::NONE);
    let tokens: Vec<&[i32]> = config.tokenize(&source).map(|r| &source[r]).collect();
    assert_eq!(tokens, [&[1][..], &[2, 3][..], &[][..], &[4][..]]);
}

// === Reverse ===

#[test]
fn reverse_keep_empty() {
    assert_eq!(
        split_str("a,,b,", ",", SplitOptions::REVERSE),
        ["", "b", "", "a"]
    );
}

#[test]
fn reverse_skip_empty() {
    assert_eq!(
        split_str(
            ",a,,b,",
            ",",
            SplitOptions::REVERSE | SplitOptions::REMOVE_EMPTY_ENTRIES
        ),
        ["b", "a"]
    );
}

#[test]
fn reverse_keeps_offset_fixed() {
    let config = build(b",", SplitOptions::REVERSE);
    let mut tokenizer = config.tokenize(b"ab,cd");
    assert!(tokenizer.advance());
    assert_eq!(tokenizer.current(), 3..5);
    assert_eq!(tokenizer.source_offset(), 0);
    assert_eq!(tokenizer.remaining(), b"ab");
    assert!(tokenizer.advance());
    assert_eq!(tokenizer.current(), 0..2);
    assert!(!tokenizer.advance());
}

// === Config ===

#[test]
fn config_reflects_options() {
    let config = build(
        b",,;",
        SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES,
    );
    assert_eq!(config.trim(), Some(WhitespaceTrim));
    assert!(config.skip_empty());
    assert_eq!(config.boundary().separators().as_slice(), b",;");

    let plain = build(b",", SplitOptions::NONE);
    assert_eq!(plain.trim(), None);
    assert!(!plain.skip_empty());
}

#[test]
fn config_is_reusable_across_buffers() {
    let config = build(b" ", SplitOptions::REMOVE_EMPTY_ENTRIES);
    let first = b"one two";
    let second = b"  three ";
    assert_eq!(config.tokenize(first).count(), 2);
    assert_eq!(config.tokenize(second).collect::<Vec<_>>(), [2..7]);
}

#[test]
fn split_strategy_direct_use() {
    let split = Split::new(b"/", SplitOptions::REMOVE_EMPTY_ENTRIES);
    assert_eq!(split.next_boundary(b"//usr/bin"), Boundary::new(2..5, Some(6..9)));
    assert_eq!(split.next_boundary(b"bin"), Boundary::last(0..3));
    assert_eq!(split.next_boundary(b"///"), Boundary::last(3..3));
}
