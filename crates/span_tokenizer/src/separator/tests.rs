use super::*;
use crate::ByteTable;

#[test]
fn new_drops_duplicates_in_order() {
    let set = SeparatorSet::new(b",;,;\t");
    assert_eq!(set.as_slice(), b",;\t");
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[test]
fn empty_set_matches_nothing() {
    let set = SeparatorSet::<u8>::new(&[]);
    assert!(set.is_empty());
    assert_eq!(set.find_first(b"a,b"), None);
    assert_eq!(set.find_last(b"a,b"), None);
    assert_eq!(set.find_first_not(b"a,b"), Some(0));
}

#[test]
fn contains_is_exact() {
    let set = SeparatorSet::new(&['a', 'B']);
    assert!(set.contains(&'a'));
    assert!(set.contains(&'B'));
    assert!(!set.contains(&'A'));
    assert!(!set.contains(&'b'));
}

#[test]
fn find_first_and_last() {
    let set = SeparatorSet::new(b", ");
    let view = b"x, y ,z";
    assert_eq!(set.find_first(view), Some(1));
    assert_eq!(set.find_last(view), Some(5));
}

#[test]
fn find_not_skips_separator_runs() {
    let set = SeparatorSet::new(b",");
    assert_eq!(set.find_first_not(b",,,ab,,"), Some(3));
    assert_eq!(set.find_last_not(b",,,ab,,"), Some(4));
    assert_eq!(set.find_first_not(b",,,"), None);
    assert_eq!(set.find_last_not(b""), None);
}

#[test]
fn byte_lookup_is_built_with_the_set() {
    let set = SeparatorSet::new(b",;:|,");
    assert_eq!(set.lookup(), &ByteTable::new(b",;:|"));
    assert!(set.lookup().contains(b'|'));
    assert!(!set.lookup().contains(b'a'));

    // Four needles: searched through the table, not memchr.
    assert_eq!(set.find_first(b"a|b,c"), Some(1));
    assert_eq!(set.find_last(b"a|b,c"), Some(3));
    assert_eq!(set.find_first(b"abc"), None);
}

#[test]
fn large_sets_stay_exact() {
    let seps: Vec<u32> = (100..120).collect();
    let set = SeparatorSet::new(&seps);
    assert_eq!(set.len(), 20);
    assert_eq!(set.find_first(&[1, 2, 119, 100]), Some(2));
    assert_eq!(set.find_last(&[1, 2, 119, 100, 99]), Some(3));
}
