//! iota over output cursors, sentinels and whole ranges

mod common;

use common::*;
use numeric_ranges::*;

fn check_fill<O: OutputCategory>() {
    for n in [0, 1, 3, 5] {
        let mut ib = [99i32; 5];
        let stopped = iota(O::start(&mut ib), TestSentinel(n), 10i32).base();
        assert_eq!(stopped, n, "{} n = {}", O::NAME, n);

        let expected: Vec<i32> = (0..5)
            .map(|i| if i < n { 10 + i as i32 } else { 99 })
            .collect();
        assert_eq!(ib.to_vec(), expected, "{} n = {}", O::NAME, n);
    }
}

#[test]
fn test_iota_output_cursor() {
    check_fill::<Output>();
}

#[test]
fn test_iota_slice_cursor() {
    check_fill::<RawMut>();
}

#[test]
fn test_iota_whole_range() {
    let mut ib = [0i32; 5];
    let end = iota_range(&mut ib, -2i32);
    assert_eq!(end.position(), 5);
    assert_eq!(ib, [-2, -1, 0, 1, 2]);

    let mut v = vec![0u8; 4];
    let end = iota_range(&mut v, 250u8);
    assert_eq!(end.position(), 4);
    assert_eq!(v, [250, 251, 252, 253]);
}

#[test]
fn test_iota_ends_at_type_maximum() {
    let mut v = vec![0u8; 6];
    let end = iota_range(&mut v, 250u8);
    assert_eq!(end.position(), 6);
    assert_eq!(v, [250, 251, 252, 253, 254, 255]);

    let mut out: Vec<i64> = Vec::new();
    let end = iota(BackInserter::new(&mut out), TestSentinel(2), i64::MAX - 1);
    assert_eq!(end.written(), 2);
    assert_eq!(out, [i64::MAX - 1, i64::MAX]);

    let mut tail = ['\0'; 2];
    iota_range(&mut tail, '\u{10FFFE}');
    assert_eq!(tail, ['\u{10FFFE}', char::MAX]);
}

#[test]
fn test_iota_subrange() {
    let mut ib = [0i32; 6];
    let end = iota_range(Subrange::new(SliceCursorMut::new(&mut ib), Sentinel(4)), 1i32);
    assert_eq!(end.position(), 4);
    assert_eq!(ib, [1, 2, 3, 4, 0, 0]);
}

#[test]
fn test_iota_into_vec() {
    let mut out: Vec<i64> = Vec::new();
    let end = iota(BackInserter::new(&mut out), TestSentinel(4), 100i64);
    assert_eq!(end.written(), 4);
    assert_eq!(out, [100, 101, 102, 103]);
}

#[test]
fn test_iota_chars() {
    let mut letters = ['\0'; 5];
    iota_range(&mut letters, 'v');
    assert_eq!(letters, ['v', 'w', 'x', 'y', 'z']);
}

#[test]
fn test_iota_floats() {
    let mut xs = [0.0f64; 3];
    iota_range(&mut xs, 0.5f64);
    assert_eq!(xs, [0.5, 1.5, 2.5]);
}

#[test]
fn test_iota_empty_range_writes_nothing() {
    let mut ib = [7i32; 3];
    let end = iota(SliceCursorMut::new(&mut ib), Sentinel(0), 1i32);
    assert_eq!(end.position(), 0);
    assert_eq!(ib, [7, 7, 7]);

    let mut out: Vec<i32> = Vec::new();
    let end = iota(BackInserter::new(&mut out), TestSentinel(0), 1i32);
    assert_eq!(end.written(), 0);
    assert!(out.is_empty());
}
