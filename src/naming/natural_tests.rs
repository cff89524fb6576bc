use std::cmp::Ordering;

use super::*;

fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|s| (*s).to_string()).collect();
    names.sort_by(|a, b| natural_cmp(a, b));
    names
}

#[test]
fn numbers_compare_by_value() {
    assert_eq!(natural_cmp("2", "10"), Ordering::Less);
    assert_eq!(natural_cmp("10", "2"), Ordering::Greater);
    assert_eq!(natural_cmp("9", "100"), Ordering::Less);
}

#[test]
fn embedded_numbers_compare_by_value() {
    assert_eq!(
        sorted(&["42-1_А-10", "42-1_А-2", "42-1_А-1"]),
        vec!["42-1_А-1", "42-1_А-2", "42-1_А-10"]
    );
}

#[test]
fn non_digit_runs_compare_lexically() {
    assert_eq!(natural_cmp("a1", "b1"), Ordering::Less);
    assert_eq!(natural_cmp("1_А", "1_Б"), Ordering::Less);
}

#[test]
fn leading_zeros_tie_break_deterministically() {
    assert_eq!(natural_cmp("01", "1"), Ordering::Less);
    assert_eq!(natural_cmp("1", "01"), Ordering::Greater);
    assert_eq!(natural_cmp("007", "007"), Ordering::Equal);
}

#[test]
fn padded_image_names_keep_sequence_order() {
    assert_eq!(
        sorted(&["000002.jpg", "000000.jpg", "000010.jpg", "000001.jpg"]),
        vec!["000000.jpg", "000001.jpg", "000002.jpg", "000010.jpg"]
    );
}

#[test]
fn unpadded_names_sort_numerically() {
    assert_eq!(
        sorted(&["img11.jpg", "img2.jpg", "img1.jpg"]),
        vec!["img1.jpg", "img2.jpg", "img11.jpg"]
    );
}

#[test]
fn key_pads_every_digit_run() {
    let key = natural_key("a7b12");
    assert_eq!(key, format!("a{:0>20}b{:0>20}", "7", "12"));
}

#[test]
fn key_of_name_without_digits_is_unchanged() {
    assert_eq!(natural_key("Фонд"), "Фонд");
}
