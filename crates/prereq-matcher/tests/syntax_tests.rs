//! Integration tests for trees parsed from catalog prerequisite text.
//!
//! Each case parses registrar-style text and checks who qualifies.

use prereq_matcher::{matches, CompletedCourses, MatcherConfig};
use prereq_query::parse_prerequisites;

fn qualifies(text: &str, completed: &str) -> bool {
    let tree = parse_prerequisites(text).unwrap();
    let completed = CompletedCourses::parse(completed, &MatcherConfig::default());
    matches(&tree, &completed)
}

#[test]
fn test_no_prerequisites() {
    assert!(qualifies("", ""));
    assert!(qualifies("", "ics 31"));
}

#[test]
fn test_single_course_with_grade() {
    let text = "I&C SCI 32 ( min grade = C )";
    assert!(qualifies(text, "ics 32"));
    assert!(!qualifies(text, "ics 31"));
}

#[test]
fn test_or_chain() {
    let text = "MATH 2B OR AP CALCULUS BC OR MATH 5B";
    assert!(qualifies(text, "ap calculus bc"));
    assert!(qualifies(text, "math 5b"));
    assert!(!qualifies(text, "math 2a"));
}

#[test]
fn test_nested_groups() {
    let text = "( I&C SCI 45C OR I&C SCI H32 ) AND ( I&C SCI 6B AND I&C SCI 6D )";
    assert!(qualifies(text, "ics 45c, ics 6b, ics 6d"));
    assert!(qualifies(text, "ics h32, ics 6b, ics 6d"));
    assert!(!qualifies(text, "ics 45c, ics 6b"));
}

#[test]
fn test_exclusion() {
    let text = "I&C SCI 31 AND NO I&C SCI 32";
    assert!(qualifies(text, "ics 31"));
    assert!(!qualifies(text, "ics 31, ics 32"));
}

#[test]
fn test_annotations_never_block() {
    let text = "I&C SCI 46 AND STATS 67 recommended AND I&C SCI 6N coreq";
    assert!(qualifies(text, "ics 46"));
    assert!(!qualifies(text, "stats 67, ics 6n"));
}

#[test]
fn test_dropped_clauses_do_not_block() {
    let text = "I&C SCI 31 AND LOWER DIVISION WRITING AND NO REPEATS ALLOWED";
    assert!(qualifies(text, "ics 31"));
}

#[test]
fn test_malformed_text_is_rejected() {
    assert!(parse_prerequisites("I&C SCI 31 AND ( MATH 2A").is_err());
    assert!(parse_prerequisites("OR MATH 2A").is_err());
}

#[test]
fn test_negated_alternative() {
    let text = "NO MATH 2A OR MATH 5A";
    assert!(qualifies(text, ""));
    assert!(qualifies(text, "math 2a, math 5a"));
    assert!(!qualifies(text, "math 2a"));
}
