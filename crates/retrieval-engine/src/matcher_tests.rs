use retrieval_pattern::Pattern;
use retrieval_trie::Trie;

use crate::execute;

fn run(keys: &[&str], pattern: &str) -> Vec<String> {
    let trie = Trie::from_keys(keys);
    let pattern = Pattern::compile(pattern).expect("pattern should parse");
    execute(&trie, &pattern)
        .into_iter()
        .map(|k| String::from_utf8(k).unwrap())
        .collect()
}

#[test]
fn empty_pattern_matches_only_the_empty_key() {
    assert_eq!(run(&["", "a"], ""), [""]);
    assert!(run(&["a"], "").is_empty());
}

#[test]
fn literal_pattern_is_membership() {
    assert_eq!(run(&["cat", "car", "cart"], "cat"), ["cat"]);
    assert!(run(&["cat"], "ca").is_empty());
    assert!(run(&["cat"], "cats").is_empty());
}

#[test]
fn wildcard_selects_by_length() {
    let keys = ["ape", "apple", "bed", "maze", "out"];
    assert_eq!(run(&keys, "***"), ["ape", "bed", "out"]);
    assert_eq!(run(&keys, "****"), ["maze"]);
    assert!(run(&keys, "******").is_empty());
}

#[test]
fn wildcard_does_not_emit_interior_nodes() {
    // "ap" is a path in the trie but not a stored key.
    assert!(run(&["ape", "apple"], "**").is_empty());
}

#[test]
fn inclusion_restricts_the_first_byte() {
    let keys = ["cat", "cold", "hot", "out", "warm"];
    assert_eq!(run(&keys, "[co]**"), ["cat", "out"]);
}

#[test]
fn exclusion_inverts_the_class() {
    let keys = ["cat", "hot", "out"];
    assert_eq!(run(&keys, "[^co]**"), ["hot"]);
}

#[test]
fn capture_enforces_equality() {
    let keys = ["aba", "abc", "aaa", "bab"];
    // First and third bytes must agree.
    assert_eq!(run(&keys, "{1}*{1}"), ["aaa", "aba", "bab"]);
    // All three must agree.
    assert_eq!(run(&keys, "{1}{1}{1}"), ["aaa"]);
}

#[test]
fn sibling_branches_do_not_share_bindings() {
    // Binding 1 -> 'a' on the "aa" branch must not leak into the "bb"
    // branch after backtracking.
    assert_eq!(run(&["aa", "bb", "ab"], "{1}{1}"), ["aa", "bb"]);
}

#[test]
fn distinct_names_bind_independently() {
    assert_eq!(run(&["ab", "aa"], "{1}{2}"), ["aa", "ab"]);
}

#[test]
fn capture_inclusion_restricts_binding() {
    let keys = ["aa", "bb", "cc"];
    assert_eq!(run(&keys, "{1[ab]}{1}"), ["aa", "bb"]);
}

#[test]
fn capture_exclusion_restricts_binding() {
    let keys = ["aa", "bb", "cc"];
    assert_eq!(run(&keys, "{1[^ab]}{1}"), ["cc"]);
}

#[test]
fn bound_byte_is_not_rechecked_against_later_classes() {
    // The second occurrence carries a class the bound byte fails; reuse is
    // equality only, so the match still succeeds.
    assert_eq!(run(&["aa"], "{1[ab]}{1[c]}"), ["aa"]);
}

#[test]
fn bound_capture_descends_without_branching() {
    // After binding 1 -> 'a', the second occurrence behaves as the literal
    // 'a' even where other children exist.
    assert_eq!(run(&["ab", "aa", "ac"], "a{1}"), ["aa", "ab", "ac"]);
    assert_eq!(run(&["aab", "aba"], "{1}{1}*"), ["aab"]);
}

#[test]
fn capture_and_class_tokens_mix() {
    let keys = ["extended", "extensive", "excluded"];
    assert_eq!(
        run(&keys, "{1[^okjh]}x[tnm]{1}*{2}{1}{2}"),
        ["extended"]
    );
}

#[test]
fn results_are_lexicographic() {
    let keys = ["zeb", "abc", "mno", "aaa"];
    assert_eq!(run(&keys, "***"), ["aaa", "abc", "mno", "zeb"]);
}

#[test]
fn empty_trie_matches_nothing() {
    assert!(run(&[], "*").is_empty());
    assert!(run(&[], "").is_empty());
}

#[test]
fn non_utf8_keys_match() {
    let trie = Trie::from_keys([&[0xff, 0xff][..], &[0xff, 0x00][..]]);
    let pattern = Pattern::compile("{1}{1}").unwrap();
    assert_eq!(execute(&trie, &pattern), [vec![0xff, 0xff]]);
}
