use super::*;

fn strings(keys: Vec<Vec<u8>>) -> Vec<String> {
    keys.into_iter()
        .map(|k| String::from_utf8(k).unwrap())
        .collect()
}

#[test]
fn empty_trie() {
    let trie = Trie::new();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert!(!trie.contains(""));
    assert!(!trie.contains("a"));
    assert!(trie.keys().is_empty());
}

#[test]
fn insert_and_contains() {
    let mut trie = Trie::new();
    assert!(trie.insert("apple"));
    assert!(trie.contains("apple"));
    assert!(!trie.contains("app"));
    assert!(!trie.contains("apples"));
    assert!(!trie.contains("abcde"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn insert_is_idempotent() {
    let mut a = Trie::from_keys(["cat", "car"]);
    let b = a.clone();
    assert!(!a.insert("cat"));
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn stored_prefix_is_its_own_key() {
    let trie = Trie::from_keys(["app", "apple"]);
    assert!(trie.contains("app"));
    assert!(trie.contains("apple"));
    assert_eq!(strings(trie.prefix("app")), ["app", "apple"]);
}

#[test]
fn empty_key() {
    let mut trie = Trie::new();
    assert!(trie.insert(""));
    assert!(trie.contains(""));
    assert_eq!(trie.len(), 1);
    assert_eq!(strings(trie.prefix("")), [""]);
}

#[test]
fn prefix_misses_return_empty() {
    let trie = Trie::from_keys(["apple", "apply"]);
    assert!(trie.prefix("b").is_empty());
    assert!(trie.prefix("applez").is_empty());
}

#[test]
fn prefix_returns_full_keys_in_order() {
    let trie = Trie::from_keys(["apple", "ape", "apply", "bed"]);
    assert_eq!(strings(trie.prefix("ap")), ["ape", "apple", "apply"]);
    assert_eq!(strings(trie.prefix("app")), ["apple", "apply"]);
    assert_eq!(strings(trie.prefix("bed")), ["bed"]);
}

#[test]
fn keys_are_sorted() {
    let trie = Trie::from_keys(["zebra", "ape", "maze", "apple", "bed"]);
    assert_eq!(strings(trie.keys()), ["ape", "apple", "bed", "maze", "zebra"]);
}

#[test]
fn keys_equal_empty_prefix() {
    let trie = Trie::from_keys(["winter", "warm", "wind"]);
    assert_eq!(trie.keys(), trie.prefix(""));
}

#[test]
fn iter_matches_keys() {
    let trie = Trie::from_keys(["cold", "cat", "crush"]);
    let collected: Vec<_> = trie.iter().collect();
    assert_eq!(collected, trie.keys());
}

#[test]
fn non_utf8_keys() {
    let trie = Trie::from_keys([&[0x00, 0xff][..], &[0x00][..], &[0xff][..]]);
    assert!(trie.contains([0x00, 0xff]));
    assert!(!trie.contains([0xff, 0x00]));
    assert_eq!(
        trie.keys(),
        [vec![0x00], vec![0x00, 0xff], vec![0xff]]
    );
}

#[test]
fn children_in_ascending_byte_order() {
    let trie = Trie::from_keys(["d", "a", "c", "b"]);
    let bytes: Vec<u8> = trie.root().children().map(|(b, _)| b).collect();
    assert_eq!(bytes, b"abcd");
}

#[test]
fn from_iterator_and_extend() {
    let mut trie: Trie = ["hot", "warm"].into_iter().collect();
    trie.extend(["cold"]);
    assert_eq!(strings(trie.keys()), ["cold", "hot", "warm"]);
    assert_eq!(trie.len(), 3);
}

#[test]
fn root_accessors() {
    let trie = Trie::from_keys(["ab"]);
    let root = trie.root();
    assert!(!root.is_terminal());
    assert!(!root.is_leaf());
    assert_eq!(root.child_count(), 1);
    let a = root.child(b'a').unwrap();
    let ab = a.child(b'b').unwrap();
    assert!(ab.is_terminal());
    assert!(ab.is_leaf());
    assert!(root.child(b'z').is_none());
}
