//! The match loop.

use retrieval_pattern::{ByteSet, GroupKind, Pattern, Symbol, Token};
use retrieval_trie::{Trie, TrieNode};

use crate::bindings::Bindings;

/// Every stored key satisfying `pattern`, in lexicographic order.
pub fn execute(trie: &Trie, pattern: &Pattern) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut env = Bindings::new(pattern.name_count());
    let mut acc = Vec::new();
    step(trie.root(), pattern.tokens(), &mut env, &mut acc, &mut out);
    out
}

/// Match the leading token at `node`, then recurse on the remaining tokens.
/// Branch results concatenate in child order, which keeps the output
/// sorted. Recursion depth is bounded by the pattern length.
fn step(
    node: &TrieNode,
    tokens: &[Token],
    env: &mut Bindings,
    acc: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    let Some((&token, rest)) = tokens.split_first() else {
        if node.is_terminal() {
            out.push(acc.clone());
        }
        return;
    };

    match token {
        Token::Char(byte) => {
            if let Some(child) = node.child(byte) {
                descend(byte, child, rest, env, acc, out);
            }
        }
        Token::Wildcard => {
            for (byte, child) in node.children() {
                descend(byte, child, rest, env, acc, out);
            }
        }
        Token::Inclusion(set) => {
            for (byte, child) in node.children() {
                if set.contains(byte) {
                    descend(byte, child, rest, env, acc, out);
                }
            }
        }
        Token::Exclusion(set) => {
            for (byte, child) in node.children() {
                if !set.contains(byte) {
                    descend(byte, child, rest, env, acc, out);
                }
            }
        }
        Token::Capture(sym) => capture(sym, None, node, rest, env, acc, out),
        Token::CaptureIn(sym, set) => {
            capture(sym, Some((set, GroupKind::Inclusion)), node, rest, env, acc, out);
        }
        Token::CaptureEx(sym, set) => {
            capture(sym, Some((set, GroupKind::Exclusion)), node, rest, env, acc, out);
        }
    }
}

/// A bound name behaves as the bound literal; the class, if any, was
/// checked at bind time and is not re-checked. An unbound name branches
/// over the admissible children, binding per branch and unbinding on
/// backtrack.
fn capture(
    sym: Symbol,
    class: Option<(ByteSet, GroupKind)>,
    node: &TrieNode,
    rest: &[Token],
    env: &mut Bindings,
    acc: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    if let Some(byte) = env.get(sym) {
        if let Some(child) = node.child(byte) {
            descend(byte, child, rest, env, acc, out);
        }
        return;
    }

    for (byte, child) in node.children() {
        let admissible = match class {
            None => true,
            Some((set, GroupKind::Inclusion)) => set.contains(byte),
            Some((set, GroupKind::Exclusion)) => !set.contains(byte),
        };
        if admissible {
            env.bind(sym, byte);
            descend(byte, child, rest, env, acc, out);
            env.unbind(sym);
        }
    }
}

fn descend(
    byte: u8,
    child: &TrieNode,
    rest: &[Token],
    env: &mut Bindings,
    acc: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    acc.push(byte);
    step(child, rest, env, acc, out);
    acc.pop();
}
