use dictscan_core::PatternId;

use crate::builder::DuplicatePolicy;
use crate::links::{self, Links};
use crate::trie::{NodeId, Trie};

fn build(patterns: &[&str]) -> (Trie, Links) {
    let mut trie = Trie::new();
    for (i, p) in patterns.iter().enumerate() {
        trie.insert(PatternId::from_index(i), p.as_bytes(), DuplicatePolicy::LastWins);
    }
    let links = links::compute(&trie);
    (trie, links)
}

fn walk(trie: &Trie, path: &str) -> NodeId {
    path.bytes().fold(NodeId::ROOT, |node, b| {
        trie.child(node, b)
            .unwrap_or_else(|| panic!("no edge for {:?} in {path:?}", b as char))
    })
}

fn fail_of(trie: &Trie, links: &Links, path: &str) -> NodeId {
    links.fail[walk(trie, path).index()]
}

fn link_of(trie: &Trie, links: &Links, path: &str) -> Option<NodeId> {
    links.output_link[walk(trie, path).index()]
}

#[test]
fn root_fails_to_itself_without_output_link() {
    let (_, links) = build(&["a", "b"]);

    assert_eq!(links.fail[NodeId::ROOT.index()], NodeId::ROOT);
    assert_eq!(links.output_link[NodeId::ROOT.index()], None);
}

#[test]
fn depth_one_nodes_fail_to_root() {
    let (trie, links) = build(&["ab", "ba"]);

    assert_eq!(fail_of(&trie, &links, "a"), NodeId::ROOT);
    assert_eq!(fail_of(&trie, &links, "b"), NodeId::ROOT);
}

#[test]
fn fail_links_point_to_longest_suffix() {
    let (trie, links) = build(&["he", "she", "his", "hers"]);

    assert_eq!(fail_of(&trie, &links, "he"), NodeId::ROOT);
    assert_eq!(fail_of(&trie, &links, "sh"), walk(&trie, "h"));
    assert_eq!(fail_of(&trie, &links, "she"), walk(&trie, "he"));
    assert_eq!(fail_of(&trie, &links, "his"), walk(&trie, "s"));
    assert_eq!(fail_of(&trie, &links, "hers"), walk(&trie, "s"));
    assert_eq!(fail_of(&trie, &links, "her"), NodeId::ROOT);
}

#[test]
fn fail_links_follow_the_whole_chain() {
    // fail(ab) = b, which has no 'c' edge; the next candidate is the root,
    // whose 'c' edge is the answer for abc.
    let (trie, links) = build(&["abcx", "bz", "c"]);

    assert_eq!(fail_of(&trie, &links, "ab"), walk(&trie, "b"));
    assert_eq!(fail_of(&trie, &links, "abc"), walk(&trie, "c"));
    assert_eq!(fail_of(&trie, &links, "abcx"), NodeId::ROOT);
}

#[test]
fn fail_links_are_strictly_shallower() {
    let (trie, links) = build(&["aaaa", "aa", "aab", "ba"]);

    for i in 1..trie.len() {
        let node = trie.node(NodeId::from_index(i));
        let fail = trie.node(links.fail[i]);
        assert!(fail.depth < node.depth, "node {i}");
    }
    assert_eq!(fail_of(&trie, &links, "aaaa"), walk(&trie, "aaa"));
    assert_eq!(fail_of(&trie, &links, "aab"), walk(&trie, "b"));
}

#[test]
fn output_link_is_fail_target_when_it_ends_a_pattern() {
    let (trie, links) = build(&["he", "she"]);

    assert_eq!(link_of(&trie, &links, "she"), Some(walk(&trie, "he")));
    assert_eq!(link_of(&trie, &links, "he"), None);
}

#[test]
fn output_link_skips_nodes_without_outputs() {
    // abcd -> bcd (no output) -> cd (no output) -> d (output)
    let (trie, links) = build(&["abcd", "bcdx", "cdy", "d"]);

    assert_eq!(fail_of(&trie, &links, "abcd"), walk(&trie, "bcd"));
    assert_eq!(link_of(&trie, &links, "abcd"), Some(walk(&trie, "d")));
}

#[test]
fn output_links_chain_through_every_suffix_pattern() {
    let (trie, links) = build(&["abcd", "bcd", "c", "abd"]);

    let bcd = walk(&trie, "bcd");
    assert_eq!(link_of(&trie, &links, "abcd"), Some(bcd));
    assert_eq!(links.output_link[bcd.index()], None);
    assert_eq!(link_of(&trie, &links, "abc"), Some(walk(&trie, "c")));
}

#[test]
fn empty_pattern_makes_root_an_output_link_target() {
    let (trie, links) = build(&["", "ab"]);

    assert_eq!(link_of(&trie, &links, "a"), Some(NodeId::ROOT));
    assert_eq!(link_of(&trie, &links, "ab"), Some(NodeId::ROOT));
    assert_eq!(links.output_link[NodeId::ROOT.index()], None);
}
