use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// Represents a node in a path trie.
#[derive(Default)]
pub struct TrieNode {
    pub children: HashMap<String, TrieNode>,
    pub bytes: Option<usize>,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Calculates the total number of bytes in the subtree.
    pub fn calculate_total_bytes(&self) -> usize {
        self.bytes.unwrap_or(0)
            + self
                .children
                .values()
                .map(|child| child.calculate_total_bytes())
                .sum::<usize>()
    }
}

/// Captured files keyed by path component.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Inserts a relative path with its byte count.
    pub fn insert(&mut self, path: &Path, bytes: usize) {
        trace!("Inserting path: {:?} with {} bytes", path, bytes);
        let mut current_node = &mut self.root;
        for component in path.iter() {
            let component_str = component.to_string_lossy().into_owned();
            current_node = current_node
                .children
                .entry(component_str)
                .or_insert_with(TrieNode::new);
        }
        current_node.bytes = Some(bytes);
    }

    pub fn get_root(&self) -> &TrieNode {
        &self.root
    }
}
