// --- File: src/core/trie.rs

// --- PhraseTrie: built once at startup, read-only afterwards ---

#[derive(Clone, Debug)]
struct Node<V> {
    /// In creation order; alphabets are small, so a linear scan is fine.
    children: Vec<(char, usize)>,
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    fn child(&self, c: char) -> Option<usize> {
        self.children
            .iter()
            .find(|&&(key, _)| key == c)
            .map(|&(_, idx)| idx)
    }
}

/// An append-only, character-level prefix trie.
/// Nodes live in a flat arena; index 0 is the root.
/// Keys are matched exactly (case-sensitive), callers normalize before inserting or querying.
#[derive(Clone, Debug)]
pub struct PhraseTrie<V> {
    nodes: Vec<Node<V>>,
    value_count: usize,
}

impl<V> Default for PhraseTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PhraseTrie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            value_count: 0,
        }
    }

    /// Appends `value` to the value list of `key`'s terminal node,
    /// creating one node per missing character.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node_idx = 0;
        for c in key.chars() {
            node_idx = match self.nodes[node_idx].child(c) {
                Some(id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node_idx].children.push((c, new_node_id));
                    new_node_id
                }
            };
        }
        self.nodes[node_idx].values.push(value);
        self.value_count += 1;
    }

    fn descend(&self, key: &str) -> Option<usize> {
        let mut node_idx = 0;
        for c in key.chars() {
            node_idx = self.nodes[node_idx].child(c)?;
        }
        Some(node_idx)
    }

    /// Values stored under exactly `key`.
    pub fn get(&self, key: &str) -> &[V] {
        match self.descend(key) {
            Some(idx) => &self.nodes[idx].values,
            None => &[],
        }
    }

    /// All values whose key starts with `prefix`.
    /// Order: pre-order walk, children in the order they were created,
    /// values in insertion order.
    /// O(p + S) where S is the size of the subtree under the prefix.
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<&V> {
        let mut out = Vec::new();
        if let Some(idx) = self.descend(prefix) {
            self.collect(idx, &mut out);
        }
        out
    }

    fn collect<'a>(&'a self, node_idx: usize, out: &mut Vec<&'a V>) {
        let node = &self.nodes[node_idx];
        out.extend(node.values.iter());
        for &(_, child_idx) in &node.children {
            self.collect(child_idx, out);
        }
    }

    /// Number of stored values (not distinct keys).
    pub fn len(&self) -> usize {
        self.value_count
    }

    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
