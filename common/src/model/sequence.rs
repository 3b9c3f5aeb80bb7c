//! The ordered list of blocks that makes up a document body.
//!
//! Position is the only identity a block has: moving a block swaps it with its neighbour, and
//! the order here is the order blocks are rendered and serialized in.

use serde::{Deserialize, Serialize};

use super::block::Block;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `block` at the end.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Removes and returns the block at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }

    /// Swaps the block at `index` with the one above it.
    ///
    /// Returns `false` and leaves the order untouched for the first block or an out of range
    /// index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.blocks.len() {
            return false;
        }
        self.blocks.swap(index - 1, index);
        true
    }

    /// Swaps the block at `index` with the one below it. A no-op for the last block or an out of
    /// range index.
    pub fn move_down(&mut self, index: usize) -> bool {
        let Some(below) = index.checked_add(1).filter(|below| *below < self.blocks.len()) else {
            return false;
        };
        self.blocks.swap(index, below);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl From<Vec<Block>> for BlockSequence {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<Block> for BlockSequence {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockSequence {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn heading(text: &str) -> Block {
        Block::Heading {
            heading: text.to_string(),
        }
    }

    fn headings(sequence: &BlockSequence) -> Vec<String> {
        sequence
            .iter()
            .map(|block| block.field("heading").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn move_then_delete_follows_positions() {
        let mut sequence: BlockSequence = ["A", "B", "C"].into_iter().map(heading).collect();

        assert!(sequence.move_up(2));
        assert_eq!(headings(&sequence), ["A", "C", "B"]);

        assert_eq!(sequence.remove(0), Some(heading("A")));
        assert_eq!(headings(&sequence), ["C", "B"]);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut sequence: BlockSequence = ["A", "B", "C"].into_iter().map(heading).collect();

        assert!(!sequence.move_up(0));
        assert!(!sequence.move_down(2));
        assert!(!sequence.move_down(7));
        assert!(!sequence.move_down(usize::MAX));
        assert!(!sequence.move_up(usize::MAX));
        assert!(!sequence.move_up(7));
        assert_eq!(headings(&sequence), ["A", "B", "C"]);
        assert_eq!(sequence.remove(3), None);
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let sequence = BlockSequence::from(vec![heading("Hi")]);
        assert_eq!(
            serde_json::to_string(&sequence).unwrap(),
            r#"[{"type":"Heading","heading":"Hi"}]"#
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(usize),
        MoveUp(usize),
        MoveDown(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Add),
            (0usize..12).prop_map(Op::Remove),
            (0usize..12).prop_map(Op::MoveUp),
            (0usize..12).prop_map(Op::MoveDown),
        ]
    }

    proptest! {
        #[test]
        fn matches_a_positional_reference_list(ops in prop::collection::vec(op(), 0..64)) {
            let mut sequence = BlockSequence::new();
            let mut reference: Vec<String> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(n) => {
                        sequence.push(heading(&n.to_string()));
                        reference.push(n.to_string());
                    }
                    Op::Remove(i) => {
                        sequence.remove(i);
                        if i < reference.len() {
                            reference.remove(i);
                        }
                    }
                    Op::MoveUp(i) => {
                        sequence.move_up(i);
                        if i > 0 && i < reference.len() {
                            reference.swap(i - 1, i);
                        }
                    }
                    Op::MoveDown(i) => {
                        sequence.move_down(i);
                        if i + 1 < reference.len() {
                            reference.swap(i, i + 1);
                        }
                    }
                }
            }

            prop_assert_eq!(headings(&sequence), reference);
        }
    }
}
