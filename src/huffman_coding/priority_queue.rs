//! Array-backed binary min-heap used to pick the two lightest subtrees during tree construction.
//!
//! ```text
//!            5
//!          /   \
//!         6     8
//!        /
//!       9
//! ```
//!
//! Children always weigh at least as much as their parent. Pushing appends to the end of the array
//! and sifts the new entry up; popping moves the last entry to the root and sifts it down.
//!
//! Every entry is stamped with an insertion sequence number, and the heap orders by
//! (weight, sequence). Equal weights therefore come back out in the order they went in.

use std::cmp::Ordering;

/// One queued payload and the weight it is ordered by.
#[derive(Debug, Clone)]
pub struct Entry<T, W> {
    pub(crate) data: T,
    pub(crate) weight: W,
    seq: u64,
}

impl<T, W: Ord> Entry<T, W> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T, W> {
    heap: Vec<Entry<T, W>>,
    next_seq: u64,
}

impl<T, W: Ord> PriorityQueue<T, W> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            heap: Vec::with_capacity(size),
            next_seq: 0,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add an entry and sift it up until its parent is no heavier.
    pub fn push(&mut self, data: T, weight: W) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { data, weight, seq });

        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].key_cmp(&self.heap[i]) != Ordering::Greater {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    /// Remove and return the lightest entry, or None when the queue is empty.
    pub fn pop(&mut self) -> Option<Entry<T, W>> {
        if self.heap.is_empty() {
            return None;
        }
        // swap_remove puts the last entry at the root for us
        let top = self.heap.swap_remove(0);

        let len = self.heap.len();
        let mut i = 0;
        loop {
            let left = i * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut target = left;
            if right < len && self.heap[right].key_cmp(&self.heap[left]) == Ordering::Less {
                target = right;
            }
            if self.heap[i].key_cmp(&self.heap[target]) != Ordering::Greater {
                break;
            }
            self.heap.swap(i, target);
            i = target;
        }
        Some(top)
    }

    /// Look at the lightest entry without removing it.
    #[cfg(test)]
    fn peek(&self) -> Option<&Entry<T, W>> {
        self.heap.first()
    }
}

impl<T, W: Ord> Default for PriorityQueue<T, W> {
    fn default() -> Self {
        Self::new()
    }
}
