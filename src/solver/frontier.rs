use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Decides which generated node gets expanded next.
pub(crate) trait Frontier<T> {
    fn push(&mut self, cost: u32, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lowest cost first, FIFO among equal costs.
#[derive(Debug)]
pub(crate) struct CostOrdered<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> CostOrdered<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Frontier<T> for CostOrdered<T> {
    fn push(&mut self, cost: u32, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, item });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Entry<T> {
    cost: u32,
    seq: u64,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.cost, other.seq).cmp(&(self.cost, self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

/// Most recently pushed first, cost is ignored.
#[derive(Debug)]
pub(crate) struct RecencyOrdered<T> {
    stack: Vec<T>,
}

impl<T> RecencyOrdered<T> {
    pub(crate) fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Frontier<T> for RecencyOrdered<T> {
    fn push(&mut self, _cost: u32, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
