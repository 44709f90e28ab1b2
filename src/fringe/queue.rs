//! Insertion-ordered fringes.

use super::Fringe;
use std::collections::VecDeque;

/// First-in, first-out fringe.
#[derive(Debug, Clone)]
pub struct FifoFringe<T> {
    items: VecDeque<T>,
}

impl<T> FifoFringe<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFringe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fringe<T> for FifoFringe<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last-in, first-out fringe.
#[derive(Debug, Clone)]
pub struct LifoFringe<T> {
    items: Vec<T>,
}

impl<T> LifoFringe<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for LifoFringe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fringe<T> for LifoFringe<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
