// SPDX-License-Identifier: FSL-1.1
use crate::{
    error::Error,
    stack::{Sentinel, Stack},
};
use log::debug;
use slab::Slab;
use std::{collections::HashSet, fmt};

/// A single link in the chain
#[derive(Clone, Debug)]
struct Node<T> {
    /// the stored value
    data: T,
    /// pool index of the successor node, `None` at the tail
    next: Option<usize>,
}

/// A stack over a singly linked chain of nodes.
///
/// Nodes live in a pool and link to their successor by pool index. The
/// chain runs head-to-tail and the *tail* node is the logical top of
/// the stack, so push, pop, peek and size all traverse the chain from
/// the head. No tail index is kept; the traversal cost is the point of
/// this variant.
#[derive(Clone)]
pub struct LinkedStack<T> {
    /// node pool; every live slot is on the chain
    nodes: Slab<Node<T>>,
    /// pool index of the first node, `None` when the stack is empty
    head: Option<usize>,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// create a new empty stack
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
        }
    }

    /// return if the stack holds no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds a node holding `data` at the tail end of the chain and
    /// returns the stack itself so that pushes chain fluently
    pub fn push(&mut self, data: T) -> &mut Self {
        let idx = self.nodes.insert(Node { data, next: None });
        match self.head {
            None => self.head = Some(idx),
            Some(head) => {
                // walk to the current tail and attach there
                let mut runner = head;
                while let Some(next) = self.nodes[runner].next {
                    runner = next;
                }
                self.nodes[runner].next = Some(idx);
            }
        }
        debug!("push: node {idx} is the new tail");
        self
    }

    /// Detaches the tail node and returns its value, or
    /// [`Sentinel::NoValue`] when the stack is empty
    pub fn pop(&mut self) -> Result<T, Sentinel> {
        let head = match self.head {
            Some(head) => head,
            None => return Err(Sentinel::NoValue),
        };

        // walk to the tail remembering the node just before it
        let mut prev = None;
        let mut tail = head;
        while let Some(next) = self.nodes[tail].next {
            prev = Some(tail);
            tail = next;
        }

        match prev {
            Some(prev) => self.nodes[prev].next = None,
            // the chain held only the head, so popping empties the stack
            None => self.head = None,
        }

        let node = self.nodes.remove(tail);
        debug!("pop: removed tail node {tail}");
        Ok(node.data)
    }

    /// Returns a reference to the tail value without detaching it, or
    /// [`Sentinel::Empty`] when the stack is empty
    pub fn peek(&self) -> Result<&T, Sentinel> {
        let mut runner = match self.head {
            Some(head) => head,
            None => return Err(Sentinel::Empty),
        };
        while let Some(next) = self.nodes[runner].next {
            runner = next;
        }
        Ok(&self.nodes[runner].data)
    }

    /// Counts the nodes on the chain by walking it from the head
    pub fn size(&self) -> usize {
        let mut runner = match self.head {
            Some(head) => head,
            None => return 0,
        };
        let mut count = 1;
        while let Some(next) = self.nodes[runner].next {
            runner = next;
            count += 1;
        }
        count
    }

    /// Verifies the chain invariant: every link lands in the pool, no
    /// node is visited twice, and the chain accounts for every
    /// allocated node
    pub fn check(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        let mut next = self.head;
        while let Some(idx) = next {
            if !seen.insert(idx) {
                return Err(Error::Cycle { index: idx });
            }
            match self.nodes.get(idx) {
                Some(node) => next = node.next,
                None => return Err(Error::CorruptLink { index: idx }),
            }
        }
        if seen.len() != self.nodes.len() {
            return Err(Error::LengthMismatch {
                walked: seen.len(),
                stored: self.nodes.len(),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // render the chain bottom-to-top rather than the pool layout
        let mut list = f.debug_list();
        let mut next = self.head;
        while let Some(idx) = next {
            let node = &self.nodes[idx];
            list.entry(&node.data);
            next = node.next;
        }
        list.finish()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        // the inherent push returns the stack for chaining; the trait
        // discards it
        let _ = LinkedStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T, Sentinel> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T, Sentinel> {
        LinkedStack::peek(self)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn is_empty(&self) -> bool {
        LinkedStack::is_empty(self)
    }
}
