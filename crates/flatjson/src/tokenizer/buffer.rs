#![expect(clippy::inline_always)]

use alloc::{collections::VecDeque, string::String};

/// Ring of not-yet-lexed characters, refilled by `Tokenizer::feed`.
#[derive(Debug)]
pub(crate) struct ChunkRing {
    chars: VecDeque<char>,
}

impl ChunkRing {
    pub(crate) fn new() -> Self {
        Self {
            chars: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, chunk: &str) {
        // Byte length is an upper bound on the number of chars.
        self.chars.reserve(chunk.len());
        self.chars.extend(chunk.chars());
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.front().copied()
    }

    /// Moves leading characters satisfying `keep` into `dst`, returning how
    /// many were moved. Stops at the first character that fails the
    /// predicate.
    #[inline]
    pub(crate) fn take_while_into<F>(&mut self, dst: &mut String, mut keep: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut taken = 0;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            dst.push(c);
            self.chars.pop_front();
            taken += 1;
        }
        taken
    }
}

impl Iterator for ChunkRing {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.chars.pop_front()
    }
}
