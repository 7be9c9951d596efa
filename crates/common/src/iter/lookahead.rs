//! A peek buffer with a fixed capacity of `N` items.
//!
//! Peeking never clones or rewinds the source iterator; items are pulled into the
//! buffer and handed out again by [`Iterator::next`]. Asking for an item past the
//! capacity yields `None` regardless of what the source still holds.
use std::{collections::VecDeque, iter::Fuse};

pub struct Lookahead<I, const N: usize>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait LookaheadExt: Iterator + Sized {
    fn lookahead<const N: usize>(self) -> Lookahead<Self, N>;
}

impl<I: Iterator> LookaheadExt for I {
    fn lookahead<const N: usize>(self) -> Lookahead<Self, N> {
        Lookahead {
            iter: self.fuse(),
            buf: VecDeque::with_capacity(N),
        }
    }
}

impl<I: Iterator, const N: usize> Lookahead<I, N> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        if n >= N {
            return None;
        }

        while self.buf.len() <= n {
            let item = self.iter.next()?;
            self.buf.push_back(item);
        }

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        let matched = self.peek().map_or(false, func);

        if matched {
            self.next()
        } else {
            None
        }
    }
}

impl<I: Iterator, const N: usize> Iterator for Lookahead<I, N> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        (
            low.saturating_add(self.buf.len()),
            high.and_then(|high| high.checked_add(self.buf.len())),
        )
    }
}
