//! Growable text buffer with an explicit amortization policy
//!
//!     Every hot path in the pipeline is an append loop: the parser joins
//!     paragraph lines and accumulates code block bodies, and the HTML
//!     serializer writes the whole output fragment into one buffer. The
//!     buffer doubles its capacity while small and switches to linear
//!     growth once it crosses a 1 MiB preallocation threshold, so a very
//!     large document never over-reserves by more than that threshold.
//!
//!     The buffer is always owned by exactly one holder and is never
//!     aliased; handing the content onward is a move (`into_string`).

use std::fmt;

/// Capacity threshold after which growth becomes linear instead of doubling.
pub const MAX_PREALLOC: usize = 1024 * 1024;

/// An owned, growable text accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    buf: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(initial_capacity),
        }
    }

    /// Append a string, growing capacity by the doubling-then-linear policy.
    ///
    /// Amortized O(1) per byte over a sequence of appends.
    pub fn push_str(&mut self, text: &str) {
        self.reserve_amortized(text.len());
        self.buf.push_str(text);
    }

    /// Append a single character under the same growth policy.
    pub fn push(&mut self, ch: char) {
        self.reserve_amortized(ch.len_utf8());
        self.buf.push(ch);
    }

    /// Ensure room for `additional` more bytes.
    ///
    /// Doubles the current capacity while the doubled capacity stays under
    /// [MAX_PREALLOC]; past that, reserves `needed + MAX_PREALLOC`. Never
    /// reserves below the exact bytes required.
    fn reserve_amortized(&mut self, additional: usize) {
        let needed = self.buf.len() + additional;
        if needed <= self.buf.capacity() {
            return;
        }

        let mut target = self.buf.capacity() * 2;
        if target >= MAX_PREALLOC {
            target = needed + MAX_PREALLOC;
        }
        if target < needed {
            target = needed;
        }

        self.buf.reserve_exact(target - self.buf.len());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Materialize the accumulated content as an independent `String`.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        let mut buf = TextBuffer::with_capacity(text.len());
        buf.push_str(text);
        buf
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
