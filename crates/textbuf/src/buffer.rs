use alloc::vec::Vec;
use core::fmt;
use core::str::Utf8Error;

use bstr::{BStr, ByteSlice};

use crate::Error;

/// Starting capacity, in bytes, for a freshly constructed buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// A growable, owned byte sequence terminated by a NUL sentinel.
///
/// The buffer tracks a logical content length and an allocated capacity; the
/// byte at offset `len()` is always the sentinel (`0`), so
/// [`as_bytes_with_nul`](Self::as_bytes_with_nul) can be handed to
/// C-style string APIs directly. Content bytes may themselves contain NUL
/// (for example after [`read_file`](Self::read_file) on a binary file); the
/// sentinel is the one *past* the content.
///
/// Growth is amortized: when more room is needed, capacity doubles until the
/// requirement is met, so a long run of small appends costs O(1) per byte on
/// average. Capacity never shrinks while the buffer is live; only
/// [`free`](Self::free) releases it.
///
/// Any borrowed view of the content is invalidated by the next mutating call
/// (growth may relocate the backing store). In Rust this contract is enforced
/// by the borrow checker rather than by documentation alone.
#[derive(Clone, Default)]
pub struct TextBuffer {
    /// Content bytes followed by exactly one sentinel byte. Empty only in the
    /// released state (after [`TextBuffer::free`], or `Default`), before the
    /// next mutation revives the buffer.
    pub(crate) data: Vec<u8>,
}

impl TextBuffer {
    /// Creates an empty buffer with the default starting capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the initial allocation fails.
    pub fn new() -> Result<Self, Error> {
        let mut data = Vec::new();
        data.try_reserve_exact(DEFAULT_CAPACITY)?;
        data.push(0);
        Ok(Self { data })
    }

    /// Creates a buffer holding a copy of `content`.
    ///
    /// Equivalent to [`new`](Self::new) followed by
    /// [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if allocation fails.
    pub fn with_content(content: impl AsRef<[u8]>) -> Result<Self, Error> {
        let mut buffer = Self::new()?;
        buffer.append(content)?;
        Ok(buffer)
    }

    /// Number of content bytes, excluding the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Whether the buffer holds no content bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total allocated bytes, including room for the sentinel.
    ///
    /// Monotonically non-decreasing while the buffer is live; `0` only in the
    /// released state.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The content bytes, sentinel excluded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// The content bytes followed by the sentinel, for C interop.
    ///
    /// Empty (no sentinel) only in the released state.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// The content as a conventionally-UTF-8 byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// The content as `&str`, if it is valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`Utf8Error`] otherwise.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Guarantees room for `additional` more content bytes plus the sentinel.
    ///
    /// Post-condition: `capacity() >= len() + additional + 1`. When the
    /// current capacity falls short, it doubles (from at least
    /// [`DEFAULT_CAPACITY`]) until the requirement is met, then grows in a
    /// single reallocation. Revives a released buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the store cannot be grown; the buffer
    /// is left untouched.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let revive = self.data.is_empty();
        // Saturating arithmetic: a request this close to usize::MAX is
        // guaranteed to fail inside try_reserve_exact anyway.
        let required = self.len().saturating_add(additional).saturating_add(1);
        if required > self.data.capacity() {
            let mut target = self.data.capacity().max(DEFAULT_CAPACITY);
            while target < required {
                target = target.saturating_mul(2);
            }
            self.data.try_reserve_exact(target - self.data.len())?;
        }
        if revive {
            self.data.push(0);
        }
        Ok(())
    }

    /// Appends `text`'s bytes to the end of the content.
    ///
    /// Empty input is a successful no-op that performs no allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if growth fails; the buffer is left
    /// untouched.
    pub fn append(&mut self, text: impl AsRef<[u8]>) -> Result<(), Error> {
        let text = text.as_ref();
        if text.is_empty() {
            return Ok(());
        }
        self.reserve(text.len())?;
        // Room is guaranteed, so neither call below reallocates.
        self.data.pop();
        self.data.extend_from_slice(text);
        self.data.push(0);
        Ok(())
    }

    /// Sets the length to zero, retaining the allocated capacity for reuse.
    ///
    /// Idempotent. A released buffer stays released.
    pub fn reset(&mut self) {
        if self.data.is_empty() {
            return;
        }
        self.data.clear();
        self.data.push(0);
    }

    /// Reverses the content bytes in place.
    ///
    /// Byte-oriented: multi-byte UTF-8 sequences come out byte-reversed, not
    /// character-reversed.
    pub fn reverse(&mut self) {
        let len = self.len();
        self.data[..len].reverse();
    }

    /// Releases the backing store.
    ///
    /// Length and capacity drop to zero; the next mutating call revives the
    /// buffer as if freshly constructed. Idempotent, and [`Drop`] covers the
    /// implicit path, so double release is impossible.
    pub fn free(&mut self) {
        self.data = Vec::new();
    }

    /// Truncates the content to `len` bytes and re-plants the sentinel.
    ///
    /// Capacity is retained, so this never allocates. No-op on a released
    /// buffer or when `len >= self.len()`.
    pub(crate) fn truncate_content(&mut self, len: usize) {
        if self.data.is_empty() || len >= self.len() {
            return;
        }
        self.data.truncate(len);
        self.data.push(0);
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer").field(&self.as_bstr()).finish()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bstr().fmt(f)
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextBuffer {}

impl PartialEq<[u8]> for TextBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for TextBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
