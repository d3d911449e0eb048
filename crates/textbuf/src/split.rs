use alloc::vec::Vec;

use bstr::{BString, ByteSlice};

use crate::{Error, TextBuffer};

fn owned_piece(piece: &[u8]) -> Result<BString, Error> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(piece.len())?;
    bytes.extend_from_slice(piece);
    Ok(BString::from(bytes))
}

impl TextBuffer {
    /// Splits the content on every non-overlapping occurrence of `delimiter`,
    /// returning independently owned byte strings.
    ///
    /// Consecutive delimiters produce empty elements (no collapsing). An
    /// empty buffer yields an empty vector, not a single empty element. A
    /// delimiter that never occurs (or is empty) yields one element equal to
    /// the whole content. Content containing exactly `k` occurrences yields
    /// `k + 1` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the result cannot be allocated; the
    /// buffer itself is never modified.
    pub fn split(&self, delimiter: impl AsRef<[u8]>) -> Result<Vec<BString>, Error> {
        let delimiter = delimiter.as_ref();
        let content = self.as_bytes();
        if content.is_empty() {
            return Ok(Vec::new());
        }
        let mut pieces = Vec::new();
        if delimiter.is_empty() {
            pieces.try_reserve_exact(1)?;
            pieces.push(owned_piece(content)?);
            return Ok(pieces);
        }
        pieces.try_reserve_exact(content.find_iter(delimiter).count() + 1)?;
        for piece in content.split_str(delimiter) {
            pieces.push(owned_piece(piece)?);
        }
        Ok(pieces)
    }

    /// Splits like [`split`](Self::split), but each element is an
    /// independently owned `TextBuffer` (with its own default starting
    /// capacity) ready for further mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the result cannot be allocated.
    pub fn split_to_buffers(&self, delimiter: impl AsRef<[u8]>) -> Result<Vec<TextBuffer>, Error> {
        let delimiter = delimiter.as_ref();
        let content = self.as_bytes();
        if content.is_empty() {
            return Ok(Vec::new());
        }
        let mut pieces = Vec::new();
        if delimiter.is_empty() {
            pieces.try_reserve_exact(1)?;
            pieces.push(TextBuffer::with_content(content)?);
            return Ok(pieces);
        }
        pieces.try_reserve_exact(content.find_iter(delimiter).count() + 1)?;
        for piece in content.split_str(delimiter) {
            pieces.push(TextBuffer::with_content(piece)?);
        }
        Ok(pieces)
    }
}
