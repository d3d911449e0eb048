use crate::TextBuffer;

/// Bytes removed by the trim family when no charset is given: the standard
/// ASCII whitespace characters (space, tab, newline, carriage return, form
/// feed, vertical tab).
pub const DEFAULT_TRIM_SET: &[u8] = b" \t\n\r\x0C\x0B";

impl TextBuffer {
    /// Removes leading and trailing runs of bytes found in `charset`.
    ///
    /// `None` selects [`DEFAULT_TRIM_SET`]. In place; trimming an
    /// all-trimmable or empty buffer yields an empty buffer.
    pub fn trim(&mut self, charset: Option<&[u8]>) {
        self.trim_end(charset);
        self.trim_start(charset);
    }

    /// Removes leading runs of bytes found in `charset`, shifting the
    /// remaining content to offset 0.
    pub fn trim_start(&mut self, charset: Option<&[u8]>) {
        let set = charset.unwrap_or(DEFAULT_TRIM_SET);
        let cut = self
            .as_bytes()
            .iter()
            .take_while(|b| set.contains(b))
            .count();
        if cut > 0 {
            // Shifts the sentinel down along with the content.
            self.data.drain(..cut);
        }
    }

    /// Removes trailing runs of bytes found in `charset` by truncating.
    pub fn trim_end(&mut self, charset: Option<&[u8]>) {
        let set = charset.unwrap_or(DEFAULT_TRIM_SET);
        let cut = self
            .as_bytes()
            .iter()
            .rev()
            .take_while(|b| set.contains(b))
            .count();
        if cut > 0 {
            self.truncate_content(self.len() - cut);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::TextBuffer;

    #[rstest]
    #[case("   \r\n  Hello! \n\t", None, "Hello!")]
    #[case("...Hi...", Some(b".".as_slice()), "Hi")]
    #[case("no trim needed", Some(b"xyz".as_slice()), "no trim needed")]
    #[case("", None, "")]
    #[case(" \t\n\r\x0C\x0B", None, "")]
    #[case("aaa", Some(b"a".as_slice()), "")]
    #[case("abcba", Some(b"ab".as_slice()), "c")]
    fn trim_cases(#[case] input: &str, #[case] charset: Option<&[u8]>, #[case] expected: &str) {
        let mut buf = TextBuffer::with_content(input).unwrap();
        buf.trim(charset);
        assert_eq!(buf, expected);
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn trim_start_only() {
        let mut buf = TextBuffer::with_content("  lead and trail  ").unwrap();
        buf.trim_start(None);
        assert_eq!(buf, "lead and trail  ");
    }

    #[test]
    fn trim_end_only() {
        let mut buf = TextBuffer::with_content("  lead and trail  ").unwrap();
        buf.trim_end(None);
        assert_eq!(buf, "  lead and trail");
    }

    #[test]
    fn trim_retains_capacity() {
        let mut buf = TextBuffer::with_content("   x   ").unwrap();
        let cap = buf.capacity();
        buf.trim(None);
        assert_eq!(buf, "x");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn trim_released_is_noop() {
        let mut buf = TextBuffer::default();
        buf.trim(None);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
    }
}
