use bstr::ByteSlice;

use crate::{Error, TextBuffer};

impl TextBuffer {
    /// Replaces the first occurrence of `target` with `replacement`.
    ///
    /// The replacement may differ in length from the target; the buffer grows
    /// or shrinks as needed and every byte outside the matched span is
    /// preserved. Returns `Ok(true)` if a substitution was made, `Ok(false)`
    /// (buffer unchanged) when `target` is empty or does not occur. Only the
    /// first match is replaced per call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if a growing replacement cannot be
    /// accommodated; the buffer is left untouched.
    pub fn replace(
        &mut self,
        target: impl AsRef<[u8]>,
        replacement: impl AsRef<[u8]>,
    ) -> Result<bool, Error> {
        let target = target.as_ref();
        let replacement = replacement.as_ref();
        if target.is_empty() {
            return Ok(false);
        }
        let Some(at) = self.as_bytes().find(target) else {
            return Ok(false);
        };
        if replacement.len() > target.len() {
            self.reserve(replacement.len() - target.len())?;
        }
        // Room is guaranteed above, so the splice never reallocates; the
        // sentinel sits past the spliced range and shifts with the tail.
        self.data
            .splice(at..at + target.len(), replacement.iter().copied());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::TextBuffer;

    #[rstest]
    #[case("Hello, World!", "World", "C", "Hello, C!")]
    #[case("Hello, World!", "World", "Wonderful World", "Hello, Wonderful World!")]
    #[case("aaa", "a", "bb", "bbaa")]
    #[case("one two one", "one", "1", "1 two one")]
    #[case("middle", "ddl", "", "mie")]
    #[case("exact", "exact", "swap", "swap")]
    fn replace_cases(
        #[case] input: &str,
        #[case] target: &str,
        #[case] replacement: &str,
        #[case] expected: &str,
    ) {
        let mut buf = TextBuffer::with_content(input).unwrap();
        assert!(buf.replace(target, replacement).unwrap());
        assert_eq!(buf, expected);
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn missing_target_is_noop() {
        let mut buf = TextBuffer::with_content("Hello").unwrap();
        assert!(!buf.replace("xyz", "abc").unwrap());
        assert_eq!(buf, "Hello");
    }

    #[test]
    fn empty_target_is_noop() {
        let mut buf = TextBuffer::with_content("Hello").unwrap();
        assert!(!buf.replace("", "abc").unwrap());
        assert_eq!(buf, "Hello");
    }

    #[test]
    fn repeated_calls_for_global_replace() {
        let mut buf = TextBuffer::with_content("x.x.x").unwrap();
        while buf.replace(".", "-").unwrap() {}
        assert_eq!(buf, "x-x-x");
    }

    #[test]
    fn growth_across_capacity_boundary() {
        let mut buf = TextBuffer::with_content("@").unwrap();
        let big = "y".repeat(4096);
        assert!(buf.replace("@", &big).unwrap());
        assert_eq!(buf.len(), 4096);
        assert_eq!(buf.as_bytes(), big.as_bytes());
    }
}
