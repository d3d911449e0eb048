use std::fs;
use std::io;
use std::path::Path;

use crate::{Error, TextBuffer};

impl TextBuffer {
    /// Reads the entire file at `path` and appends its bytes to the existing
    /// content, returning the number of bytes appended.
    ///
    /// The read is byte-exact: no newline translation, and NUL bytes in the
    /// file become content bytes (the sentinel still follows the content).
    /// The buffer is not reset first, so repeated calls accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file does not exist,
    /// [`Error::Io`] for any other open/read failure, or
    /// [`Error::Allocation`] if growth fails. On any failure the buffer keeps
    /// its prior content.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<u64, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.into(),
                source,
            },
            _ => Error::Io {
                path: path.into(),
                source,
            },
        })?;
        self.append(&bytes)?;
        Ok(bytes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::format;
    use std::fs;
    use std::path::PathBuf;

    use crate::{Error, TextBuffer};

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("textbuf-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn reads_whole_file() {
        let path = scratch_path("whole");
        fs::write(&path, "line one\nline two\n").unwrap();

        let mut buf = TextBuffer::new().unwrap();
        let n = buf.read_file(&path).unwrap();
        assert_eq!(n, 18);
        assert_eq!(buf, "line one\nline two\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn accumulates_onto_existing_content() {
        let path = scratch_path("accumulate");
        fs::write(&path, "tail").unwrap();

        let mut buf = TextBuffer::with_content("head+").unwrap();
        buf.read_file(&path).unwrap();
        buf.read_file(&path).unwrap();
        assert_eq!(buf, "head+tailtail");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn no_trailing_newline_is_preserved() {
        let path = scratch_path("no-newline");
        fs::write(&path, "no newline at end").unwrap();

        let mut buf = TextBuffer::new().unwrap();
        buf.read_file(&path).unwrap();
        assert_eq!(buf, "no newline at end");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn nul_bytes_are_content() {
        let path = scratch_path("nul");
        fs::write(&path, b"a\0b\0").unwrap();

        let mut buf = TextBuffer::new().unwrap();
        let n = buf.read_file(&path).unwrap();
        assert_eq!(n, 4);
        assert_eq!(buf.as_bytes(), b"a\0b\0");
        assert_eq!(buf.as_bytes_with_nul(), b"a\0b\0\0");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_reports_not_found_and_keeps_content() {
        let mut buf = TextBuffer::with_content("intact").unwrap();
        let err = buf.read_file(scratch_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(buf, "intact");
    }

    #[test]
    fn directory_reports_io_error() {
        let mut buf = TextBuffer::new().unwrap();
        let err = buf.read_file(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(buf.is_empty());
    }
}
