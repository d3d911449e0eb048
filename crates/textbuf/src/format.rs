use core::fmt;

use crate::{Error, TextBuffer};

/// Adapter that renders `fmt::Arguments` into a buffer while remembering the
/// real failure cause, since `fmt::Write` can only signal `fmt::Error`.
struct FormatSink<'a> {
    buffer: &'a mut TextBuffer,
    failure: Option<Error>,
}

impl fmt::Write for FormatSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.append(s).map_err(|err| {
            self.failure = Some(err);
            fmt::Error
        })
    }
}

impl TextBuffer {
    /// Renders `args` and appends the result, however long it turns out.
    ///
    /// Usually invoked through the [`append_fmt!`](crate::append_fmt) macro.
    /// Rendering streams directly into the buffer through the capacity
    /// manager, so the output is never truncated. On failure the buffer is
    /// rolled back to its prior content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if growth fails mid-render, or
    /// [`Error::Format`] if a `Display`/`Debug` implementation reports an
    /// error.
    pub fn append_format(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let start = self.len();
        let mut sink = FormatSink {
            buffer: &mut *self,
            failure: None,
        };
        match fmt::write(&mut sink, args) {
            Ok(()) => Ok(()),
            Err(err) => {
                let failure = sink.failure.take().map_or_else(|| err.into(), |e| e);
                self.truncate_content(start);
                Err(failure)
            }
        }
    }
}

/// Allows `write!(buf, ...)`; the specific failure cause is collapsed to
/// `fmt::Error`, so prefer [`append_fmt!`](crate::append_fmt) when the caller
/// needs to tell an allocation failure from a formatting one.
impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }
}
