//! A growable, sentinel-terminated text builder.
//!
//! [`TextBuffer`] is an owned, resizable byte sequence that assembles and
//! transforms text incrementally: amortized-cost appends, in-place editing
//! (trim, replace, reverse, reset), formatted append, whole-file ingestion,
//! and delimiter-based splitting into raw byte strings or further buffers.
//!
//! The content is always followed by a single NUL sentinel byte so the buffer
//! can be handed to C-style string APIs without copying. Operations are
//! byte-oriented: multi-byte UTF-8 sequences are not segmented, and
//! [`TextBuffer::reverse`] reverses bytes, not characters.
//!
//! ```rust
//! use textbuf::TextBuffer;
//!
//! # fn main() -> Result<(), textbuf::Error> {
//! let mut buf = TextBuffer::with_content("Hello")?;
//! buf.append(", ")?;
//! buf.append("World!")?;
//! assert_eq!(buf, "Hello, World!");
//!
//! buf.replace("World", "C")?;
//! assert_eq!(buf, "Hello, C!");
//!
//! let parts = buf.split(", ")?;
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0], "Hello");
//! assert_eq!(parts[1], "C!");
//! # Ok(())
//! # }
//! ```
//!
//! All growth goes through a fallible capacity manager: appends that cannot
//! allocate report [`Error::Allocation`] and leave the buffer exactly as it
//! was. The crate is `no_std` + `alloc` by default; the `std` cargo feature
//! (on by default) adds [`TextBuffer::read_file`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
mod format;
mod replace;
mod split;
mod trim;

#[cfg(feature = "std")]
mod file;


pub use bstr::{BStr, BString};
pub use buffer::{DEFAULT_CAPACITY, TextBuffer};
pub use error::Error;
pub use trim::DEFAULT_TRIM_SET;

/// Appends formatted text to a [`TextBuffer`], reporting allocation failures.
///
/// Expands to a call to [`TextBuffer::append_format`]; unlike `write!`, the
/// returned error distinguishes an allocation failure from a formatting one.
///
/// ```rust
/// use textbuf::{TextBuffer, append_fmt};
///
/// # fn main() -> Result<(), textbuf::Error> {
/// let mut buf = TextBuffer::new()?;
/// append_fmt!(buf, "{} + {} = {}", 1, 2, 1 + 2)?;
/// assert_eq!(buf, "1 + 2 = 3");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! append_fmt {
    ($buf:expr, $($arg:tt)*) => {
        $buf.append_format(core::format_args!($($arg)*))
    };
}
