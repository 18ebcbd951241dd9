//! Core types for format adapters.
//!
//! A format adapter gives file I/O capabilities for one array file format
//! to the rest of the library. Implementers provide the [`FormatAdapter`]
//! trait and declare themselves through a [`FormatEntry`],
//! which consumers use to look formats up by name or file extension
//! and to create fresh adapter instances.

use std::fmt;
use std::path::Path;

use arrio_core::{ArrayContainer, TagList};
use snafu::ensure;

use crate::error::{Result, UnsupportedSeekSnafu};

/// How an adapter should treat existing contents
/// when a file is opened for writing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file contents with the arrays about to be written.
    Truncate,
    /// Keep the existing arrays and write after them.
    ///
    /// Formats which hold a single array per file reject this mode.
    Append,
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Truncate
    }
}

/// Mediator between array containers and one file format.
///
/// An adapter instance is a small state machine around at most one
/// open file handle. It starts closed, is opened for either reading
/// or writing, and returns to the closed state through
/// [`close`](FormatAdapter::close). Dropping an adapter with an open
/// file releases the handle as well, but gives no way to observe
/// a failure to flush, so writers should close explicitly.
pub trait FormatAdapter {
    /// Open the file at `path` for reading.
    ///
    /// `tags` can carry format specific reading options.
    /// Any file previously open in this adapter is closed first.
    fn open_read(&mut self, path: &Path, tags: &TagList) -> Result<()>;

    /// Open the file at `path` for writing, creating it if necessary.
    ///
    /// `tags` can carry format specific writing options.
    /// Any file previously open in this adapter is closed first.
    ///
    /// Adapters which cannot honor the requested [`WriteMode`]
    /// fail with an unsupported feature error
    /// and leave the file system untouched.
    fn open_write(&mut self, path: &Path, mode: WriteMode, tags: &TagList) -> Result<()>;

    /// Flush pending output and release the open file handle, if any.
    ///
    /// Closing an adapter which is already closed is a no-op.
    /// The handle is released even when this operation fails.
    fn close(&mut self) -> Result<()>;

    /// The number of arrays in the open file,
    /// or -1 if it cannot be determined without decoding
    /// or no file is open.
    fn array_count(&self) -> i32;

    /// Whether there is more content to decode in the open file.
    ///
    /// Returns `false` when no file is open for reading.
    fn has_more(&mut self) -> bool;

    /// Decode the array at position `index` from the open file.
    ///
    /// Adapters for formats without random access may support
    /// only a subset of positions; see [`seek_forbidden`](Self::seek_forbidden)
    /// for the conventional guard.
    fn read_array(&mut self, index: u32) -> Result<ArrayContainer>;

    /// Encode `array` and write it to the open file.
    fn write_array(&mut self, array: &ArrayContainer) -> Result<()>;

    /// Convenience guard for adapters without random access:
    /// fails with an unsupported seek error unless `index` is 0.
    fn seek_forbidden(&self, index: u32) -> Result<()> {
        ensure!(index == 0, UnsupportedSeekSnafu { index });
        Ok(())
    }
}

/// The type of a boxed format adapter with a runtime-driven implementation.
pub type DynFormatAdapter = Box<dyn FormatAdapter + Send + Sync + 'static>;

/// A static descriptor of one supported file format.
///
/// Entries are declared as constants by codec crates
/// and gathered by consumers into whatever lookup scheme they need.
///
/// # Example
///
/// ```no_run
/// use arrio_format::{FormatAdapter, FormatEntry};
/// use std::path::Path;
///
/// const FORMATS: &[&FormatEntry] = &[
///     // &arrio_codec_jpeg::JPEG, ...
/// ];
///
/// let path = Path::new("scans/frame.jpg");
/// if let Some(entry) = FORMATS.iter().find(|f| f.matches_path(path)) {
///     let mut adapter = entry.create();
///     adapter.open_read(path, &Default::default())?;
/// }
/// # Ok::<_, arrio_format::Error>(())
/// ```
#[derive(Copy, Clone)]
pub struct FormatEntry {
    name: &'static str,
    extensions: &'static [&'static str],
    new_adapter: fn() -> DynFormatAdapter,
}

impl FormatEntry {
    /// Declare a format with its identifying name,
    /// the file extensions it claims,
    /// and a factory of fresh adapter instances.
    pub const fn new(
        name: &'static str,
        extensions: &'static [&'static str],
        new_adapter: fn() -> DynFormatAdapter,
    ) -> Self {
        FormatEntry {
            name,
            extensions,
            new_adapter,
        }
    }

    /// The unique name of the format, in lowercase.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The file extensions claimed by this format, in lowercase.
    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Whether the given path has an extension claimed by this format.
    /// The comparison ignores ASCII case.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Create a fresh adapter for this format, in the closed state.
    pub fn create(&self) -> DynFormatAdapter {
        (self.new_adapter)()
    }
}

impl fmt::Debug for FormatEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FormatEntry")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, NotOpenSnafu};

    /// An adapter for no format at all, for testing the plumbing.
    #[derive(Debug, Default)]
    struct NullAdapter;

    impl FormatAdapter for NullAdapter {
        fn open_read(&mut self, _path: &Path, _tags: &TagList) -> Result<()> {
            Ok(())
        }

        fn open_write(&mut self, _path: &Path, _mode: WriteMode, _tags: &TagList) -> Result<()> {
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            Ok(())
        }

        fn array_count(&self) -> i32 {
            -1
        }

        fn has_more(&mut self) -> bool {
            false
        }

        fn read_array(&mut self, index: u32) -> Result<ArrayContainer> {
            self.seek_forbidden(index)?;
            NotOpenSnafu { operation: "reading" }.fail()
        }

        fn write_array(&mut self, _array: &ArrayContainer) -> Result<()> {
            NotOpenSnafu { operation: "writing" }.fail()
        }
    }

    const NULL: FormatEntry = FormatEntry::new("null", &["null", "nul"], new_null_adapter);

    fn new_null_adapter() -> DynFormatAdapter {
        Box::new(NullAdapter)
    }

    #[test]
    fn entry_matches_paths_by_extension() {
        assert!(NULL.matches_path(Path::new("data/x.null")));
        assert!(NULL.matches_path(Path::new("data/x.NUL")));
        assert!(!NULL.matches_path(Path::new("data/x.jpg")));
        assert!(!NULL.matches_path(Path::new("data/null")));
        assert_eq!(NULL.name(), "null");
    }

    #[test]
    fn entry_creates_working_adapters() {
        let mut adapter = NULL.create();
        assert_eq!(adapter.array_count(), -1);
        assert!(!adapter.has_more());
        let err = adapter.read_array(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        let err = adapter.read_array(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(adapter.close().is_ok());
    }

    #[test]
    fn write_mode_defaults_to_truncate() {
        assert_eq!(WriteMode::default(), WriteMode::Truncate);
    }
}
