//! Stream resolution for the polyio writers and readers.
//!
//! Every exporter accepts a [`Destination`] and every reader a [`Source`]:
//! small closed variants covering "give me a buffer", "write this file" and
//! "use the stream I already opened". Resolution yields a handle carrying an
//! ownership bit; owned streams (files the resolver opened itself) are
//! released when the handle is finished or dropped, adopted streams are left
//! to their creator. Release happens on every exit path, error paths
//! included, because the handles close through `Drop`.

use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("cannot write to destination '{path}': {source}")]
    UnsupportedDestination {
        path: PathBuf,
        source: io::Error,
    },
    #[error("cannot read from source '{path}': {source}")]
    UnsupportedSource {
        path: PathBuf,
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where a writer should put its output.
pub enum Destination {
    /// A fresh in-memory buffer; its contents come back from
    /// [`WriteHandle::finish`].
    Buffer,
    /// Create (or truncate) a file at this path.
    Path(PathBuf),
    /// An already-open stream, closed by whoever opened it.
    Writer(Box<dyn Write>),
}

impl Destination {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Destination::Path(path.into())
    }
}

/// Where a reader should take its input from.
pub enum Source {
    /// A string that is first tried as a file path; if the file cannot be
    /// opened the string itself is treated as the document content.
    Text(String),
    /// A path that must open as a file.
    Path(PathBuf),
    /// An already-open stream, closed by whoever opened it.
    Reader(Box<dyn Read>),
}

impl Source {
    pub fn text(text: impl Into<String>) -> Self {
        Source::Text(text.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }
}

enum Sink {
    Buffer(Vec<u8>),
    File(File),
    Adopted(Box<dyn Write>),
}

/// A resolved, writable stream. Dropping it releases owned resources;
/// [`WriteHandle::finish`] additionally flushes and hands back buffer
/// contents.
pub struct WriteHandle {
    sink: Sink,
    owned: bool,
}

impl WriteHandle {
    /// Whether the resolver opened this stream itself (and therefore closes
    /// it).
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Flush and release the stream. Returns the accumulated bytes for the
    /// [`Destination::Buffer`] case, `None` otherwise.
    pub fn finish(mut self) -> Result<Option<Vec<u8>>, StreamError> {
        self.flush()?;
        match self.sink {
            Sink::Buffer(buffer) => Ok(Some(buffer)),
            // Files close on drop; adopted writers are not ours to close.
            Sink::File(_) | Sink::Adopted(_) => Ok(None),
        }
    }
}

impl std::fmt::Debug for WriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteHandle")
            .field("owned", &self.owned)
            .finish_non_exhaustive()
    }
}

impl Write for WriteHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Buffer(buffer) => buffer.write(buf),
            Sink::File(file) => file.write(buf),
            Sink::Adopted(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Buffer(_) => Ok(()),
            Sink::File(file) => file.flush(),
            Sink::Adopted(writer) => writer.flush(),
        }
    }
}

enum Tap {
    Memory(Cursor<Vec<u8>>),
    File(File),
    Adopted(Box<dyn Read>),
}

/// A resolved, readable stream; owned files are released on drop.
pub struct ReadHandle {
    tap: Tap,
    owned: bool,
}

impl ReadHandle {
    pub fn is_owned(&self) -> bool {
        self.owned
    }
}

impl std::fmt::Debug for ReadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadHandle")
            .field("owned", &self.owned)
            .finish_non_exhaustive()
    }
}

impl Read for ReadHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.tap {
            Tap::Memory(cursor) => cursor.read(buf),
            Tap::File(file) => file.read(buf),
            Tap::Adopted(reader) => reader.read(buf),
        }
    }
}

/// Normalize a [`Destination`] into a writable handle.
pub fn resolve_for_write(destination: Destination) -> Result<WriteHandle, StreamError> {
    match destination {
        Destination::Buffer => Ok(WriteHandle {
            sink: Sink::Buffer(Vec::new()),
            owned: false,
        }),
        Destination::Path(path) => {
            let file = File::create(&path)
                .map_err(|source| StreamError::UnsupportedDestination { path: path.clone(), source })?;
            log::debug!("writing to file {}", path.display());
            Ok(WriteHandle {
                sink: Sink::File(file),
                owned: true,
            })
        }
        Destination::Writer(writer) => Ok(WriteHandle {
            sink: Sink::Adopted(writer),
            owned: false,
        }),
    }
}

/// Normalize a [`Source`] into a readable handle.
///
/// For [`Source::Text`] the string is first tried as a file path; on any
/// open failure it falls back to the string's own content.
pub fn resolve_for_read(source: Source) -> Result<ReadHandle, StreamError> {
    match source {
        Source::Text(text) => match File::open(&text) {
            Ok(file) => {
                log::debug!("reading from file {}", text);
                Ok(ReadHandle {
                    tap: Tap::File(file),
                    owned: true,
                })
            }
            Err(err) => {
                log::debug!("'{}' is not a readable file ({}), treating as document content",
                    truncate_for_log(&text), err);
                Ok(ReadHandle {
                    tap: Tap::Memory(Cursor::new(text.into_bytes())),
                    owned: true,
                })
            }
        },
        Source::Path(path) => {
            let file = File::open(&path)
                .map_err(|source| StreamError::UnsupportedSource { path: path.clone(), source })?;
            Ok(ReadHandle {
                tap: Tap::File(file),
                owned: true,
            })
        }
        Source::Reader(reader) => Ok(ReadHandle {
            tap: Tap::Adopted(reader),
            owned: false,
        }),
    }
}

fn truncate_for_log(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(64)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}
