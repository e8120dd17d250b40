//! Chunked newline scanner.
//!
//! Reads a stream in fixed-size chunks, checks that every chunk is UTF-8 and
//! counts `\n` bytes. A trailing line without a terminator is not counted, so
//! `"a\nb"` and `"a\n"` both count as one.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use memchr::memchr_iter;

use crate::error::ScanError;

/// Read size used by [`count_lines`].
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// Longest prefix of a UTF-8 sequence that can still be completed.
const MAX_CARRY: usize = 3;

/// Count newlines in `reader` using [`DEFAULT_CHUNK_SIZE`] reads.
pub fn count_lines<R: Read>(reader: R) -> Result<u64, ScanError> {
    count_lines_with_capacity(reader, DEFAULT_CHUNK_SIZE)
}

/// Count newlines in `reader`, reading at most `capacity` bytes at a time.
///
/// A multi-byte character split by a chunk boundary is held back and
/// validated together with the next chunk, so the result does not depend on
/// `capacity`. Invalid UTF-8 anywhere in the stream, including a sequence
/// cut off by end-of-stream, fails with [`ScanError::NotText`].
pub fn count_lines_with_capacity<R: Read>(
    mut reader: R,
    capacity: usize,
) -> Result<u64, ScanError> {
    let capacity = capacity.max(1);
    let mut buf = vec![0u8; capacity + MAX_CARRY];
    let mut carry = 0;
    let mut count = 0u64;

    loop {
        let read = match reader.read(&mut buf[carry..carry + capacity]) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ScanError::Io {
                    partial: count,
                    source,
                })
            }
        };

        if read == 0 {
            if carry > 0 {
                return Err(ScanError::NotText { partial: count });
            }
            return Ok(count);
        }

        let filled = carry + read;
        let valid_up_to = match std::str::from_utf8(&buf[..filled]) {
            Ok(_) => filled,
            // error_len() is None only for a truncated sequence at the very end
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => return Err(ScanError::NotText { partial: count }),
        };

        // Carried bytes are all >= 0x80, never a newline.
        count += newlines(&buf[carry..filled]);

        buf.copy_within(valid_up_to..filled, 0);
        carry = filled - valid_up_to;
    }
}

/// Open `path` and count its newlines.
pub fn count_file(path: impl AsRef<Path>) -> Result<u64, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines(file)
}

fn newlines(bytes: &[u8]) -> u64 {
    memchr_iter(b'\n', bytes).count() as u64
}
