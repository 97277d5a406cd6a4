//! Lazy token reading from whitespace-delimited files

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

/// Iterator over whitespace-separated tokens of a reader
///
/// Input is pulled through the reader's buffer in bounded chunks, so only the
/// token being assembled is held in memory, however long a line is. Tokens are
/// split on ASCII whitespace. Read and UTF-8 errors end the iteration and are
/// kept for [`TokenStream::take_error`], mirroring how `io::Lines` would
/// surface them.
#[derive(Debug)]
pub struct TokenStream<R> {
    reader: R,
    /// Bytes of a token that continues past the current chunk
    carry: Vec<u8>,
    error: Option<io::Error>,
    bytes_read: u64,
    finished: bool,
}

impl TokenStream<BufReader<File>> {
    /// Open a token file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input: {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TokenStream<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            carry: Vec::new(),
            error: None,
            bytes_read: 0,
            finished: false,
        }
    }

    /// Number of input bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// The error that stopped iteration, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn fail(&mut self, err: io::Error) -> Option<String> {
        self.error = Some(err);
        self.finished = true;
        self.carry.clear();
        None
    }

    fn decode(&mut self) -> Option<String> {
        match String::from_utf8(mem::take(&mut self.carry)) {
            Ok(token) => Some(token),
            Err(err) => self.fail(io::Error::new(io::ErrorKind::InvalidData, err)),
        }
    }
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.finished {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return self.fail(err),
            };

            if buf.is_empty() {
                self.finished = true;
                return if self.carry.is_empty() {
                    None
                } else {
                    self.decode()
                };
            }

            // Leading whitespace only matters between tokens
            let start = if self.carry.is_empty() {
                buf.iter()
                    .position(|b| !b.is_ascii_whitespace())
                    .unwrap_or(buf.len())
            } else {
                0
            };

            let (used, complete) = match buf[start..].iter().position(u8::is_ascii_whitespace) {
                Some(len) => {
                    self.carry.extend_from_slice(&buf[start..start + len]);
                    (start + len + 1, true)
                }
                None => {
                    self.carry.extend_from_slice(&buf[start..]);
                    (buf.len(), false)
                }
            };

            self.reader.consume(used);
            self.bytes_read += used as u64;

            if complete && !self.carry.is_empty() {
                return self.decode();
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_splits_on_any_whitespace() {
        let stream = TokenStream::new(Cursor::new("the  quick\tbrown\n\nfox \n"));
        let tokens: Vec<_> = stream.collect();
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_last_token_without_trailing_newline() {
        let stream = TokenStream::new(Cursor::new("  alpha beta"));
        let tokens: Vec<_> = stream.collect();
        assert_eq!(tokens, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_long_line_is_read_incrementally() {
        let text = "tok ".repeat(100_000);
        let mut stream = TokenStream::new(BufReader::with_capacity(64, Cursor::new(text)));

        assert_eq!(stream.next().as_deref(), Some("tok"));
        assert_eq!(stream.bytes_read(), 4);
        assert!(stream.carry.is_empty());

        assert_eq!(stream.next().as_deref(), Some("tok"));
        assert_eq!(stream.bytes_read(), 8);
    }

    #[test]
    fn test_token_spanning_chunks() {
        let reader = BufReader::with_capacity(4, Cursor::new("a extraordinary b"));
        let tokens: Vec<_> = TokenStream::new(reader).collect();
        assert_eq!(tokens, vec!["a", "extraordinary", "b"]);
    }

    #[test]
    fn test_multibyte_token_spanning_chunks() {
        let reader = BufReader::with_capacity(3, Cursor::new("東京 大阪"));
        let tokens: Vec<_> = TokenStream::new(reader).collect();
        assert_eq!(tokens, vec!["東京", "大阪"]);
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let mut stream = TokenStream::new(Cursor::new(vec![b'o', b'k', b'\n', 0xff, b'\n']));

        assert_eq!(stream.next().as_deref(), Some("ok"));
        assert_eq!(stream.next(), None);

        let err = stream.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = TokenStream::open(Path::new("/nonexistent/tokens.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open input"));
    }
}
