use std::io::{ErrorKind, Read};

pub const READ_CHUNK_SIZE: usize = 1024;

const LINE_BUF_INIT: usize = 128;

#[derive(Debug)]
pub enum ReadError {
    /// The stream was exhausted before any byte of the next line arrived.
    EndOfInput,
    Io(std::io::Error),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::EndOfInput => write!(f, "end of input"),
            ReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::Io(err)
    }
}

/// Chunked line reader over any byte stream.
///
/// One low-level read may carry several lines, or stop mid-line; the chunk
/// buffer and both cursors live in the reader so leftover bytes survive
/// between `read_line` calls without being lost or read twice.
pub struct LineReader<R> {
    stream: R,
    chunk: [u8; READ_CHUNK_SIZE],
    chunk_len: usize,
    chunk_pos: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream,
            chunk: [0; READ_CHUNK_SIZE],
            chunk_len: 0,
            chunk_pos: 0,
        }
    }

    /// Collects bytes into `line` up to and including the next newline.
    ///
    /// `line` is cleared first and grows by doubling as bytes arrive.
    /// Returns the number of bytes copied. A stream that ends mid-line
    /// yields the collected bytes as a success; a stream with nothing left
    /// yields `ReadError::EndOfInput`.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> Result<usize, ReadError> {
        line.clear();
        if line.capacity() == 0 {
            line.reserve(LINE_BUF_INIT);
        }

        loop {
            if self.chunk_pos >= self.chunk_len {
                match self.fill_chunk() {
                    Ok(0) if line.is_empty() => return Err(ReadError::EndOfInput),
                    Ok(0) => break,
                    Ok(n) => {
                        self.chunk_len = n;
                        self.chunk_pos = 0;
                    }
                    Err(e) if line.is_empty() => return Err(ReadError::Io(e)),
                    // Bytes were already collected; treat the failure as the
                    // line ending with the stream.
                    Err(_) => break,
                }
            }

            if line.len() == line.capacity() {
                line.reserve(line.capacity());
            }

            let byte = self.chunk[self.chunk_pos];
            self.chunk_pos += 1;
            line.push(byte);

            if byte == b'\n' {
                break;
            }
        }

        Ok(line.len())
    }

    fn fill_chunk(&mut self) -> std::io::Result<usize> {
        loop {
            match self.stream.read(&mut self.chunk) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}
