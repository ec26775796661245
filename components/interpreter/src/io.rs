//! Character I/O boundary
//!
//! Output is buffered and flushed before every blocking read, so a prompt
//! written by the program is visible before it waits for input.

use std::io::{self, BufWriter, Read, Write};

use core_types::{BfResult, EOF_SENTINEL};

/// Input and output endpoints of one execution
pub struct ProgramIo<R: Read, W: Write> {
    input: R,
    output: BufWriter<W>,
    bytes_read: u64,
    bytes_written: u64,
}

impl<R: Read, W: Write> ProgramIo<R, W> {
    /// Wrap an input source and an output sink
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output: BufWriter::new(output),
            bytes_read: 0,
            bytes_written: 0,
        }
    }

    /// Queue one byte for output
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> BfResult<()> {
        self.output.write_all(&[byte])?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Flush pending output, then read one byte.
    ///
    /// End of input yields [`EOF_SENTINEL`].
    pub fn read_byte(&mut self) -> BfResult<u8> {
        self.output.flush()?;

        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(EOF_SENTINEL),
                Ok(_) => {
                    self.bytes_read += 1;
                    return Ok(buf[0]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Push buffered output to the sink
    pub fn flush(&mut self) -> BfResult<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Bytes consumed from the input so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bytes produced so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
