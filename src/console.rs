//! Line-oriented text I/O used by the local controller and the human player.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Arc, Mutex};

/// Minimal console contract: print a line, or read a fixed number of
/// integers from one input line.
pub trait Console: Send {
    /// Print `message` followed by a newline.
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Read lines until one holds exactly `n` integers, printing `retry`
    /// after every rejected line. End of input is an `UnexpectedEof` error.
    fn get_some_ints(&mut self, n: usize, retry: &str) -> io::Result<Vec<i64>>;
}

/// [`Console`] over any buffered reader and writer.
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<BufReader<Stdin>, Stdout> {
    /// Console on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

fn parse_ints(line: &str) -> Option<Vec<i64>> {
    line.split_whitespace()
        .map(|token| token.parse::<i64>().ok())
        .collect()
}

impl<R, W> Console for TextConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    fn get_some_ints(&mut self, n: usize, retry: &str) -> io::Result<Vec<i64>> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended while waiting for integers",
                ));
            }
            match parse_ints(&line) {
                Some(ints) if ints.len() == n => return Ok(ints),
                _ => self.display_message(retry)?,
            }
        }
    }
}

/// Lets the controller and a human player share one console.
impl<C: Console + ?Sized> Console for Arc<Mutex<C>> {
    fn display_message(&mut self, message: &str) -> io::Result<()> {
        self.lock()
            .map_err(|_| io::Error::other("console lock poisoned"))?
            .display_message(message)
    }

    fn get_some_ints(&mut self, n: usize, retry: &str) -> io::Result<Vec<i64>> {
        self.lock()
            .map_err(|_| io::Error::other("console lock poisoned"))?
            .get_some_ints(n, retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> TextConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TextConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_exact_count() {
        let mut c = console(" 6 7\n");
        assert_eq!(c.get_some_ints(2, "again").unwrap(), vec![6, 7]);
        assert!(c.output().is_empty());
    }

    #[test]
    fn retries_until_well_formed() {
        let mut c = console("1\n1 2 3\n1 x\n4 5\n");
        assert_eq!(c.get_some_ints(2, "again").unwrap(), vec![4, 5]);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "again\nagain\nagain\n");
    }

    #[test]
    fn eof_is_an_error() {
        let mut c = console("1\n");
        let err = c.get_some_ints(2, "again").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn shared_console_writes_through() {
        let shared = Arc::new(Mutex::new(console("")));
        let mut handle = shared.clone();
        handle.display_message("hello").unwrap();
        assert_eq!(shared.lock().unwrap().output().as_slice(), b"hello\n");
    }
}
