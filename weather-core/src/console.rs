use std::io::{self, BufRead, Write};

/// Line-oriented terminal the session talks through.
pub trait Console {
    /// Print `prompt` without a newline and read one line, newline stripped.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print one line.
    fn say(&mut self, line: &str);
}

/// Stdin/stdout console.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self { input: io::stdin().lock(), output: io::stdout() }
    }
}

impl Default for StdConsole<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}") {
            tracing::warn!("Failed to write to console: {err}");
        }
    }
}
