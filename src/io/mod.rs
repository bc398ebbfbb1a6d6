//! Destinations for the diagnostic lines a [`Level2`](crate::level2::Level2)
//! engine emits when it is verbose.

use std::fs::File;
use std::io::{self, Write};

/// Where diagnostic lines go.  Stdout is the default.
pub(crate) enum PrintTarget {
    Stdout(io::Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink(io::Sink),
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(buf) => return write!(f, "PrintTarget::Buffer({} bytes)", buf.len()),
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink(_) => "Sink",
        };
        write!(f, "PrintTarget::{name}")
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(io::stdout())
    }
}

impl PrintTarget {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            PrintTarget::Stdout(w) => w,
            PrintTarget::File(w) => w,
            PrintTarget::Buffer(w) => w,
            PrintTarget::Stream(w) => w.as_mut(),
            PrintTarget::Sink(w) => w,
        }
    }

    /// Writes `line` plus a newline and flushes it through to the
    /// destination, so a message is either delivered or reported as failed.
    pub(crate) fn emit_line(&mut self, line: &str) -> io::Result<()> {
        let w = self.writer();
        writeln!(w, "{line}")?;
        w.flush()
    }
}

/// Trait implemented by objects that allow configurable print targets
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// redirect print output to an internal buffer
    fn print_to_buffer(&mut self);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> io::Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::default();
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(io::sink());
    }

    fn get_print_buffer(&mut self) -> io::Result<String> {
        match self {
            PrintTarget::Buffer(buf) => Ok(String::from_utf8_lossy(buf).into_owned()),
            other => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("diagnostics are not buffered ({other:?})"),
            )),
        }
    }
}
