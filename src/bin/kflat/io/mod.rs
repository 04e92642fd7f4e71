use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, StdinLock, StdoutLock, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Where records are read from.
pub enum RecordSource {
    File(BufReader<File>),
    Stdin(StdinLock<'static>),
}

impl Read for RecordSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            RecordSource::File(r) => r.read(buf),
            RecordSource::Stdin(r) => r.read(buf),
        }
    }
}

pub fn open_input(path: Option<&Path>) -> Result<RecordSource> {
    match path {
        Some(p) => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(RecordSource::File(BufReader::new(file)))
        }
        None => Ok(RecordSource::Stdin(io::stdin().lock())),
    }
}

/// Where the rendered flat-file text goes.
pub enum FlatFileSink {
    File(BufWriter<File>),
    Stdout(BufWriter<StdoutLock<'static>>),
}

impl Write for FlatFileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FlatFileSink::File(w) => w.write(buf),
            FlatFileSink::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FlatFileSink::File(w) => w.flush(),
            FlatFileSink::Stdout(w) => w.flush(),
        }
    }
}

pub fn create_output(path: Option<&Path>) -> Result<FlatFileSink> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {}", p.display()))?;
            Ok(FlatFileSink::File(BufWriter::new(file)))
        }
        None => Ok(FlatFileSink::Stdout(BufWriter::new(io::stdout().lock()))),
    }
}

/// File name for progress messages, or `fallback` for stdin/stdout.
pub fn display_name(path: Option<&Path>, fallback: &str) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}
