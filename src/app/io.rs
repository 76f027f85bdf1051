use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{Compiled, Token};

/// Path value meaning stdin for input or stdout for output.
const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some(STDIO_PATH)
}

/// Opens a file or stdin for reading a message description.
pub fn open_input(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    if is_stdio(path) {
        Ok(Box::new(std::io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Reads a whole wire-format message.
pub fn read_message(path: &Path) -> std::io::Result<Token> {
    let mut buf = Vec::new();
    open_input(path)?.read_to_end(&mut buf)?;

    tracing::debug!(len = buf.len(), "read message");

    Ok(buf.into())
}

/// Opens a file (truncating it) or stdout for writing a rendering.
pub fn open_output(path: &Path) -> std::io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(std::io::stdout().lock()))
    } else {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Writes a compiled message.
///
/// With `newline`, a line ending is added so a terminal prompt starts on its
/// own line.
pub fn write_compiled<W: Write>(
    output: &mut W,
    compiled: &Compiled,
    newline: bool,
) -> std::io::Result<()> {
    output.write_all(compiled.as_bytes())?;

    if newline {
        writeln!(output)?;
    }

    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_compiled() {
        let mut buf = Vec::new();

        write_compiled(&mut buf, &Compiled::Bytes(b"a\r\n".to_vec()), false).unwrap();
        write_compiled(&mut buf, &Compiled::Text("b".to_string()), true).unwrap();

        assert_eq!(buf, b"a\r\nb\n");
    }

    #[test]
    fn test_stdio_path() {
        assert!(is_stdio(Path::new("-")));
        assert!(!is_stdio(Path::new("message.http")));
    }
}
