use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_tolerating_closed_pipe(&mut io::stdout().lock(), text, false)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    write_tolerating_closed_pipe(&mut io::stdout().lock(), text, true)
}

/// A reader that hangs up early (`ftd consolidate | head`) is not an error.
fn write_tolerating_closed_pipe<W: Write>(
    writer: &mut W,
    text: &str,
    newline: bool,
) -> io::Result<()> {
    let result = writer
        .write_all(text.as_bytes())
        .and_then(|()| {
            if newline {
                writer.write_all(b"\n")
            } else {
                Ok(())
            }
        })
        .and_then(|()| writer.flush());

    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::write_tolerating_closed_pipe;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn appends_newline_when_asked() {
        let mut buffer = Vec::new();
        assert!(write_tolerating_closed_pipe(&mut buffer, "done", true).is_ok());
        assert_eq!(buffer, b"done\n");
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        let mut pipe = ClosedPipe;
        assert!(write_tolerating_closed_pipe(&mut pipe, "rows", true).is_ok());
    }
}
