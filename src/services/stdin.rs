use crate::error::*;
use std::io::BufRead;

/// When to stop collecting pasted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// First blank line or EOF (interactive paste).
    BlankLine,
    /// EOF only (piped input).
    Eof,
}

/// Collect input lines joined by `\n`.
///
/// Returns `NoInput` when nothing but whitespace was read.
pub fn read_input<R: BufRead>(reader: R, terminator: Terminator) -> Result<String> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
        if terminator == Terminator::BlankLine && line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    let raw = lines.join("\n");
    if raw.trim().is_empty() {
        return Err(CleanError::NoInput);
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stops_at_blank_line() {
        let input = Cursor::new("first  line\nsecond\n\nignored\n");
        assert_eq!(
            read_input(input, Terminator::BlankLine).unwrap(),
            "first  line\nsecond"
        );
    }

    #[test]
    fn test_reads_to_eof() {
        let input = Cursor::new("first\r\n\r\nsecond");
        assert_eq!(
            read_input(input, Terminator::Eof).unwrap(),
            "first\n\nsecond"
        );
    }

    #[test]
    fn test_no_input() {
        assert!(matches!(
            read_input(Cursor::new(""), Terminator::Eof),
            Err(CleanError::NoInput)
        ));
        assert!(matches!(
            read_input(Cursor::new("\nlater"), Terminator::BlankLine),
            Err(CleanError::NoInput)
        ));
    }
}
