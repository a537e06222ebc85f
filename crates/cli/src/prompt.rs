use std::{
    io::{self, BufRead, Write},
    num::ParseFloatError,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read from the terminal")]
    Io(#[from] io::Error),

    #[error("input ended before a value was entered")]
    Eof,

    #[error("expected a number, got {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Writes `message`, then reads one line and parses it as a number.
pub fn read_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<f64, PromptError> {
    write!(writer, "{message}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }

    let input = line.trim();
    input.parse().map_err(|source| PromptError::Parse {
        input: input.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<f64, PromptError>, String) {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let result = read_number(&mut reader, &mut out, "Enter Reynolds number: ");
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_trimmed_number() {
        let (result, out) = run("  3000\n");
        assert_eq!(result.unwrap(), 3000.0);
        assert_eq!(out, "Enter Reynolds number: ");
    }

    #[test]
    fn accepts_scientific_notation() {
        let (result, _) = run("1e6\r\n");
        assert_eq!(result.unwrap(), 1.0e6);
    }

    #[test]
    fn rejects_text() {
        let (result, _) = run("fast\n");
        assert!(matches!(result, Err(PromptError::Parse { input, .. }) if input == "fast"));
    }

    #[test]
    fn reports_end_of_input() {
        let (result, _) = run("");
        assert!(matches!(result, Err(PromptError::Eof)));
    }
}
