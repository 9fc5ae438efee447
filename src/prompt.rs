// src/prompt.rs
use crate::types::BHuntyError;
use std::io::{self, BufRead, Write};

/// Source of interactive answers. `None` means end of input.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, BHuntyError>;
}

/// Prompts on stdout and reads answers from stdin.
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, BHuntyError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt).map_err(|e| BHuntyError::PromptError(e.to_string()))?;
        stdout.flush().map_err(|e| BHuntyError::PromptError(e.to_string()))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| BHuntyError::PromptError(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// `y` or `Y`, ignoring surrounding whitespace.
pub fn is_yes(answer: Option<&str>) -> bool {
    answer.map(|a| a.trim().eq_ignore_ascii_case("y")).unwrap_or(false)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes(Some("y")));
        assert!(is_yes(Some("Y")));
        assert!(is_yes(Some("  y \n")));
        assert!(!is_yes(Some("yes")));
        assert!(!is_yes(Some("")));
        assert!(!is_yes(Some("n")));
        assert!(!is_yes(None));
    }
}
