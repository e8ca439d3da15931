use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a piped request from stdin.
///
/// Returns `None` when stdin is a TTY or the pipe is empty. The payload may be
/// JSON or YAML; it is parsed as YAML, which accepts JSON documents too.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = serde_yaml::from_str(trimmed)
        .map_err(|e| format!("Failed to parse stdin: {e}"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use instalment_core::LoanRequest;

    #[test]
    fn test_empty_pipe_is_none() {
        let parsed: Option<LoanRequest> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_on_stdin() {
        let parsed: Option<LoanRequest> = parse_piped(
            r#"{"wholeAmount": 1000, "profitRate": 5, "countOfLoan": 2, "durationOfLoanPayment": 6}"#,
        )
        .unwrap();
        assert_eq!(parsed.unwrap().count_of_loan, 2);
    }
}
