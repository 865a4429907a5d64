//! Line-delimited JSON request loop.
//!
//! Each input line is one `{"oldText", "newText"}` request; each output line
//! is either a response envelope or `{"error": ...}`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::json;
use smart_diff::{DiffCache, DiffService};

/// Answer every request read from `reader`, returning how many were handled
pub fn run_stream<C, R, W>(service: &DiffService<C>, reader: R, mut writer: W) -> Result<usize>
where
    C: DiffCache,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read request line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let output = match service.handle_json(&line) {
            Ok(response) => {
                debug!(
                    "line {}: {} diff, {} segments, cached: {}",
                    index + 1,
                    response.strategy,
                    response.segments.len(),
                    response.cached
                );
                serde_json::to_string(&response)?
            }
            Err(e) => {
                debug!("line {}: rejected: {}", index + 1, e);
                json!({ "error": e.to_string() }).to_string()
            }
        };

        writeln!(writer, "{}", output).context("Failed to write response")?;
        handled += 1;
    }

    writer.flush().context("Failed to flush responses")?;
    info!("answered {} requests", handled);
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use smart_diff::{DiffConfig, MemoryCache};

    fn run(input: &str) -> (usize, Vec<Value>) {
        let service = DiffService::new(MemoryCache::new(), DiffConfig::default());
        let mut output = Vec::new();

        let handled = run_stream(&service, input.as_bytes(), &mut output).unwrap();
        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (handled, lines)
    }

    #[test]
    fn test_stream_answers_each_line() {
        let input = concat!(
            r#"{"oldText": "Dosis 500mg", "newText": "Dosis 250mg"}"#,
            "\n\n",
            r#"{"oldText": "Dosis 500mg", "newText": "Dosis 250mg"}"#,
            "\n",
        );

        let (handled, responses) = run(input);

        assert_eq!(handled, 2);
        assert_eq!(responses[0]["cached"], Value::Bool(false));
        assert_eq!(responses[1]["cached"], Value::Bool(true));
        assert_eq!(responses[1]["segments"][1]["type"], "removed");
    }

    #[test]
    fn test_stream_reports_errors_inline() {
        let input = concat!(
            r#"{"oldText": 1, "newText": "x"}"#,
            "\n",
            r#"{"oldText": "", "newText": "Paracetamol"}"#,
        );

        let (handled, responses) = run(input);

        assert_eq!(handled, 2);
        assert_eq!(
            responses[0]["error"],
            "invalid input for `oldText`: expected a string, found a number"
        );
        assert_eq!(responses[1]["segments"][0]["type"], "added");
        assert_eq!(responses[1]["segments"][0]["text"], "Paracetamol");
    }
}
