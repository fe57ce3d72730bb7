//! Plain-text quote list to topic document conversion.
//!
//! Reads the source list, turns non-empty trimmed lines into quotes according
//! to an [`AccumulationMode`], and writes the fixed front matter followed by
//! one `T:`/`D:` block per quote.

use std::path::Path;

use crate::constants::document::{BLOCK_SEPARATOR, BLOCK_TITLE, HEADER};
use crate::error::{Error, Result};
use crate::types::{AccumulationMode, Quote};

/// Outcome of a single conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Non-empty lines seen in the input.
    pub lines_seen: usize,
    /// Quote blocks written to the output.
    pub quotes_written: usize,
    /// 1-based line numbers of non-empty lines that did not become a quote.
    pub dropped_lines: Vec<usize>,
}

/// Quotes gathered from a text plus the bookkeeping for the report.
#[derive(Debug, Default)]
struct Accumulation {
    quotes: Vec<Quote>,
    lines_seen: usize,
    dropped_lines: Vec<usize>,
}

/// Split text into lines, accepting `\n`, `\r\n` and a lone `\r` as breaks.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn accumulate(text: &str, mode: AccumulationMode) -> Accumulation {
    let mut acc = Accumulation::default();
    // Single slot holding the quote currently being accumulated and its line number.
    let mut pending: Option<(usize, Quote)> = None;

    for (idx, line) in split_lines(text).enumerate() {
        let Some(quote) = Quote::from_line(line) else {
            if let Some((_, held)) = pending.take() {
                acc.quotes.push(held);
            }
            continue;
        };

        acc.lines_seen += 1;
        if let Some((line_no, held)) = pending.replace((idx + 1, quote)) {
            match mode {
                AccumulationMode::EveryLine => acc.quotes.push(held),
                AccumulationMode::LastLine => {
                    tracing::debug!("line {line_no} overwritten by line {}: {held}", idx + 1);
                    acc.dropped_lines.push(line_no);
                }
            }
        }
    }

    if let Some((_, held)) = pending {
        acc.quotes.push(held);
    }

    acc
}

/// Collect the quotes a text yields under the given mode, in input order.
pub fn collect_quotes(text: &str, mode: AccumulationMode) -> Vec<Quote> {
    accumulate(text, mode).quotes
}

/// Format one quote as a `T:`/`D:` block ending in a newline.
pub fn format_block(quote: &Quote) -> String {
    format!("T: {BLOCK_TITLE}\nD: {quote}\n")
}

/// Compose the full output document: header, then blocks joined by a newline.
pub fn render_document(quotes: &[Quote]) -> String {
    let blocks = quotes.iter().map(format_block).collect::<Vec<_>>();
    let mut out = String::from(HEADER);
    out.push_str(&blocks.join(BLOCK_SEPARATOR));
    out
}

/// Convert a text in memory, returning the document and the run report.
pub fn convert_str(text: &str, mode: AccumulationMode) -> (String, ConversionReport) {
    let acc = accumulate(text, mode);
    let report = ConversionReport {
        lines_seen: acc.lines_seen,
        quotes_written: acc.quotes.len(),
        dropped_lines: acc.dropped_lines,
    };
    (render_document(&acc.quotes), report)
}

/// Read a UTF-8 text file.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    String::from_utf8(bytes).map_err(|e| Error::decode(e, path))
}

/// Convert `input` into `output` with the default accumulation rule.
///
/// The output file is created or overwritten.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    convert_with(input, output, AccumulationMode::default()).map(|_| ())
}

/// Convert `input` into `output` using an explicit accumulation mode.
pub fn convert_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mode: AccumulationMode,
) -> Result<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = read_text(input)?;
    let (document, report) = convert_str(&text, mode);

    std::fs::write(output, document).map_err(|e| Error::io(e, output.to_path_buf()))?;

    if !report.dropped_lines.is_empty() {
        tracing::warn!(
            "{} line(s) in {} were followed directly by another quote and dropped: {:?}",
            report.dropped_lines.len(),
            input.display(),
            report.dropped_lines
        );
    }
    tracing::info!(
        "Wrote {} quote(s) from {} to {} ({mode})",
        report.quotes_written,
        input.display(),
        output.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn quotes(text: &str, mode: AccumulationMode) -> Vec<String> {
        collect_quotes(text, mode).into_iter().map(|q| q.0).collect()
    }

    #[test]
    fn test_blank_separated_lines_each_become_a_quote() {
        let text = "First\n\nSecond\n\n\nThird\n";
        assert_eq!(quotes(text, AccumulationMode::LastLine), ["First", "Second", "Third"]);
    }

    #[test]
    fn test_adjacent_lines_keep_only_the_last() {
        assert_eq!(quotes("Line A\nLine B\n", AccumulationMode::LastLine), ["Line B"]);
        assert_eq!(
            quotes("A\nB\nC\n\nD\nE", AccumulationMode::LastLine),
            ["C", "E"]
        );
    }

    #[test]
    fn test_every_line_mode_keeps_adjacent_lines() {
        assert_eq!(
            quotes("A\nB\nC\n\nD\nE", AccumulationMode::EveryLine),
            ["A", "B", "C", "D", "E"]
        );
    }

    #[test]
    fn test_whitespace_only_lines_separate_quotes() {
        assert_eq!(quotes("One\n   \t\nTwo", AccumulationMode::LastLine), ["One", "Two"]);
    }

    #[test]
    fn test_crlf_and_lone_cr_are_line_breaks() {
        assert_eq!(quotes("One\r\n\r\nTwo\r\n", AccumulationMode::LastLine), ["One", "Two"]);
        assert_eq!(quotes("One\r\rTwo", AccumulationMode::LastLine), ["One", "Two"]);
    }

    #[test]
    fn test_format_block_trims_and_marks_up() {
        let quote = Quote::from_line("   Hello world   ").unwrap();
        assert_eq!(format_block(&quote), "T: Quote\nD: Hello world\n");
    }

    #[test]
    fn test_empty_input_renders_header_only() {
        let (doc, report) = convert_str("", AccumulationMode::LastLine);
        assert_eq!(doc, HEADER);
        assert_eq!(report, ConversionReport::default());

        let (doc, _) = convert_str("\n\n  \n", AccumulationMode::LastLine);
        assert_eq!(doc, HEADER);
    }

    #[test]
    fn test_concrete_document() {
        let (doc, report) = convert_str("Be yourself.\n\nStay curious.\n", AccumulationMode::LastLine);
        let expected = "---\nname: Quotes\ndescription: Collection of memorable quotes and thoughts\ncolor: #4A90E2\n---\n\nT: Quote\nD: Be yourself.\n\nT: Quote\nD: Stay curious.\n";
        assert_eq!(doc, expected);
        assert_eq!(report.quotes_written, 2);
        assert_eq!(report.lines_seen, 2);
    }

    #[test]
    fn test_report_lists_dropped_line_numbers() {
        let (_, report) = convert_str("a\nb\n\nc\n  d  \ne\n", AccumulationMode::LastLine);
        assert_eq!(report.lines_seen, 5);
        assert_eq!(report.quotes_written, 2);
        assert_eq!(report.dropped_lines, [1, 4, 5]);

        let (_, report) = convert_str("a\nb\n\nc\n  d  \ne\n", AccumulationMode::EveryLine);
        assert_eq!(report.quotes_written, 5);
        assert!(report.dropped_lines.is_empty());
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0x0a]).unwrap();
        assert!(matches!(read_text(&path), Err(Error::Decode { .. })));
    }
}
