use crate::error::LectorError;
use crate::model::Record;

/// Split tesseract TSV output into records keyed by the header row.
///
/// The first non-empty line is the header; input without one has no rows.
/// Rows shorter than the header simply lack the trailing keys; extra cells
/// are ignored. No quoting rules apply: a tab always separates cells.
pub fn parse_tsv(tsv: &str) -> Result<Vec<Record>, LectorError> {
    let mut lines = tsv
        .lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.is_empty());

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split('\t').map(str::trim).collect(),
        None => return Ok(Vec::new()),
    };

    if !header.iter().any(|h| !h.is_empty()) {
        return Err(LectorError::TsvFormat("header row has no column names".into()));
    }

    let records: Vec<Record> = lines
        .map(|line| {
            header
                .iter()
                .zip(line.split('\t'))
                .map(|(name, cell)| (name.to_string(), cell.to_string()))
                .collect()
        })
        .collect();

    tracing::debug!(columns = header.len(), rows = records.len(), "parsed TSV");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn test_parse_word_rows() {
        let tsv = format!(
            "{HEADER}\n\
             1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t\n\
             5\t1\t1\t1\t1\t1\t36\t92\t60\t24\t95.8\tHello\n"
        );
        let records = parse_tsv(&tsv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["conf"], "-1");
        assert_eq!(records[0]["text"], "");
        assert_eq!(records[1]["left"], "36");
        assert_eq!(records[1]["text"], "Hello");
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let tsv = format!("{HEADER}\r\n\r\n5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\tword\r\n");
        let records = parse_tsv(&tsv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["text"], "word");
    }

    #[test]
    fn test_short_row_lacks_trailing_keys() {
        let tsv = format!("{HEADER}\n5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\n");
        let records = parse_tsv(&tsv).unwrap();
        assert!(!records[0].contains_key("text"));
        assert_eq!(records[0]["conf"], "90");
    }

    #[test]
    fn test_text_keeps_surrounding_spaces() {
        let tsv = format!("{HEADER}\n5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\t  spaced \n");
        let records = parse_tsv(&tsv).unwrap();
        assert_eq!(records[0]["text"], "  spaced ");
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let tsv = format!("{HEADER}\n5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\t\"quoted\n");
        let records = parse_tsv(&tsv).unwrap();
        assert_eq!(records[0]["text"], "\"quoted");
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(parse_tsv("").unwrap().is_empty());
        assert!(parse_tsv("\n\r\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_header_without_names_is_error() {
        assert!(matches!(
            parse_tsv("\t\t\n1\t2\t3\n"),
            Err(LectorError::TsvFormat(_))
        ));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_tsv(HEADER).unwrap().is_empty());
    }
}
