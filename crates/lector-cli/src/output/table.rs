use lector_core::model::TokenSequence;
use lector_core::normalize::LineSummary;
use std::fmt::Write;

/// One row per token: index, layout level and position, geometry, confidence, text.
pub fn format_tokens(sequence: &TokenSequence) -> String {
    let mut out = String::new();

    if sequence.is_empty() {
        out.push_str("No tokens found.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>5}  {:<9}  {:<14}  {:>8} {:>8} {:>8} {:>8}  {:>6}  text",
        "#", "level", "p/b/par/l/w", "left", "top", "width", "height", "conf"
    );

    for token in sequence {
        let p = token.position();
        let g = token.geometry();
        let place = format!(
            "{}/{}/{}/{}/{}",
            p.page, p.block, p.paragraph, p.line, p.word
        );
        let _ = writeln!(
            out,
            "{:>5}  {:<9}  {:<14}  {:>8.1} {:>8.1} {:>8.1} {:>8.1}  {:>6}  {}",
            token.index(),
            token.level().to_string(),
            place,
            g.left,
            g.top,
            g.width,
            g.height,
            token.confidence(),
            token.text()
        );
    }

    let _ = writeln!(
        out,
        "\n{} token(s) on {} line(s)",
        sequence.len(),
        sequence.line_count()
    );

    out
}

/// One row per visual line with its unified bounds.
pub fn format_lines(lines: &[LineSummary]) -> String {
    let mut out = String::new();

    if lines.is_empty() {
        out.push_str("No lines found.\n");
        return out;
    }

    let max_key = lines
        .iter()
        .map(|l| l.key.to_string().len())
        .max()
        .unwrap_or(10);

    for line in lines {
        let _ = writeln!(
            out,
            "{:<width$}  top {:>8.1}  height {:>6.1}  {:>3} token(s)  {}",
            line.key.to_string(),
            line.top,
            line.height,
            line.tokens,
            line.text,
            width = max_key
        );
    }

    out
}
