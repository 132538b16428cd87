use crate::model::{LineKey, Token};
use crate::text::plain_text;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One visual line, as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSummary {
    pub key: LineKey,
    pub top: f64,
    pub height: f64,
    pub tokens: usize,
    pub text: String,
}

/// Bucket token indices by visual line, in first-seen order.
///
/// No sorting happens; indices inside a bucket keep input order.
pub fn line_groups(tokens: &[Token]) -> Vec<(LineKey, Vec<usize>)> {
    let mut slot: HashMap<LineKey, usize> = HashMap::new();
    let mut groups: Vec<(LineKey, Vec<usize>)> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let key = token.key();
        let at = *slot.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[at].1.push(i);
    }

    groups
}

/// Give every token on a line the same vertical extent.
///
/// Each line takes the tallest height and the smallest top of its tokens.
/// `left` and `width` are left alone, so horizontal hit-testing stays per
/// token. There is no right-to-left handling.
pub fn normalize_lines(mut tokens: Vec<Token>) -> Vec<Token> {
    let groups = line_groups(&tokens);

    for (key, members) in &groups {
        let height = members
            .iter()
            .map(|&i| tokens[i].geometry().height)
            .fold(f64::NEG_INFINITY, f64::max);
        let top = members
            .iter()
            .map(|&i| tokens[i].geometry().top)
            .fold(f64::INFINITY, f64::min);

        tracing::trace!(line = %key, tokens = members.len(), top, height, "normalized line");

        for &i in members {
            let geometry = tokens[i].geometry_mut();
            geometry.height = height;
            geometry.top = top;
        }
    }

    tracing::debug!(lines = groups.len(), tokens = tokens.len(), "normalized lines");

    tokens
}

/// Summarize each line of an already normalized token list, in first-seen order.
pub fn summarize_lines(tokens: &[Token]) -> Vec<LineSummary> {
    line_groups(tokens)
        .into_iter()
        .filter_map(|(key, members)| {
            let first = tokens.get(*members.first()?)?;
            Some(LineSummary {
                key,
                top: first.geometry().top,
                height: first.geometry().height,
                tokens: members.len(),
                text: plain_text(members.iter().map(|&i| &tokens[i])),
            })
        })
        .collect()
}
