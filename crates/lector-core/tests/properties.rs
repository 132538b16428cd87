//! Property-based tests for line normalization and range selection.

use lector_core::model::{Geometry, Position, Token, TokenSequence};
use lector_core::normalize::normalize_lines;
use lector_core::select::select_range;
use lector_core::text::plain_text;
use proptest::prelude::*;

/// Tokens spread over a handful of pages, blocks, paragraphs and lines so
/// that keys collide often.
fn token_strategy() -> impl Strategy<Value = Token> {
    (
        (1i64..3, 1i64..3, 1i64..3, 1i64..4, 1i64..6),
        (0.0f64..500.0, 0.0f64..500.0, 1.0f64..80.0, 1.0f64..40.0),
        "[a-z]{1,6}",
    )
        .prop_map(|((page, block, paragraph, line, word), (left, top, width, height), text)| {
            Token::new(
                Position {
                    level: 5,
                    page,
                    block,
                    paragraph,
                    line,
                    word,
                },
                Geometry {
                    left,
                    top,
                    width,
                    height,
                },
                "90",
                &text,
            )
        })
}

fn tokens_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(token_strategy(), 0..40)
}

/// A non-empty sequence plus two positions inside it.
fn sequence_with_ends() -> impl Strategy<Value = (Vec<Token>, usize, usize)> {
    prop::collection::vec(token_strategy(), 1..40).prop_flat_map(|tokens| {
        let len = tokens.len();
        (Just(tokens), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn tokens_on_a_line_share_top_and_height(tokens in tokens_strategy()) {
        let normalized = normalize_lines(tokens);
        for a in &normalized {
            for b in &normalized {
                if a.key() == b.key() {
                    prop_assert_eq!(a.geometry().top, b.geometry().top);
                    prop_assert_eq!(a.geometry().height, b.geometry().height);
                }
            }
        }
    }

    #[test]
    fn normalization_keeps_horizontal_geometry(tokens in tokens_strategy()) {
        let normalized = normalize_lines(tokens.clone());
        prop_assert_eq!(normalized.len(), tokens.len());
        for (before, after) in tokens.iter().zip(&normalized) {
            prop_assert_eq!(before.geometry().left, after.geometry().left);
            prop_assert_eq!(before.geometry().width, after.geometry().width);
            prop_assert!(after.geometry().top <= before.geometry().top);
            prop_assert!(after.geometry().height >= before.geometry().height);
            prop_assert_eq!(before.text(), after.text());
        }
    }

    #[test]
    fn normalization_is_idempotent(tokens in tokens_strategy()) {
        let once = normalize_lines(tokens);
        let twice = normalize_lines(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn range_is_symmetric((tokens, i, j) in sequence_with_ends()) {
        let seq = TokenSequence::new(tokens);
        let (a, b) = (&seq.tokens()[i], &seq.tokens()[j]);
        let forward = select_range(&seq, a, b).unwrap();
        let backward = select_range(&seq, b, a).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.len(), i.abs_diff(j) + 1);
        prop_assert_eq!(forward[0].index(), i.min(j));
    }

    #[test]
    fn range_of_one_token_is_that_token((tokens, i, _j) in sequence_with_ends()) {
        let seq = TokenSequence::new(tokens);
        let t = &seq.tokens()[i];
        let range = select_range(&seq, t, t).unwrap();
        prop_assert_eq!(range.len(), 1);
        prop_assert_eq!(&range[0], t);
    }

    #[test]
    fn plain_text_has_no_outer_whitespace(tokens in tokens_strategy()) {
        let text = plain_text(&tokens);
        prop_assert_eq!(text.trim(), text.as_str());
        let breaks = tokens
            .windows(2)
            .filter(|w| w[0].line() != w[1].line())
            .count();
        prop_assert_eq!(text.matches('\n').count(), breaks);
    }
}
