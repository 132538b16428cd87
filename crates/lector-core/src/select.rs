use crate::error::LectorError;
use crate::model::{Token, TokenSequence};

fn resolve(sequence: &TokenSequence, token: &Token) -> Result<usize, LectorError> {
    sequence
        .position_of(token)
        .ok_or_else(|| LectorError::UnknownToken {
            index: token.index(),
            text: token.text().to_string(),
        })
}

/// Every token between `first` and `second`, inclusive, in document order.
///
/// The two ends may be given in either order. "Between" means sequence
/// position only, so a range happily crosses paragraph and block breaks.
pub fn select_range<'a>(
    sequence: &'a TokenSequence,
    first: &Token,
    second: &Token,
) -> Result<&'a [Token], LectorError> {
    let a = resolve(sequence, first)?;
    let b = resolve(sequence, second)?;
    let (lo, hi) = (a.min(b), a.max(b));

    Ok(&sequence.tokens()[lo..=hi])
}

/// Per-token "selected" flags for one token sequence.
///
/// Owned by whoever draws the selection. Every `set` recomputes all flags,
/// so dragging back over already-selected tokens deselects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    pub fn new(len: usize) -> Selection {
        Selection {
            flags: vec![false; len],
        }
    }

    pub fn for_sequence(sequence: &TokenSequence) -> Selection {
        Selection::new(sequence.len())
    }

    /// Select the range between two tokens and clear everything else.
    ///
    /// On error the previous flags are kept.
    pub fn set(
        &mut self,
        sequence: &TokenSequence,
        first: &Token,
        second: &Token,
    ) -> Result<(), LectorError> {
        let range = select_range(sequence, first, second)?;
        let lo = range.first().map(|t| t.index()).unwrap_or(0);
        let hi = lo + range.len();

        self.flags.clear();
        self.flags
            .extend((0..sequence.len()).map(|i| lo <= i && i < hi));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = false);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// The selected tokens, in document order.
    pub fn selected<'a>(&self, sequence: &'a TokenSequence) -> Vec<&'a Token> {
        sequence
            .tokens()
            .iter()
            .filter(|t| self.is_selected(t.index()))
            .collect()
    }
}
