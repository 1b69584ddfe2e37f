use super::prediction::Prediction;
use crate::cards::Rank;
use colored::Colorize;

/// Judgment of one call against the revealed card.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// (shown, hidden, call) judgment
///
/// Same only pays on the Ace and King edges, where it stands in for
/// the direction the ladder cannot go. Off the edges an equal reveal
/// breaks both Higher and Lower.
impl From<(Rank, Rank, Prediction)> for Outcome {
    fn from((shown, hidden, call): (Rank, Rank, Prediction)) -> Self {
        match call {
            Prediction::Same if shown == Rank::Ace && hidden == Rank::Ace => Outcome::Hit,
            Prediction::Same if shown == Rank::King && hidden == Rank::King => Outcome::Hit,
            Prediction::Higher if hidden > shown => Outcome::Hit,
            Prediction::Lower if hidden < shown => Outcome::Hit,
            _ => Outcome::Miss,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Hit => write!(f, "{}", "Correct!".green()),
            Outcome::Miss => write!(f, "{}", "Incorrect!".red()),
        }
    }
}
