use crate::cards::Rank;

/// What the player calls about the hidden card relative to the shown
/// one. Skip passes the slot without staking the streak on it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Prediction {
    Higher,
    Lower,
    Same,
    Skip,
}

/// str isomorphism
///
/// Exact lowercase tokens only. Anything else is not a prediction and
/// the table judges it as a losing call rather than asking again.
impl TryFrom<&str> for Prediction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "higher" => Ok(Prediction::Higher),
            "lower" => Ok(Prediction::Lower),
            "same" => Ok(Prediction::Same),
            "skip" => Ok(Prediction::Skip),
            _ => Err(anyhow::anyhow!("not a prediction: {}", s)),
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Prediction::Higher => write!(f, "higher"),
            Prediction::Lower => write!(f, "lower"),
            Prediction::Same => write!(f, "same"),
            Prediction::Skip => write!(f, "skip"),
        }
    }
}

/// The calls worth offering against a shown card. An Ace cannot be
/// beaten downward and a King cannot be beaten upward, so the edges
/// trade their dead direction for Same.
#[derive(Debug, Clone, Copy)]
pub struct Menu(&'static [Prediction]);

impl From<Rank> for Menu {
    fn from(shown: Rank) -> Self {
        match shown {
            Rank::Ace => Self(&[Prediction::Higher, Prediction::Same]),
            Rank::King => Self(&[Prediction::Lower, Prediction::Same]),
            _ => Self(&[Prediction::Higher, Prediction::Lower, Prediction::Skip]),
        }
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            [a, b] => write!(f, "'{}' or '{}'", a, b),
            [a, b, c] => write!(f, "'{}', '{}' or '{}'", a, b, c),
            _ => unreachable!("menus offer two or three calls"),
        }
    }
}
