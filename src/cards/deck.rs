use super::rank::Rank;
use rand::Rng;

/// A single suitless 13-card pack. Built in Ace-to-King order, dealt
/// left to right via ::get(), reordered in place via ::shuffle().
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck([Rank; Rank::N]);

impl Deck {
    pub fn new() -> Self {
        Self(Rank::all())
    }

    /// read the card at a slot without consuming it
    pub fn get(&self, slot: usize) -> Option<Rank> {
        self.0.get(slot).copied()
    }

    /// Fisher-Yates, swapping each slot with a uniformly chosen
    /// earlier-or-equal slot from the back of the pack forward
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }
}

impl From<[Rank; Rank::N]> for Deck {
    fn from(ranks: [Rank; Rank::N]) -> Self {
        Self(ranks)
    }
}
impl From<Deck> for [Rank; Rank::N] {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (slot, rank) in self.0.iter().enumerate() {
            if slot > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
