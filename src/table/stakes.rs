use crate::BANKROLL;
use crate::BASE_MULTIPLIER;
use crate::Dollars;
use crate::MULTIPLIER_STEP;
use crate::Multiplier;
use crate::Score;

/// The money side of a session. Bankroll is settled cash; winnings
/// ride on the current streak and are forfeit on a miss, banked only
/// by cashing out.
#[derive(Debug, Clone, Copy)]
pub struct Stakes {
    bankroll: Dollars,
    winnings: Dollars,
    multiplier: Multiplier,
    streak: Score,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            bankroll: BANKROLL,
            winnings: 0.0,
            multiplier: BASE_MULTIPLIER,
            streak: 0,
        }
    }
}

impl Stakes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bankroll(&self) -> Dollars {
        self.bankroll
    }

    pub fn winnings(&self) -> Dollars {
        self.winnings
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn streak(&self) -> Score {
        self.streak
    }

    /// whether the bankroll can stake this bet
    pub fn covers(&self, bet: Dollars) -> bool {
        bet > 0.0 && bet <= self.bankroll
    }

    /// take the bet out of the bankroll up front
    pub fn wager(&mut self, bet: Dollars) {
        assert!(self.covers(bet));
        self.bankroll -= bet;
    }

    /// Pay out a correct call. The win replaces rather than stacks on
    /// the riding winnings, then the multiplier climbs a step.
    pub fn reward(&mut self, bet: Dollars) -> Dollars {
        self.streak += 1;
        self.winnings = bet * self.multiplier;
        self.multiplier += MULTIPLIER_STEP;
        self.winnings
    }

    /// bank the riding winnings into the bankroll
    pub fn bank(&mut self) -> Dollars {
        self.bankroll += self.winnings;
        self.winnings = 0.0;
        self.bankroll
    }

    /// a miss forfeits the riding winnings and the climb
    pub fn bust(&mut self) {
        self.winnings = 0.0;
        self.multiplier = BASE_MULTIPLIER;
    }

    /// fresh streak for a new round, bankroll carried over
    pub fn reset(&mut self) {
        self.winnings = 0.0;
        self.multiplier = BASE_MULTIPLIER;
        self.streak = 0;
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Your current balance: ${:.2}", self.bankroll)
    }
}
