use super::outcome::Outcome;
use super::player::Player;
use super::prediction::Menu;
use super::prediction::Prediction;
use super::stakes::Stakes;
use crate::Dollars;
use crate::cards::Deck;
use crate::scores::ScoreTree;

/// The game loop. Owns the deck, the money, and the session score
/// tree; drives whoever sits down through bet, reveal, and replay
/// phases until they decline another round or the console closes.
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    stakes: Stakes,
    scores: ScoreTree,
    player: Box<dyn Player>,
}

impl Table {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            deck: Deck::new(),
            stakes: Stakes::new(),
            scores: ScoreTree::new(),
            player,
        }
    }

    pub fn run(&mut self) {
        println!("Welcome to the HiLo Card Game!");
        while let Some(bet) = self.wager() {
            self.deal();
            self.round(bet);
            self.score();
            if !self.replay() {
                break;
            }
        }
    }

    /// Take bets until one the bankroll covers, or None at end of input.
    /// The gate is exactly `Stakes::covers`: NaN fails it and re-prompts
    /// like any other bad amount.
    fn wager(&mut self) -> Option<Dollars> {
        loop {
            println!("{}", self.stakes);
            let bet = self.player.bet()?;
            if self.stakes.covers(bet) {
                return Some(bet);
            }
            log::debug!("[table] rejected bet {:.2}", bet);
            if bet > self.stakes.bankroll() {
                println!(
                    "Insufficient balance. Your current balance is: ${:.2}",
                    self.stakes.bankroll()
                );
            } else {
                println!("Bet must be greater than 0.");
            }
        }
    }

    fn deal(&mut self) {
        let ref mut rng = rand::rng();
        self.deck.shuffle(rng);
        log::debug!("[table] spread {}", self.deck);
    }

    /// Walk the spread card by card until a miss, a cash-out, the last
    /// card, or the console closing. Off-menu tokens are judged as
    /// misses rather than re-prompted; skip is honored on any card.
    fn round(&mut self, bet: Dollars) {
        self.stakes.wager(bet);
        let mut slot = 0;
        while let (Some(shown), Some(hidden)) = (self.deck.get(slot), self.deck.get(slot + 1)) {
            println!("Current card: {}", shown);
            let Some(token) = self.player.predict(Menu::from(shown)) else {
                break;
            };
            let call = Prediction::try_from(token.trim()).ok();
            if call == Some(Prediction::Skip) {
                println!("Round skipped. Moving to the next card.");
                slot += 1;
                continue;
            }
            let outcome = call
                .map(|call| Outcome::from((shown, hidden, call)))
                .unwrap_or(Outcome::Miss);
            match outcome {
                Outcome::Hit => {
                    println!(
                        "{} Your current multiplier is: {:.2}x",
                        outcome,
                        self.stakes.multiplier()
                    );
                    let winnings = self.stakes.reward(bet);
                    println!("You win ${:.2} this round!", winnings);
                    if self.player.cashout().unwrap_or(false) {
                        let balance = self.stakes.bank();
                        println!(
                            "You cashed out with ${:.2}. Your current balance is: ${:.2}",
                            winnings, balance
                        );
                        break;
                    }
                    slot += 1;
                }
                Outcome::Miss => {
                    println!("{} The next card was: {}", outcome, hidden);
                    println!("You lose your bet of ${:.2} this round.", bet);
                    self.stakes.bust();
                    break;
                }
            }
        }
    }

    fn score(&mut self) {
        let score = self.stakes.streak();
        self.scores.insert(score);
        log::info!(
            "[table] round over, streak {} bankroll {:.2}",
            score,
            self.stakes.bankroll()
        );
        println!("Game over! Your final score is: {}", score);
        println!("Scores in BST:");
        println!("{}", self.scores);
    }

    fn replay(&mut self) -> bool {
        match self.player.replay().unwrap_or(false) {
            true => {
                self.stakes.reset();
                true
            }
            false => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BANKROLL;
    use crate::BASE_MULTIPLIER;
    use crate::cards::Rank;
    use std::collections::VecDeque;

    /// Plays from canned answers; an exhausted script answers like a
    /// closed console.
    #[derive(Debug, Default)]
    struct Scripted {
        bets: VecDeque<Dollars>,
        calls: VecDeque<&'static str>,
        cashouts: VecDeque<bool>,
        replays: VecDeque<bool>,
    }

    impl Player for Scripted {
        fn bet(&mut self) -> Option<Dollars> {
            self.bets.pop_front()
        }
        fn predict(&mut self, _: Menu) -> Option<String> {
            self.calls.pop_front().map(String::from)
        }
        fn cashout(&mut self) -> Option<bool> {
            self.cashouts.pop_front()
        }
        fn replay(&mut self) -> Option<bool> {
            self.replays.pop_front()
        }
    }

    fn seated(deck: Deck, player: Scripted) -> Table {
        Table {
            deck,
            stakes: Stakes::new(),
            scores: ScoreTree::new(),
            player: Box::new(player),
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn lost_opening_call_costs_only_the_bet() {
        let deck = Deck::from([
            Rank::Five,
            Rank::Two,
            Rank::Nine,
            Rank::Ace,
            Rank::Three,
            Rank::Four,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]);
        let player = Scripted {
            calls: VecDeque::from(["higher"]),
            ..Scripted::default()
        };
        let mut table = seated(deck, player);
        table.round(10.0);
        table.score();
        assert!(table.stakes.bankroll() == 90.0);
        assert!(close(table.stakes.multiplier(), BASE_MULTIPLIER));
        assert!(table.scores.to_string() == "0");
    }

    #[test]
    fn ride_then_cash_out_banks_the_last_win() {
        let player = Scripted {
            calls: VecDeque::from(["higher", "higher"]),
            cashouts: VecDeque::from([false, true]),
            ..Scripted::default()
        };
        let mut table = seated(Deck::new(), player);
        table.round(10.0);
        assert!(close(table.stakes.bankroll(), 90.0 + 10.0 * 1.11));
        assert!(table.stakes.winnings() == 0.0);
        assert!(table.stakes.streak() == 2);
    }

    #[test]
    fn exhaustion_forfeits_unbanked_winnings() {
        let player = Scripted {
            calls: VecDeque::from(["higher"; 12]),
            cashouts: VecDeque::from([false; 12]),
            ..Scripted::default()
        };
        let mut table = seated(Deck::new(), player);
        table.round(10.0);
        assert!(table.stakes.bankroll() == 90.0);
        assert!(table.stakes.streak() == 12);
    }

    #[test]
    fn skip_spends_no_streak_on_any_card() {
        let player = Scripted {
            calls: VecDeque::from(["skip"; 12]),
            ..Scripted::default()
        };
        let mut table = seated(Deck::new(), player);
        table.round(10.0);
        table.score();
        assert!(table.stakes.bankroll() == 90.0);
        assert!(table.stakes.streak() == 0);
        assert!(table.scores.to_string() == "0");
    }

    #[test]
    fn gibberish_is_judged_a_miss() {
        let player = Scripted {
            calls: VecDeque::from(["banana"]),
            ..Scripted::default()
        };
        let mut table = seated(Deck::new(), player);
        table.round(10.0);
        assert!(table.stakes.bankroll() == 90.0);
        assert!(table.stakes.streak() == 0);
        assert!(close(table.stakes.multiplier(), BASE_MULTIPLIER));
    }

    #[test]
    fn trimmed_tokens_still_parse() {
        let player = Scripted {
            calls: VecDeque::from(["  higher "]),
            cashouts: VecDeque::from([true]),
            ..Scripted::default()
        };
        let mut table = seated(Deck::new(), player);
        table.round(10.0);
        assert!(close(table.stakes.bankroll(), 90.0 + 10.0 * 1.01));
    }

    #[test]
    fn closed_console_ends_round_scored() {
        let mut table = seated(Deck::new(), Scripted::default());
        table.round(10.0);
        table.score();
        assert!(table.stakes.bankroll() == 90.0);
        assert!(table.scores.to_string() == "0");
    }

    #[test]
    fn session_runs_bet_to_decline() {
        let player = Scripted {
            bets: VecDeque::from([10.0]),
            calls: VecDeque::from(["banana"]),
            replays: VecDeque::from([false]),
            ..Scripted::default()
        };
        let mut table = Table::new(Box::new(player));
        table.run();
        assert!(table.stakes.bankroll() == 90.0);
        assert!(table.scores.to_string() == "0");
    }

    #[test]
    fn uncoverable_bets_reprompt_until_valid() {
        let player = Scripted {
            bets: VecDeque::from([0.0, f32::NAN, 150.0, 50.0]),
            ..Scripted::default()
        };
        let mut table = Table::new(Box::new(player));
        table.run();
        assert!(table.stakes.bankroll() == 50.0);
        assert!(table.scores.to_string() == "0");
    }

    #[test]
    fn nan_bet_reprompts_instead_of_staking() {
        let player = Scripted {
            bets: VecDeque::from([f32::NAN]),
            ..Scripted::default()
        };
        let mut table = Table::new(Box::new(player));
        table.run();
        assert!(table.stakes.bankroll() == BANKROLL);
        assert!(table.scores.is_empty());
    }

    #[test]
    fn replay_carries_bankroll_and_drops_duplicate_scores() {
        let player = Scripted {
            bets: VecDeque::from([10.0, 20.0]),
            calls: VecDeque::from(["banana"]),
            replays: VecDeque::from([true]),
            ..Scripted::default()
        };
        let mut table = Table::new(Box::new(player));
        table.run();
        assert!(table.stakes.bankroll() == 70.0);
        assert!(table.scores.len() == 1);
        assert!(table.scores.to_string() == "0");
    }
}
