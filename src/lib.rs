//! Terminal HiLo card game.
//!
//! A 13-rank deck is reshuffled before every round; the player stakes part
//! of a bankroll on calling each hidden card higher or lower than the shown
//! one, with a payout multiplier that grows on every consecutive hit. Round
//! scores land in a binary search tree and print in ascending order.

pub mod cards;
pub mod players;
pub mod scores;
pub mod table;

/// Currency amounts: bankroll, bets, winnings.
pub type Dollars = f32;
/// Payout scaling applied to the bet on a correct call.
pub type Multiplier = f32;
/// Correct-call count for one completed round.
pub type Score = u32;

/// Bankroll granted to a fresh session.
pub const BANKROLL: Dollars = 100.0;
/// Multiplier at the start of every round.
pub const BASE_MULTIPLIER: Multiplier = 1.01;
/// Additive multiplier growth per consecutive correct call.
pub const MULTIPLIER_STEP: Multiplier = 0.1;

/// Random instance generation for tests and benches.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file; the terminal only sees
/// WARN and up so the transcript stays legible between prompts.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
