//! HiLo Binary
//!
//! Interactive terminal game: bankroll betting over a reshuffled 13-rank
//! deck, with round scores kept in a session score tree.

use hilo::players::Human;
use hilo::table::Table;

fn main() {
    hilo::log();
    Table::new(Box::new(Human)).run();
}
