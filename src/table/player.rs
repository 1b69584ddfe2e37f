use super::prediction::Menu;
use crate::Dollars;

/// Seam between the table and whoever is making decisions. The table
/// narrates all money and card state itself; answers carry no context
/// beyond the menu of legal calls. Every method returns None when the
/// other side of the console is gone, which the table treats as
/// declining and winds the session down.
///
/// predict() hands back the raw token rather than a parsed call: the
/// table judges off-menu answers as losses instead of asking again.
pub trait Player: std::fmt::Debug {
    fn bet(&mut self) -> Option<Dollars>;
    fn predict(&mut self, menu: Menu) -> Option<String>;
    fn cashout(&mut self) -> Option<bool>;
    fn replay(&mut self) -> Option<bool>;
}
