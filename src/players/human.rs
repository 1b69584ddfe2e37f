use crate::Dollars;
use crate::table::Menu;
use crate::table::Player;
use dialoguer::Input;
use dialoguer::theme::Theme;

/// Prompts carry their own punctuation and spacing, so the theme
/// renders them untouched instead of appending a colon.
struct Verbatim;

impl Theme for Verbatim {
    fn format_input_prompt(
        &self,
        f: &mut dyn std::fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> std::fmt::Result {
        write!(f, "{}", prompt)
    }
    fn format_error(&self, f: &mut dyn std::fmt::Write, err: &str) -> std::fmt::Result {
        write!(f, "{}", err)
    }
}

/// Someone at the console. Every answer is read through dialoguer,
/// and a closed or failed console surfaces as None.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn bet(&mut self) -> Option<Dollars> {
        Input::with_theme(&Verbatim)
            .with_prompt("Enter your bet amount: ")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.trim().parse::<Dollars>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Enter a number"),
                }
            })
            .interact()
            .ok()?
            .trim()
            .parse::<Dollars>()
            .ok()
    }

    fn predict(&mut self, menu: Menu) -> Option<String> {
        Input::with_theme(&Verbatim)
            .with_prompt(format!("Will the next card be {}? ", menu))
            .report(false)
            .interact()
            .ok()
    }

    fn cashout(&mut self) -> Option<bool> {
        Input::with_theme(&Verbatim)
            .with_prompt("Do you want to cash out? (y/n): ")
            .report(false)
            .interact()
            .ok()
            .map(|line: String| line.trim() == "y")
    }

    fn replay(&mut self) -> Option<bool> {
        Input::with_theme(&Verbatim)
            .with_prompt("Do you want to play again? (y/n): ")
            .report(false)
            .interact()
            .ok()
            .map(|line: String| line.trim() == "y")
    }
}
