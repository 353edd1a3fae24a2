use anyhow::Result;
use derive_more::Display;
use dotenv::dotenv;
use inquire::{Confirm, MultiSelect, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use formguard::config::Settings;
use formguard::utils::localization::{Localizer, TableLocalizer};
use formguard::{
    format_mobile_number, should_validate_nic, should_validate_text, validate_email,
    validate_mobile_number, validate_required_fields, CheckOption, DataSlot, FieldDisplay,
    FormField,
};

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs one round of the menu. Returns None when the menu wants to
    /// exit, Some(()) to run it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it exits, reporting errors in between.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

/// Feeds `input` one character at a time through `gate`, the way a text
/// field would, and returns what the field ends up holding.
fn replay_typing(input: &str, gate: impl Fn(&str, &str) -> bool) -> String {
    let mut field = String::new();
    for c in input.chars() {
        let mut buf = [0u8; 4];
        let changed = c.encode_utf8(&mut buf);
        if gate(changed, &field) {
            field.push(c);
        }
    }
    field
}

struct ConsoleField {
    label: &'static str,
    text: String,
}

impl FormField for ConsoleField {
    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

struct ConsoleDisplay;

impl FieldDisplay<ConsoleField> for ConsoleDisplay {
    fn mark_invalid(&mut self, field: &ConsoleField) {
        println!("[!] {}", field.label);
    }

    fn set_error(&mut self, field: &ConsoleField, message: &str) {
        println!("    {}: {}", field.label, message);
    }
}

struct App {
    localizer: TableLocalizer,
}

impl App {
    fn check_form(&self) -> Result<()> {
        let labels = ["Name", "Email", "Mobile number"];
        let mut fields = Vec::with_capacity(labels.len());
        for label in labels {
            let text = Text::new(&format!("{label}:")).prompt()?;
            fields.push(ConsoleField { label, text });
        }

        let photo = ConsoleField { label: "Profile photo", text: String::new() };
        let has_photo = Confirm::new("Attach a profile photo?").with_default(true).prompt()?;
        let data = [DataSlot::new(has_photo, &photo)];
        let errors = [None, Some("Error_Email_Required"), None];

        let valid = validate_required_fields(
            Some(&fields[..]),
            &errors,
            &data,
            &mut ConsoleDisplay,
            &self.localizer,
        );
        if valid {
            println!("[*] Form is complete");
        } else {
            println!("[*] {}", self.localizer.localize("Form_Incomplete"));
        }
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Check an email address")]
            Email,
            #[display("Type a mobile number")]
            Mobile,
            #[display("Type a NIC number")]
            Nic,
            #[display("Check text against character classes")]
            Text,
            #[display("Fill a registration form")]
            Form,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Email => {
                let email = Text::new("Email:").prompt()?;
                let verdict = if validate_email(&email) { "valid" } else { "invalid" };
                println!("[*] {email} is {verdict}");
            }
            Choice::Mobile => {
                let input = Text::new("Mobile number:").prompt()?;
                let typed = replay_typing(&input, |changed, text| validate_mobile_number(text, changed));
                if typed != input {
                    println!("[*] Field stopped accepting input at {typed}");
                }
                let formatted = format_mobile_number(
                    &typed,
                    Some(|| println!("[!] {typed} is not a mobile number")),
                );
                if let Some(formatted) = formatted {
                    println!("[*] Canonical form: {formatted}");
                }
            }
            Choice::Nic => {
                let input = Text::new("NIC number:").prompt()?;
                let typed = replay_typing(&input, should_validate_nic);
                println!("[*] Field holds {typed}");
            }
            Choice::Text => {
                let text = Text::new("Text:").prompt()?;
                let options =
                    MultiSelect::new("Options:", CheckOption::iter().collect()).prompt()?;
                let verdict = if should_validate_text(&text, &options) { "accepted" } else { "rejected" };
                println!("[*] {text:?} is {verdict}");
            }
            Choice::Form => self.check_form()?,
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn init_logging(settings: &Settings) -> Result<()> {
    let level = settings.level_filter()?;
    match &settings.log_file {
        Some(path) => simple_logging::log_to_file(path, level)?,
        None => env_logger::builder().filter_level(level).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    info!("formguard started");

    App { localizer: settings.localizer() }.enter_loop();
    Ok(())
}
