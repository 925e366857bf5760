use super::print::{print_form, print_messages, print_table};
use super::prompt::confirm;
use colored::Colorize;
use roster::commands::CmdMessage;
use roster::error::Result;
use roster::form::FormController;
use roster::model::Field;
use roster::store::Slot;
use roster::table::{DisplayRow, RowAction};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  name <text>      set the name (letters and spaces)
  id <digits>      set the student ID
  email <text>     set the email
  contact <digits> set the contact number (10+ digits)
  submit           add the student, or save the edit
  edit <n>         load row n into the form
  delete <n>       delete row n
  reset            clear the form and stop editing
  show             show the form
  list             show the roster
  help             show this help
  quit             leave";

/// Runs the interactive form until `quit` or end of input.
pub(super) fn run<S: Slot>(form: &mut FormController<S>, confirm_delete: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", HELP.dimmed());
    print_table(form.view());

    loop {
        print!("{}> ", form.submit_label().to_lowercase());
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let (command, rest) = split_command(&line);

        match command {
            "" => {}
            "name" | "id" | "email" | "contact" => {
                let Ok(field) = command.parse::<Field>() else {
                    continue;
                };
                let kept = form.type_field(field, rest).to_string();
                if kept != rest {
                    print_messages(&[CmdMessage::info(format!(
                        "Removed characters not allowed in {}: now \"{}\"",
                        field, kept
                    ))]);
                }
            }
            "submit" => {
                let result = form.submit()?;
                print_messages(&result.messages);
                if result.is_applied() {
                    print_table(form.view());
                }
            }
            "edit" => {
                let Some(action) = row_action(form, rest, |row| row.edit) else {
                    print_messages(&[CmdMessage::warning(format!("No row \"{}\"", rest))]);
                    continue;
                };
                let result = form.edit_row(action);
                print_messages(&result.messages);
                print_form(form.fields(), form.submit_label());
            }
            "delete" => {
                let Some(action) = row_action(form, rest, |row| row.delete) else {
                    print_messages(&[CmdMessage::warning(format!("No row \"{}\"", rest))]);
                    continue;
                };
                let result = form.delete_row(action, |record| {
                    !confirm_delete
                        || confirm(
                            &format!("Delete student {}: {}?", action.index + 1, record.name()),
                            &mut lines,
                        )
                })?;
                print_messages(&result.messages);
                if result.is_applied() {
                    print_table(form.view());
                }
            }
            "reset" => {
                form.reset();
                print_messages(&[CmdMessage::info("Form cleared")]);
            }
            "show" => print_form(form.fields(), form.submit_label()),
            "list" => print_table(form.view()),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => print_messages(&[CmdMessage::warning(format!(
                "Unknown command \"{}\" (try help)",
                other
            ))]),
        }
    }

    Ok(())
}

/// Splits `"email  a@b.com"` into `("email", "a@b.com")`.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}

fn parse_position(text: &str) -> Option<usize> {
    text.trim().parse().ok()
}

/// Picks an action from the currently displayed row at `position`.
fn row_action<S: Slot>(
    form: &FormController<S>,
    position: &str,
    pick: impl Fn(&DisplayRow) -> RowAction,
) -> Option<RowAction> {
    parse_position(position)
        .and_then(|p| form.view().row(p))
        .map(pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_and_argument() {
        assert_eq!(split_command("  name   Ann Lee "), ("name", "Ann Lee"));
        assert_eq!(split_command("submit"), ("submit", ""));
        assert_eq!(split_command(""), ("", ""));
    }

    #[test]
    fn positions_are_numbers() {
        assert_eq!(parse_position(" 3 "), Some(3));
        assert_eq!(parse_position("x"), None);
    }
}
