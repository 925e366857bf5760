use colored::Colorize;
use roster::commands::{CmdMessage, MessageLevel};
use roster::model::{Field, FormFields};
use roster::table::{literal, DisplayList};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["#", "Name", "ID", "Email", "Contact"];
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_table(list: &DisplayList) {
    for line in format_table(list) {
        println!("{}", line);
    }
}

/// Lays the table out as plain lines; the header line is bolded when printed.
fn format_table(list: &DisplayList) -> Vec<String> {
    if list.empty {
        return vec!["No students yet.".dimmed().to_string()];
    }

    let cells: Vec<[String; 5]> = list
        .rows
        .iter()
        .map(|row| {
            [
                format!("{}.", row.position),
                row.name.clone(),
                row.id.clone(),
                row.email.clone(),
                row.contact.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header = join_padded(&HEADERS.map(String::from), &widths);
    let mut lines = vec![header.bold().to_string()];
    lines.extend(cells.iter().map(|row| join_padded(row, &widths)));
    lines
}

fn join_padded(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

pub(super) fn print_form(fields: &FormFields, label: &str) {
    println!("{}", format!("[{}]", label).bold());
    for field in Field::ALL {
        let value = fields.get(field);
        let shown = if value.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            literal(value)
        };
        println!("  {:<8} {}", format!("{:?}", field).to_lowercase(), shown);
    }
}
