//! # Table Rendering
//!
//! Projects the roster into a [`DisplayList`]: one row per record, in store order,
//! with a 1-based position label and two actions (edit, delete) per row.
//!
//! ## Positional actions and generations
//!
//! Rows are identified by their position in the sequence at render time. Any
//! mutation shifts positions, so an action captured before a redraw may point at
//! the wrong record afterwards. Every render is stamped with a `generation` and
//! every [`RowAction`] carries the generation it was rendered in; the form
//! controller refuses actions from an older generation.
//!
//! ## Literal text
//!
//! Field values are untrusted input. Before they reach any display surface they
//! pass through [`literal`], which escapes control characters and bidirectional
//! formatting marks so a value cannot smuggle terminal escape sequences, line
//! breaks or reordered text into the output.

use crate::model::StudentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// An edit or delete control bound to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    /// Store index (0-based) at render time
    pub index: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based label shown to the user
    pub position: usize,
    pub name: String,
    pub id: String,
    pub email: String,
    pub contact: String,
    pub edit: RowAction,
    pub delete: RowAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayList {
    pub rows: Vec<DisplayRow>,
    pub empty: bool,
    pub generation: u64,
}

impl DisplayList {
    /// Looks up a row by its 1-based position label.
    pub fn row(&self, position: usize) -> Option<&DisplayRow> {
        position.checked_sub(1).and_then(|i| self.rows.get(i))
    }
}

pub fn render(records: &[StudentRecord], generation: u64) -> DisplayList {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| DisplayRow {
            position: index + 1,
            name: literal(record.name()),
            id: literal(record.id()),
            email: literal(record.email()),
            contact: literal(record.contact()),
            edit: RowAction {
                kind: ActionKind::Edit,
                index,
                generation,
            },
            delete: RowAction {
                kind: ActionKind::Delete,
                index,
                generation,
            },
        })
        .collect();

    DisplayList {
        rows,
        empty: records.is_empty(),
        generation,
    }
}

/// Escapes control characters and bidi marks so the value displays as inert text.
pub fn literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_control() || is_bidi_control(ch) {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Embeddings, overrides, isolates and the implicit direction marks.
fn is_bidi_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormFields;
    use crate::store::memory::fixtures::student;
    use crate::validation::validate;

    #[test]
    fn empty_roster_sets_empty_flag() {
        let list = render(&[], 0);
        assert!(list.empty);
        assert!(list.rows.is_empty());
    }

    #[test]
    fn rows_follow_store_order_with_one_based_positions() {
        let records = vec![student(0), student(1), student(2)];
        let list = render(&records, 7);

        assert!(!list.empty);
        assert_eq!(list.rows.len(), 3);
        for (i, row) in list.rows.iter().enumerate() {
            assert_eq!(row.position, i + 1);
            assert_eq!(row.name, records[i].name());
            assert_eq!(row.edit.index, i);
            assert_eq!(row.delete.index, i);
            assert_eq!(row.edit.kind, ActionKind::Edit);
            assert_eq!(row.delete.kind, ActionKind::Delete);
            assert_eq!(row.edit.generation, 7);
        }
    }

    #[test]
    fn row_lookup_by_position() {
        let list = render(&[student(0), student(1)], 0);
        assert_eq!(list.row(2).unwrap().edit.index, 1);
        assert!(list.row(0).is_none());
        assert!(list.row(3).is_none());
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(literal("a\u{1b}[31mb"), "a\\u{1b}[31mb");
        assert_eq!(literal("line\nbreak"), "line\\nbreak");
        assert_eq!(literal("<b>plain</b>"), "<b>plain</b>");
    }

    #[test]
    fn bidi_overrides_are_escaped() {
        assert_eq!(literal("a\u{202E}moc.b"), "a\\u{202e}moc.b");
        assert_eq!(literal("x\u{2066}y\u{2069}"), "x\\u{2066}y\\u{2069}");
        assert_eq!(literal("\u{200F}"), "\\u{200f}");
        // Other non-ASCII text is left alone.
        assert_eq!(literal("Zoë 名前"), "Zoë 名前");
    }

    #[test]
    fn spoofed_email_renders_in_stored_order() {
        let record = validate(&FormFields::new(
            "Eve",
            "1",
            "eve@evil\u{202E}moc.example",
            "1234567890",
        ))
        .unwrap();

        let list = render(&[record], 0);
        assert!(!list.rows[0].email.contains('\u{202E}'));
        assert_eq!(list.rows[0].email, "eve@evil\\u{202e}moc.example");
    }

    #[test]
    fn untrusted_email_renders_inert() {
        // The email pattern allows any non-whitespace, so ESC gets through validation.
        let record = validate(&FormFields::new(
            "Eve",
            "1",
            "e\u{1b}]0;pwned\u{7}@x.io",
            "1234567890",
        ))
        .unwrap();

        let list = render(&[record], 0);
        assert!(!list.rows[0].email.contains('\u{1b}'));
        assert!(list.rows[0].email.contains("\\u{1b}"));
    }
}
