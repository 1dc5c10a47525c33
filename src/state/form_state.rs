use crate::git::commit::{CommitData, EditableField, Person};
use crate::git::validation::{format_timestamp, parse_timestamp, unset_timestamp};
use tracing::warn;

/// Display width of every input in the commit form
pub const FIELD_WIDTH: usize = 30;

/// A single-line edit buffer with a character-indexed cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub cursor: usize,
    capacity: usize,
}

impl FormField {
    /// Create a field holding `value` with the cursor at the start
    ///
    /// The field accepts `FIELD_WIDTH` characters, or as many as `value`
    /// already holds when that is more.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let capacity = value.chars().count().max(FIELD_WIDTH);
        Self {
            value,
            cursor: 0,
            capacity,
        }
    }

    /// Most characters the field accepts
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor
    ///
    /// Refused once the field is at capacity.
    pub fn insert(&mut self, c: char) -> bool {
        if self.char_count() >= self.capacity {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Slice of the value that fits in `width` columns with the cursor in view
    ///
    /// Returns the visible text and the cursor column within it.
    #[must_use]
    pub fn window(&self, width: usize) -> (String, usize) {
        let width = width.max(1);
        let start = (self.cursor + 1).saturating_sub(width);
        let visible: String = self.value.chars().skip(start).take(width).collect();
        (visible, self.cursor - start)
    }
}

impl Default for FormField {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Buffers of the six-field commit form and the focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: [FormField; 6],
    pub focus: EditableField,
}

impl FormState {
    /// Pre-fill the form from a commit's author and committer
    #[must_use]
    pub fn from_commit(commit: &CommitData) -> Self {
        let fields = [
            FormField::new(commit.author.name.as_str()),
            FormField::new(commit.author.email.as_str()),
            FormField::new(format_timestamp(&commit.author.when)),
            FormField::new(commit.committer.name.as_str()),
            FormField::new(commit.committer.email.as_str()),
            FormField::new(format_timestamp(&commit.committer.when)),
        ];
        Self {
            fields,
            focus: EditableField::AuthorName,
        }
    }

    #[must_use]
    pub fn field(&self, field: EditableField) -> &FormField {
        &self.fields[field.index()]
    }

    /// The field that receives edits
    pub fn focused_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.focus.index()]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Write the trimmed buffers onto `commit`
    ///
    /// A timestamp that does not parse is stored as the unset timestamp; the
    /// fields where that happened are returned.
    pub fn write_to(&self, commit: &mut CommitData) -> Vec<EditableField> {
        let mut invalid_dates = Vec::new();
        let text = |field: EditableField| self.field(field).value.trim().to_string();
        let mut when = |field: EditableField| match parse_timestamp(&self.field(field).value) {
            Ok(dt) => dt,
            Err(e) => {
                warn!(field = field.display_name(), error = %e, "using unset timestamp");
                invalid_dates.push(field);
                unset_timestamp()
            }
        };

        let author_when = when(EditableField::AuthorDate);
        let committer_when = when(EditableField::CommitterDate);

        commit.author = Person::new(
            text(EditableField::AuthorName),
            text(EditableField::AuthorEmail),
            author_when,
        );
        commit.committer = Person::new(
            text(EditableField::CommitterName),
            text(EditableField::CommitterEmail),
            committer_when,
        );

        invalid_dates
    }
}
