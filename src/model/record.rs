//! Member records: the wire format and the in-memory row type.
//!
//! `Member` is what the data source delivers. `Record` is what the table
//! holds: the same fields plus the UI-only `editing` flag, which is never
//! part of the source data.

use serde::Deserialize;
use std::fmt;

// ===== RecordId =====

/// Stable identity of a record.
///
/// Membership tests (selection, deletion, lookup) go through this key
/// instead of comparing whole records, so copies and edited versions of a
/// record still refer to the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw id string. Any string is accepted, including the empty one.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id as delivered by the data source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Member =====

/// One element of the JSON array returned by the data source.
///
/// Unknown fields are ignored; all four fields are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Free-text role (e.g. "admin", "member").
    pub role: String,
}

impl Member {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

// ===== EditableField =====

/// The fields a user may change in edit mode. The id is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    /// `name` column.
    Name,
    /// `email` column.
    Email,
    /// `role` column.
    Role,
}

impl EditableField {
    /// All editable fields in column order.
    pub const ALL: [EditableField; 3] = [Self::Name, Self::Email, Self::Role];

    /// Next field in column order, wrapping from role back to name.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Role,
            Self::Role => Self::Name,
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

// ===== Record =====

/// A row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    email: String,
    role: String,
    editing: bool,
}

impl Record {
    /// Build a record from source data, not in edit mode.
    pub fn from_member(member: Member) -> Self {
        Self {
            id: RecordId::new(member.id),
            name: member.name,
            email: member.email,
            role: member.role,
            editing: false,
        }
    }

    /// Stable identity.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current role.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Whether the row is in inline-edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Value of an editable field.
    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
            EditableField::Role => &self.role,
        }
    }

    /// Searchable columns, in the order they are matched.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [self.id.as_str(), &self.name, &self.email, &self.role]
    }

    pub(crate) fn set_field(&mut self, field: EditableField, value: String) {
        match field {
            EditableField::Name => self.name = value,
            EditableField::Email => self.email = value,
            EditableField::Role => self.role = value,
        }
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }
}

impl From<Member> for Record {
    fn from(member: Member) -> Self {
        Self::from_member(member)
    }
}
