//! Per-view form state backing controlled inputs.
//!
//! DESIGN
//! ======
//! One `FormState` instance per form, owned by its view through an
//! `RwSignal`. Field updates are last-write-wins; nothing here debounces,
//! validates, or persists. Views re-initialize to empty on mount and after a
//! successful submission.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Ordered field-name to text-value mapping for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(&'static str, String)>,
}

impl FormState {
    /// Build a form with the given fields, all initialized empty.
    pub fn new(field_names: &[&'static str]) -> Self {
        Self {
            fields: field_names.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    /// Overwrite one field's value. Writes to unknown field names are
    /// ignored; sibling fields are never touched.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value.into();
        }
    }

    /// Current value of a field, or `""` for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Reset every field back to the empty string.
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// Whether every declared field holds a non-blank value.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|(_, v)| !v.trim().is_empty())
    }
}
