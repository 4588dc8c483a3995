/// A person known to the system, identified by a numeric id.
///
/// Both fields start out unset (empty name, id `0`) and can be reassigned
/// freely after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
    id: i64,
}

impl Person {
    /// Creates a Person with an empty name and an id of `0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the stored name. Any text is accepted as-is.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Replaces the stored id. Negative values are kept too.
    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
