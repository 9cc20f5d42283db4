use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Calendar date kept as `YYYY-MM-DD` text.
    pub date: String,
    pub location: String,
}

/// A fully validated event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub location: String,
}

/// Validated partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChanges {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.location.is_none()
    }
}
