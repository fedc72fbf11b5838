use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EventId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Calendar event (workshop, meetup, webinar)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub base: BaseAggregate<EventId>,

    #[serde(rename = "startsAt")]
    pub starts_at: chrono::DateTime<chrono::Utc>,

    #[serde(rename = "endsAt")]
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,

    pub location: String,

    #[serde(rename = "registrationUrl")]
    pub registration_url: Option<String>,

    pub published: bool,
}

impl Event {
    /// Create a new event for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        starts_at: chrono::DateTime<chrono::Utc>,
        ends_at: Option<chrono::DateTime<chrono::Utc>>,
        location: String,
        registration_url: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(EventId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            starts_at,
            ends_at,
            location,
            registration_url,
            published: false,
        }
    }

    /// ID as string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data
    pub fn update(&mut self, dto: &EventDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.starts_at = dto.starts_at;
        self.ends_at = dto.ends_at;
        self.location = dto.location.clone();
        self.registration_url = dto.registration_url.clone();
        self.published = dto.published;
    }
}

impl AggregateRoot for Event {
    type Id = EventId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "k002"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }

    fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        if let Some(ends_at) = self.ends_at {
            if ends_at < self.starts_at {
                return Err("End time must not precede start time".into());
            }
        }
        if let Some(url) = &self.registration_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Registration URL must start with http:// or https://".into());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "startsAt")]
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "endsAt")]
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "registrationUrl")]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn validate_rejects_end_before_start() {
        let starts = Utc::now();
        let mut ev = Event::new_for_insert(
            "EV-001".into(),
            "Canvas workshop".into(),
            starts,
            Some(starts - Duration::hours(1)),
            "Online".into(),
            None,
            None,
        );
        assert!(ev.validate().is_err());

        ev.ends_at = Some(starts + Duration::hours(2));
        assert!(ev.validate().is_ok());
    }
}
