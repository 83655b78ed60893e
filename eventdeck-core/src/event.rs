//! Event record types.
//!
//! These mirror the wire format of the remote event store: camelCase JSON,
//! optional image fields omitted when absent. Frontends work exclusively
//! with these types for listing, filtering and editing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event record as stored in the remote collection.
///
/// `end_time` is strictly after `start_time`; the validator enforces this
/// before a record is ever submitted. Edits resend the whole record, so a
/// loaded `Event` is always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier assigned by the store
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    /// Free-text tags, in the order the organizer entered them
    pub categories: Vec<String>,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_image: Option<String>,
}

/// A new event about to be created: the same shape as [`Event`] minus the
/// id, which the store assigns on POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub categories: Vec<String>,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_image: Option<String>,
}

impl EventDraft {
    /// Attach a store-assigned id, turning the draft into a full record.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            categories: self.categories,
            organizer: self.organizer,
            organizer_image: self.organizer_image,
        }
    }
}
