use serde::Serialize;

use crate::db::models::ChecklistItem;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// One calendar event per symptom log, shaped for the calendar widget.
/// `color` is derived from severity on every read, never stored.
#[derive(Debug, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    pub color: String,
    #[serde(rename = "extendedProps")]
    pub extended_props: CalendarEventProps,
}

#[derive(Debug, Serialize)]
pub struct CalendarEventProps {
    pub notes: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistItemDto {
    pub item_id: i64,
    pub content: String,
    pub is_completed: bool,
}

impl From<ChecklistItem> for ChecklistItemDto {
    fn from(item: ChecklistItem) -> Self {
        Self {
            item_id: item.item_id,
            content: item.content,
            is_completed: item.is_completed,
        }
    }
}
