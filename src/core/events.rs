//! Narrated outcome events. The engine never renders; it emits an ordered
//! sequence of these records and the caller decides how to present them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::constants::EVENT_LOG_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Combat,
    Status,
    Loot,
    Progress,
    Cards,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub text: String,
    pub category: EventCategory,
}

impl Event {
    pub fn new(category: EventCategory, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn combat(text: impl Into<String>) -> Self {
        Self::new(EventCategory::Combat, text)
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self::new(EventCategory::Status, text)
    }

    pub fn loot(text: impl Into<String>) -> Self {
        Self::new(EventCategory::Loot, text)
    }

    pub fn progress(text: impl Into<String>) -> Self {
        Self::new(EventCategory::Progress, text)
    }

    pub fn cards(text: impl Into<String>) -> Self {
        Self::new(EventCategory::Cards, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(EventCategory::System, text)
    }
}

/// Bounded rolling log of recent events, oldest evicted first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    pub fn push(&mut self, event: Event) {
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    pub fn extend(&mut self, events: &[Event]) {
        for event in events {
            self.push(event.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
