use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub url: String,
    pub prompt: String,
    pub date_added: NaiveDate,
}

/// Pool template. Gets an id and a date when it enters the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub category: String,
    pub title: String,
    pub url: String,
    pub prompt: String,
}

impl Candidate {
    pub fn stamp(&self, id: u32, date_added: NaiveDate) -> Entry {
        Entry {
            id,
            category: self.category.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            prompt: self.prompt.clone(),
            date_added,
        }
    }
}
