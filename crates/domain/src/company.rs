use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A `Company` is owned and written by other parts of the system.
/// This crate only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub created: DateTime<Utc>,
}

impl Company {
    pub fn new<N: Into<String>>(id: i64, name: N) -> Self {
        Self {
            id: ID::new(id),
            name: name.into(),
            description: None,
            website: None,
            created: Utc::now(),
        }
    }

    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_website<T: Into<String>>(mut self, website: T) -> Self {
        self.website = Some(website.into());
        self
    }
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}
