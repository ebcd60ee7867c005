use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category an activity belongs to.
///
/// The menu presents these as choices 1 through 5 and the store keeps the
/// upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Work,
    Leisure,
    Health,
    Education,
    Other,
}

impl Role {
    /// All roles in menu order.
    pub const ALL: [Role; 5] =
        [Role::Work, Role::Leisure, Role::Health, Role::Education, Role::Other];

    /// Look up a role by its 1-based menu index.
    pub fn from_choice(choice: i64) -> Result<Self, Error> {
        match choice {
            1 => Ok(Role::Work),
            2 => Ok(Role::Leisure),
            3 => Ok(Role::Health),
            4 => Ok(Role::Education),
            5 => Ok(Role::Other),
            other => Err(Error::InvalidRoleChoice(other.to_string())),
        }
    }

    pub fn choice(self) -> i64 {
        match self {
            Role::Work => 1,
            Role::Leisure => 2,
            Role::Health => 3,
            Role::Education => 4,
            Role::Other => 5,
        }
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Work => "WORK",
            Role::Leisure => "LEISURE",
            Role::Health => "HEALTH",
            Role::Education => "EDUCATION",
            Role::Other => "OTHER",
        }
    }

    /// Label shown in the role menu.
    pub fn label(self) -> &'static str {
        match self {
            Role::Work => "Work",
            Role::Leisure => "Leisure",
            Role::Health => "Health",
            Role::Education => "Education",
            Role::Other => "Other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// Everything about an activity except its identifier.
///
/// This is what an update replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFields {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role: Role,
}

/// One daily-routine record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role: Role,
}

impl Activity {
    pub fn new(id: impl Into<String>, fields: ActivityFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            date: fields.date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            role: fields.role,
        }
    }

    /// Whole minutes between start and end, truncated toward zero.
    ///
    /// Negative when the end time is earlier than the start time.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    pub fn format_details(&self) -> String {
        format!(
            "ID: {}, Name: {}, Role: {}, Duration: {} minutes",
            self.id,
            self.name,
            self.role,
            self.duration_minutes()
        )
    }
}
