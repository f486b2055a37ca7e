//! Data model for the project board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use uuid::Uuid;

/// Where a project currently sits on the board.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Status {
    #[display("active")]
    Active,
    #[display("finished")]
    Finished,
}

/// A unique project identifier.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Display,
)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// An accepted project submission.
///
/// `people` is a whole count: by the time a project exists, the submitted
/// team size has passed the numeric bounds, so it is stored as the integer
/// it was accepted as.
#[derive(Debug, Serialize, Deserialize, Clone, Display)]
#[display("{title}")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Active.to_string(), "active");
        assert_eq!(Status::Finished.to_string(), "finished");
    }

    #[test]
    fn test_project_displays_its_title() {
        let project = Project {
            id: ProjectId::new(),
            title: "Website relaunch".to_owned(),
            description: "Rebuild the docs site".to_owned(),
            people: 3,
            status: Status::Active,
        };

        assert_eq!(project.to_string(), "Website relaunch");
    }
}
