//! In-memory storage for the project board.
//!
//! The board lives and dies with the process; nothing is written to disk.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Project, ProjectId, Status};

#[derive(Default)]
pub struct Board {
    projects: HashMap<ProjectId, Project>,
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid project ID: {0}")]
    InvalidProjectId(ProjectId),
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    pub fn get_project(&self, project: ProjectId) -> Result<&Project, BoardError> {
        self.projects
            .get(&project)
            .ok_or(BoardError::InvalidProjectId(project))
    }

    /// Moves a project to the given list.
    pub fn set_status(&mut self, project: ProjectId, status: Status) -> Result<(), BoardError> {
        self.projects
            .get_mut(&project)
            .ok_or(BoardError::InvalidProjectId(project))?
            .status = status;
        Ok(())
    }

    pub fn list_projects(&self, status: Status) -> impl Iterator<Item = &Project> + '_ {
        self.projects
            .values()
            .filter(move |project| project.status == status)
    }
}
