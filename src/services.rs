//! Submission handling, and the single entry point for board mutations.

use log::info;
use serde_json::json;
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::models::{Project, ProjectId, Status};
use crate::utils::validation::{
    validate, Validatable, Value, DESCRIPTION_MIN_LENGTH, PEOPLE_MAX, PEOPLE_MIN,
};

pub struct Service {
    board: Board,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid input, please try again!")]
    RejectedInput,

    #[error(transparent)]
    BoardError(#[from] BoardError),
}

impl Service {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Validates a submission field by field and, if every check passes,
    /// stores it as a new active project. Any failing field rejects the
    /// submission as a whole.
    pub fn submit(
        &mut self,
        title: String,
        description: String,
        people: f64,
    ) -> Result<ProjectId, ServiceError> {
        let title_check = Validatable::required(Value::Text(title.clone()));
        let description_check = Validatable {
            min_length: Some(DESCRIPTION_MIN_LENGTH),
            ..Validatable::required(Value::Text(description.clone()))
        };
        let people_check = Validatable {
            min: Some(PEOPLE_MIN),
            max: Some(PEOPLE_MAX),
            ..Validatable::required(Value::Number(people))
        };

        if !validate(&title_check) || !validate(&description_check) || !validate(&people_check) {
            return Err(ServiceError::RejectedInput);
        }

        let project = Project {
            id: ProjectId::new(),
            title,
            description,
            people: people as u32,
            status: Status::Active,
        };

        info!(
            "Accepted submission: {}",
            json!({
                "id": project.id,
                "title": project.title,
                "description": project.description,
                "people": project.people,
            })
        );

        let id = project.id;
        self.board.store_project(project);
        Ok(id)
    }

    /// Moves a project from the active list to the finished list.
    pub fn finish(&mut self, project: ProjectId) -> Result<(), ServiceError> {
        self.board.set_status(project, Status::Finished)?;
        info!("Project {project} moved to the finished list");
        Ok(())
    }

    pub fn get(&self, project: ProjectId) -> Result<&Project, ServiceError> {
        Ok(self.board.get_project(project)?)
    }

    pub fn list(&self, status: Status) -> impl Iterator<Item = &Project> + '_ {
        self.board.list_projects(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Service {
        Service::new(Board::new())
    }

    #[test]
    fn test_valid_submission_is_stored() {
        let mut service = service();

        let id = service
            .submit(
                "Website".to_owned(),
                "Rebuild the docs site".to_owned(),
                3.0,
            )
            .unwrap();

        let project = service.get(id).unwrap();
        assert_eq!(project.title, "Website");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, Status::Active);
        assert_eq!(service.list(Status::Active).count(), 1);
    }

    #[test]
    fn test_rejected_submissions() {
        let cases = vec![
            ("", "A valid description", 3.0, "empty title"),
            ("   ", "A valid description", 3.0, "blank title"),
            ("Website", "abcd", 3.0, "short description"),
            ("Website", "    ", 3.0, "blank description"),
            ("Website", "A valid description", 0.0, "people below minimum"),
            ("Website", "A valid description", 6.0, "people above maximum"),
            ("Website", "A valid description", f64::NAN, "unparseable people"),
        ];

        for (title, description, people, reason) in cases {
            let mut service = service();
            let result = service.submit(title.to_owned(), description.to_owned(), people);

            assert!(
                matches!(result, Err(ServiceError::RejectedInput)),
                "Submission with {reason} was accepted!"
            );
            assert_eq!(
                service.list(Status::Active).count(),
                0,
                "Submission with {reason} reached the board!"
            );
        }
    }

    #[test]
    fn test_people_bounds_are_inclusive() {
        for people in [1.0, 5.0] {
            let mut service = service();
            assert!(service
                .submit("Website".to_owned(), "Rebuild the docs site".to_owned(), people)
                .is_ok());
        }
    }

    #[test]
    fn test_finish_moves_project() {
        let mut service = service();
        let id = service
            .submit(
                "Website".to_owned(),
                "Rebuild the docs site".to_owned(),
                3.0,
            )
            .unwrap();

        service.finish(id).unwrap();

        assert_eq!(service.list(Status::Active).count(), 0);
        assert_eq!(service.list(Status::Finished).count(), 1);
    }

    #[test]
    fn test_finish_unknown_project() {
        let mut service = service();

        assert!(matches!(
            service.finish(ProjectId::new()),
            Err(ServiceError::BoardError(_))
        ));
    }
}
