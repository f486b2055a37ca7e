use anyhow::Result;
use derive_more::Display;
use inquire::{Select, Text};
use plank::board::Board;
use plank::models::{Project, Status};
use plank::services::Service;
use plank::utils::validation::coerce_number;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./plank.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu.
trait Menu {
    /// Runs the menu content once. Returns None to leave the menu,
    /// or Some(()) to show it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors, until it asks to leave.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    service: Service,
}

impl App {
    pub fn new(service: Service) -> Self {
        App { service }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Welcome to PLANK, the project board for your terminal.");
        self.enter_loop();
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Add a project")]
            AddProject,

            #[display("Show the board")]
            ShowBoard,

            #[display("Finish a project")]
            FinishProject,

            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::AddProject => {
                let title = Text::new("Project title:").prompt()?;
                let description = Text::new("Project description:").prompt()?;
                let people = coerce_number(&Text::new("Number of people:").prompt()?);

                let id = self.service.submit(title, description, people)?;
                let project = self.service.get(id)?;
                println!("[*] Added \"{project}\" to the active list.");
                Ok(MENU_LOOP)
            }

            Choice::ShowBoard => {
                for status in Status::iter() {
                    ProjectList {
                        service: &self.service,
                        status,
                    }
                    .show();
                }
                Ok(MENU_LOOP)
            }

            Choice::FinishProject => {
                let active: Vec<&Project> = self.service.list(Status::Active).collect();

                if active.is_empty() {
                    println!("[*] There are no active projects to finish.");
                    return Ok(MENU_LOOP);
                }

                let Some(project) =
                    Select::new("Choose a project to finish:", active).prompt_skippable()?
                else {
                    return Ok(MENU_LOOP);
                };

                let id = project.id;
                self.service.finish(id)?;
                println!("[*] Project moved to the finished list.");
                Ok(MENU_LOOP)
            }

            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

/// Renders one list section of the board.
struct ProjectList<'srv> {
    service: &'srv Service,
    status: Status,
}

impl ProjectList<'_> {
    fn show(&self) {
        println!("\n{} PROJECTS", self.status.to_string().to_uppercase());

        let mut listed = false;
        for project in self.service.list(self.status) {
            println!(
                "- {} ({} people)\n  {}",
                project.title, project.people, project.description
            );
            listed = true;
        }

        if !listed {
            println!("[*] Nothing here yet.");
        }
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    App::new(Service::new(Board::new())).start()
}
