//! # CLI Layer
//!
//! This module is **one possible UI client** for roster, the terminal
//! counterpart of the web dashboard.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Runs the form rules in [`roster::validation`] before writing
//!
//! ## Session
//!
//! With a command on the process arguments, roster runs it once and exits.
//! Otherwise it reads one command per line from stdin until `quit` or EOF.
//! The store lives exactly as long as the session. A failing command prints
//! its error and the session carries on; in one-shot mode the error becomes
//! the exit status.

use super::render::{
    print_courses, print_json, print_messages, print_stats, print_student, print_students,
    print_validation,
};
use super::setup::{init_tracing, Cli, SessionCommand, SessionLine};
use super::tokenize::split_line;
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use roster::api::{CourseFilter, StudentFilter};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::init::{initialize, load_config, RosterContext};
use roster::model::{NewStudent, StudentPatch};
use roster::search::SearchSequencer;
use roster::validation::{validate_student, validate_update};
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

const PROMPT: &str = "roster> ";

struct Session {
    ctx: RosterContext,
    searches: SearchSequencer,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed_sample_data = false;
    }
    let mut session = Session::new(config);

    match cli.command {
        Some(command) => session.dispatch(command).map(|_| ()),
        None => session.repl(),
    }
}

impl Session {
    fn new(config: RosterConfig) -> Self {
        Self {
            ctx: initialize(config),
            searches: SearchSequencer::new(),
        }
    }

    fn repl(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        if interactive {
            println!(
                "Welcome back, {}! Type {} for commands, {} to leave.",
                self.ctx.user.name.bold(),
                "help".cyan(),
                "quit".cyan()
            );
        }

        let mut lines = stdin.lock().lines();
        loop {
            if interactive {
                print!("{PROMPT}");
                std::io::stdout().flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if let Flow::Quit = self.handle_line(&line?) {
                break;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let args = match split_line(line) {
            Ok(args) if args.is_empty() => return Flow::Continue,
            Ok(args) => args,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                return Flow::Continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(&args) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Covers `help` and `--help` as well as real mistakes.
                let _ = e.print();
                return Flow::Continue;
            }
        };

        match self.dispatch(parsed.command) {
            Ok(flow) => flow,
            Err(e) => {
                report_error(&e);
                Flow::Continue
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        debug!(?command, "dispatching");
        match command {
            SessionCommand::List {
                search,
                course,
                json,
            } => self.handle_list(search, course, json)?,
            SessionCommand::Search { query } => self.handle_search(&query.join(" "))?,
            SessionCommand::Show { id, json } => self.handle_show(&id, json)?,
            SessionCommand::Add(args) => self.handle_add(args.into())?,
            SessionCommand::Edit { id, fields } => self.handle_edit(&id, fields.into())?,
            SessionCommand::Delete { id } => self.handle_delete(&id)?,
            SessionCommand::Courses => self.handle_courses()?,
            SessionCommand::Stats { json } => self.handle_stats(json)?,
            SessionCommand::Whoami => println!("{}", self.ctx.user.name),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_list(
        &self,
        search: Option<String>,
        course: Option<String>,
        json: bool,
    ) -> Result<()> {
        let filter = StudentFilter {
            query: search,
            course: CourseFilter::from_option(course),
        };
        let result = self.ctx.api.list_students(&filter)?;
        if json {
            return print_json(&result.students);
        }
        print_students(&result.students);
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_search(&mut self, query: &str) -> Result<()> {
        // One search at a time here, so the ticket is always the newest.
        let ticket = self.searches.begin();
        let result = self.ctx.api.search(query)?;
        if let Some(students) = self.searches.accept(ticket, result.students) {
            print_students(&students);
            print_messages(&result.messages);
        }
        Ok(())
    }

    fn handle_show(&self, id: &str, json: bool) -> Result<()> {
        let result = self.ctx.api.get_student(id)?;
        match result.students.first() {
            Some(student) if json => print_json(student)?,
            Some(student) => print_student(student),
            None => print_messages(&result.messages),
        }
        Ok(())
    }

    fn handle_add(&mut self, student: NewStudent) -> Result<()> {
        validate_student(&student).into_result()?;

        let today = Local::now().date_naive();
        let student = student.with_form_defaults(&self.ctx.config.default_status, today);
        let result = self.ctx.api.create_student(student)?;
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_edit(&mut self, id: &str, patch: StudentPatch) -> Result<()> {
        let current = self.ctx.api.get_student(id)?;
        // Validate against the stored record; an unknown id falls through to
        // the update, which reports it.
        if let Some(record) = current.students.first() {
            validate_update(record, &patch).into_result()?;
        }

        let result = self.ctx.api.update_student(id, patch)?;
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_delete(&mut self, id: &str) -> Result<()> {
        let result = self.ctx.api.delete_student(id)?;
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_courses(&self) -> Result<()> {
        let result = self.ctx.api.list_courses()?;
        print_courses(&result.courses);
        Ok(())
    }

    fn handle_stats(&self, json: bool) -> Result<()> {
        let result = self.ctx.api.stats()?;
        if let Some(stats) = &result.stats {
            if json {
                return print_json(stats);
            }
            print_stats(stats);
        }
        Ok(())
    }
}

fn report_error(error: &RosterError) {
    match error {
        RosterError::Validation(report) => print_validation(report),
        other => eprintln!("{} {}", "Error:".red(), other),
    }
}
