//! Interactive menu loop.
//!
//! The shell is generic over its input and output so the whole session can be
//! driven from memory in tests; `main` wires it to stdin/stdout.

use crate::input::{parse_choice, parse_duration, parse_met};
use fitlog_core::{create_exercise, Result, UserProfile};
use std::io::{BufRead, Write};

/// Console session over one user profile
pub struct Shell<R, W> {
    input: R,
    output: W,
    default_met: f64,
}

/// Main menu entries
enum MenuChoice {
    AddExercise,
    ViewHistory,
    Exit,
    Invalid,
}

impl MenuChoice {
    fn from_choice(choice: Option<i64>) -> Self {
        match choice {
            Some(1) => MenuChoice::AddExercise,
            Some(2) => MenuChoice::ViewHistory,
            Some(3) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, default_met: f64) -> Self {
        Self {
            input,
            output,
            default_met,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self, profile: &mut UserProfile) -> Result<()> {
        writeln!(self.output, "Welcome to the Fitness Tracking Application!")?;

        loop {
            self.display_main_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed, leaving menu loop");
                break;
            };

            match MenuChoice::from_choice(self.read_choice(&line)?) {
                MenuChoice::AddExercise => self.add_exercise(profile)?,
                MenuChoice::ViewHistory => {
                    write!(self.output, "{}", profile.display_exercise_history())?;
                }
                MenuChoice::Exit => {
                    writeln!(
                        self.output,
                        "Exiting application. Thank you for using Fitness Tracking App!"
                    )?;
                    break;
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please select a valid option.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn display_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMain Menu:")?;
        writeln!(self.output, "1. Add Exercise")?;
        writeln!(self.output, "2. View Exercise History")?;
        writeln!(self.output, "3. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    /// Collect one exercise and log it on success
    ///
    /// Every abort path leaves the profile untouched.
    fn add_exercise(&mut self, profile: &mut UserProfile) -> Result<()> {
        writeln!(self.output, "\nSelect Exercise Type:")?;
        writeln!(self.output, "1. Cardio Exercise")?;
        writeln!(self.output, "2. Strength Exercise")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let type_selector = self.read_choice(&line)?.unwrap_or(-1);

        let Some(name) = self.prompt("Enter exercise name: ")? else {
            return Ok(());
        };

        let Some(line) = self.prompt("Enter duration (in minutes): ")? else {
            return Ok(());
        };
        let Some(duration) = parse_duration(&line) else {
            writeln!(self.output, "Invalid duration. Please enter a positive number.")?;
            return Ok(());
        };

        let Some(mut exercise) =
            create_exercise(type_selector, name, duration, chrono::Utc::now())
        else {
            writeln!(
                self.output,
                "Invalid exercise type selected. Exercise not added."
            )?;
            return Ok(());
        };

        let prompt = format!(
            "Enter MET value (optional, default is {:.1}): ",
            self.default_met
        );
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(());
        };
        let met = parse_met(&line, self.default_met);

        exercise.calculate_calories_burned(profile.weight(), met);
        profile.add_exercise(exercise);

        writeln!(self.output, "Exercise added successfully!")?;
        Ok(())
    }

    /// Parse a numeric choice, reporting non-numeric input
    fn read_choice(&mut self, line: &str) -> Result<Option<i64>> {
        let choice = parse_choice(line);
        if choice.is_none() {
            writeln!(self.output, "Invalid input. Please enter a number.")?;
        }
        Ok(choice)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
