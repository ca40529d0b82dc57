use course_planner::adapters::outbound::console::StdoutPresenter;
use course_planner::adapters::outbound::filesystem::CourseFileReader;
use course_planner::adapters::outbound::formatters::PlainTextFormatter;
use course_planner::application::use_cases::BrowseCatalogUseCase;
use course_planner::cli::{Args, MenuChoice};
use course_planner::config::PlannerSettings;
use course_planner::ports::outbound::{CatalogFormatter, CourseSource, OutputPresenter};
use course_planner::shared::error::ExitCode;
use course_planner::shared::Result;

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = PlannerSettings::resolve(&args)?;

    let source = CourseFileReader::new(settings.delimiter.clone());
    let formatter = PlainTextFormatter::new();
    let presenter = StdoutPresenter::new();
    let mut session = BrowseCatalogUseCase::new(source, formatter, presenter);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(&mut session, &mut input, &settings.courses_path)
}

/// Drives the interactive 4-option menu until Exit or end of input.
///
/// Loader failures are reported and the loop continues; only output
/// failures end the session with an error.
fn run_menu<S, F, P>(
    session: &mut BrowseCatalogUseCase<S, F, P>,
    input: &mut impl BufRead,
    courses_path: &Path,
) -> Result<()>
where
    S: CourseSource,
    F: CatalogFormatter,
    P: OutputPresenter,
{
    println!("{}", "Welcome to the course planner.".bold());
    println!();

    loop {
        print_menu();
        print!("What would you like to do? ");
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        println!();

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Load) => {
                if let Err(e) = session.load(courses_path) {
                    println!("Could not access courses file. Please check if loaded properly.\n");
                    eprintln!("⚠️  {}", e);
                }
            }
            Ok(MenuChoice::PrintList) => session.print_listing()?,
            Ok(MenuChoice::PrintCourse) => {
                print!("What course do you want to know about? ");
                io::stdout().flush()?;

                let Some(query) = read_line(input)? else {
                    break;
                };
                println!();

                session.print_course(query.trim())?;
            }
            Ok(MenuChoice::Exit) => break,
            Err(message) => println!("{}\n", message),
        }
    }

    println!("Thank you for using the course planner!");
    Ok(())
}

fn print_menu() {
    println!("\t 1. Load Data Structure.");
    println!("\t 2. Print Course List.");
    println!("\t 3. Print Course.");
    println!("\t 4. Exit");
    println!();
}

/// Reads one line from the menu input; `None` means end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
