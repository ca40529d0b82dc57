use clap::Parser;
use std::str::FromStr;

/// One entry of the interactive 4-option menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Load the courses file into the catalog
    Load,
    /// Print every course in canonical order
    PrintList,
    /// Look up and print a single course
    PrintCourse,
    /// End the session
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Load),
            "2" => Ok(MenuChoice::PrintList),
            "3" => Ok(MenuChoice::PrintCourse),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("{} is not a valid option.", other)),
        }
    }
}

/// Browse a course catalog: load, list, and look up courses
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(version)]
#[command(about = "Browse a course catalog: load, list, and look up courses", long_about = None)]
pub struct Args {
    /// Path to the courses file (defaults to courses.txt)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Field delimiter used in the courses file (defaults to ",")
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Path to a config file (defaults to course-planner.config.yml discovery)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
