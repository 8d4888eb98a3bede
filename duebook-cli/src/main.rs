use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use duebook_lib::{Logic, Storage};
use sysexits::ExitCode;
use tracing::Level;

mod render;

#[derive(Parser, Debug)]
#[command(name = "duebook")]
#[command(author, version, about)]
struct Cli {
    /// Override the assignment data file
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let storage = match cli.data_file {
        Some(path) => Storage::file(path),
        None => Storage::default_file(),
    };

    let mut logic = match Logic::new(storage) {
        Ok(logic) => logic,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::DataErr;
        }
    };

    run(&mut logic)
}

fn run(logic: &mut Logic) -> ExitCode {
    println!(
        "{}",
        "Welcome to duebook. Type `help` to see the available commands.".bold()
    );
    render::view(logic.model());

    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::IoErr;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::Ok, // EOF
            Ok(_) => {}
            Err(_) => return ExitCode::IoErr,
        }

        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback().green());

                if result.show_help() {
                    render::help();
                }
                if result.exit() {
                    return ExitCode::Ok;
                }

                render::view(logic.model());
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}
