mod command;
mod error;
mod session;

use command::parse_command;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}};

/// Sets up logging at the level named by the `SYM_LOG` environment variable, `warn` by default.
fn init_logger() {
    let level = std::env::var("SYM_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if let Err(err) = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("could not initialize logging: {}", err);
    }
}

/// Parses and executes a single line, printing the result or the error.
fn read_eval(line: &str, session: &mut Session) {
    match parse_command(line).and_then(|command| session.execute(command)) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (), // intentionally print nothing
        Err(err) => {
            if err.report_to_stderr("input", line).is_err() {
                eprintln!("error: {}", err);
            }
        },
    }
}

/// Executes every non-empty line of the input in one session.
fn execute(input: &str) {
    let mut session = Session::new();
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(|line| read_eval(line, &mut session));
}

fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;

    read_eval(&input, session);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        execute(&fs::read_to_string(filename)?);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        execute(&input);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new()?;
        let mut session = Session::new();

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}
