use dash::error::{report_shell_error, ShellError};
use dash::flags::Flags;
use dash::shell::Shell;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_shell_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("dash {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if flags.is_set("debug") {
        let _ = TermLogger::init(
            LevelFilter::Debug,
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    }

    let mut shell = Shell::new(&flags)?;
    shell.run()
}
