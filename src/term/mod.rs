/*!
## Terminal Module

The command shell and the interactive front end around it.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

mod shell;

pub use shell::{Flow, Shell};

use crate::mach::Listing;
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Startup options, filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: Option<String>,
    pub run: bool,
    pub plain: bool,
    pub seed: u64,
    pub trace: bool,
}

/// Returns the process exit code.
pub fn main(config: Config) -> i32 {
    let mut shell = Shell::new(!config.plain && !config.run);
    shell.seed(config.seed);
    if let Some(path) = &config.file {
        if let Err(error) = shell.load(path) {
            eprintln!("{}", error);
            if let Some(statement) = error.statement() {
                eprintln!("{}", crate::lang::show_error(statement, &error.column()));
            }
            return 1;
        }
    }
    shell.program_mut().set_trace(config.trace);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if config.run {
        let result = shell
            .program_mut()
            .run(&mut stdin.lock(), &mut stdout.lock());
        return match result {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        };
    }
    let result = if config.plain {
        shell.session(&mut stdin.lock(), &mut stdout.lock())
    } else {
        interactive(&mut shell)
    };
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn interactive(shell: &mut Shell) -> io::Result<()> {
    let interrupted = shell.program().interrupt_handle();
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "no Ctrl-C handler");
    }
    let command = Interface::new("BASIC")?;
    command.set_prompt("")?;
    command.set_report_signal(Signal::Interrupt, true);
    writeln!(io::stdout(), "{}", Style::new().bold().paint("cocoa BASIC"))?;
    writeln!(io::stdout(), "Ready.")?;
    loop {
        command.set_completer(Arc::new(LineCompleter::new(shell.program().listing())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        interrupted.store(false, Ordering::SeqCst);
        let stdin = io::stdin();
        let stdout = io::stdout();
        let flow = shell.enter(&string, &mut stdin.lock(), &mut stdout.lock())?;
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
        if flow == Flow::Bye {
            break;
        }
    }
    Ok(())
}

/// Tab after a bare line number brings up that line for editing.
struct LineCompleter {
    lines: BTreeMap<u32, String>,
}

impl LineCompleter {
    fn new(listing: &Listing) -> LineCompleter {
        let lines = listing
            .lines()
            .filter_map(|line| line.number().map(|n| (n, line.to_string())))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().trim().parse::<u32>() {
            if let Some(line) = self.lines.get(&num) {
                let mut comp = Completion::simple(line.clone());
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}
