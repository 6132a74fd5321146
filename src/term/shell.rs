use crate::error;
use crate::lang::{show_error, Command, Error, Lexer, Line, Literal, Token};
use crate::mach::Program;
use ansi_term::Style;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Whether the session goes on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Bye,
}

/// ## The command shell
///
/// Numbered lines are stored, lines without a number run at once and
/// commands act on the program as a whole. Works on any reader and
/// writer so sessions can be scripted.

pub struct Shell {
    program: Program,
    seed: u64,
    styled: bool,
}

impl Default for Shell {
    fn default() -> Shell {
        Shell::new(false)
    }
}

impl Shell {
    pub fn new(styled: bool) -> Shell {
        Shell {
            program: Program::new(),
            seed: 0,
            styled,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut Program {
        &mut self.program
    }

    /// Seed for the random number generator of this and every later program.
    pub fn seed(&mut self, seed: u64) {
        self.seed = seed;
        self.program.seed(seed);
    }

    /// Reads lines until end of input or BYE.
    pub fn session(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if self.enter(&line, input, out)? == Flow::Bye {
                return Ok(());
            }
        }
    }

    pub fn enter(
        &mut self,
        source: &str,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> io::Result<Flow> {
        let source = source.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut lexer = Lexer::new(source);
        if let Token::Command(command) = lexer.next_token() {
            if command == Command::Bye {
                return Ok(Flow::Bye);
            }
            if let Err(error) = self.command(command, &mut lexer, input, out) {
                tracing::warn!(%command, %error, "command failed");
                self.report(out, source, &error)?;
            }
            writeln!(out, "Ready.")?;
            out.flush()?;
            return Ok(Flow::Continue);
        }
        let line = match Line::parse(source) {
            Ok(line) => line,
            Err(error) => {
                self.report(out, source, &error)?;
                return Ok(Flow::Continue);
            }
        };
        if line.is_direct() {
            if let Err(error) = self.program.execute_direct(line, input, out) {
                self.report(out, source, &error)?;
            }
            out.flush()?;
        } else {
            self.program.add(line);
        }
        Ok(Flow::Continue)
    }

    /// Loads a program file, replacing the current program.
    pub fn load(&mut self, path: &str) -> Result<(), Error> {
        let file = File::open(path)?;
        let mut program = Program::load(&mut BufReader::new(file))?;
        program.set_interrupt_handle(self.program.interrupt_handle());
        program.seed(self.seed);
        self.program = program;
        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), Error> {
        let mut file = File::create(path)?;
        self.program.save(&mut file)
    }

    fn command(
        &mut self,
        command: Command,
        lexer: &mut Lexer,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        use Command::*;
        match command {
            Bye => Ok(()),
            Cat => {
                let mut names = vec![];
                for entry in std::fs::read_dir(".")? {
                    let name = entry?.file_name().to_string_lossy().to_string();
                    if name.to_lowercase().ends_with(".bas") {
                        names.push(name);
                    }
                }
                names.sort();
                for name in names {
                    writeln!(out, "{}", name)?;
                }
                Ok(())
            }
            Cont => self.program.cont(input, out),
            Del => {
                let range = line_range(lexer)?;
                match range {
                    Some((start, Some(end))) => self.program.del(start..=end),
                    Some((start, None)) => self.program.del(start..=start),
                    None => return Err(error!(SyntaxError; "Line number expected for DEL command.")),
                };
                Ok(())
            }
            Dump => match file_name(lexer)? {
                Some(path) => self.program.dump(&mut File::create(path)?),
                None => self.program.dump(out),
            },
            List => {
                let range = match line_range(lexer)? {
                    Some((start, Some(end))) => start..=end,
                    Some((start, None)) => start..=u32::max_value(),
                    None => 0..=u32::max_value(),
                };
                self.program.list(range, out)
            }
            Load => {
                let path = match file_name(lexer)? {
                    Some(path) => path,
                    None => {
                        return Err(error!(SyntaxError; "File name expected for LOAD command."))
                    }
                };
                match self.load(&path) {
                    Ok(()) => {
                        writeln!(out, "File loaded.")?;
                        Ok(())
                    }
                    Err(error) if error.code() == crate::lang::ErrorCode::FileNotFound => {
                        writeln!(out, "File {} not found.", path)?;
                        Ok(())
                    }
                    Err(error) => Err(error),
                }
            }
            New => {
                self.program.clear();
                self.program.seed(self.seed);
                Ok(())
            }
            Resume => self.program.resume(input, out),
            Run => self.program.run(input, out),
            Save => match file_name(lexer)? {
                Some(path) => self.save(&path),
                None => Err(error!(SyntaxError; "File name expected for SAVE command.")),
            },
        }
    }

    fn report(&self, out: &mut dyn Write, source: &str, error: &Error) -> io::Result<()> {
        let message = if self.styled {
            Style::new().bold().paint(error.to_string()).to_string()
        } else {
            error.to_string()
        };
        writeln!(out, "{}", message)?;
        if error.is_syntax() {
            let text = error.statement().unwrap_or(source);
            writeln!(out, "{}", show_error(text, &error.column()))?;
        } else if let Some(statement) = error.statement() {
            writeln!(out, "{}", statement)?;
        }
        Ok(())
    }
}

fn expect_end(lexer: &mut Lexer) -> Result<(), Error> {
    match lexer.next_token() {
        Token::EndOfLine => Ok(()),
        _ => Err(error!(SyntaxError, ..&lexer.column(); "Unexpected input after command.")),
    }
}

fn line_number(lexer: &mut Lexer) -> Result<u32, Error> {
    match lexer.next_token() {
        Token::Literal(Literal::Number(n))
            if n >= 0.0 && n.fract() == 0.0 && n <= u32::max_value() as f64 =>
        {
            Ok(n as u32)
        }
        _ => Err(error!(SyntaxError, ..&lexer.column(); "Illegal parameter to command.")),
    }
}

/// `[start[,end]]`
fn line_range(lexer: &mut Lexer) -> Result<Option<(u32, Option<u32>)>, Error> {
    if let Token::EndOfLine = lexer.next_token() {
        return Ok(None);
    }
    lexer.unget_token();
    let start = line_number(lexer)?;
    match lexer.next_token() {
        Token::EndOfLine => Ok(Some((start, None))),
        t if t.is_symbol(',') => {
            let end = line_number(lexer)?;
            expect_end(lexer)?;
            Ok(Some((start, Some(end))))
        }
        _ => Err(error!(SyntaxError, ..&lexer.column(); "Syntax error in command.")),
    }
}

fn file_name(lexer: &mut Lexer) -> Result<Option<String>, Error> {
    match lexer.next_token() {
        Token::EndOfLine => Ok(None),
        Token::Literal(Literal::String(s)) => {
            expect_end(lexer)?;
            Ok(Some(s))
        }
        _ => Err(error!(SyntaxError, ..&lexer.column(); "File name must be a string.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(shell: &mut Shell, lines: &str) -> String {
        let mut out: Vec<u8> = vec![];
        shell.session(&mut lines.as_bytes(), &mut out).unwrap();
        String::from_utf8_lossy(&out).to_string()
    }

    #[test]
    fn test_list_range() {
        let mut shell = Shell::default();
        let out = session(&mut shell, "30 END\n10 PRINT 1\n20 GOTO 10\nLIST 15, 30\n");
        assert_eq!(out, "20 GOTO 10\n30 END\nReady.\n");
    }

    #[test]
    fn test_bye_ends_session() {
        let mut shell = Shell::default();
        let out = session(&mut shell, "BYE\nPRINT 1\n");
        assert_eq!(out, "");
    }

    #[test]
    fn test_syntax_error_shows_caret() {
        let mut shell = Shell::default();
        let out = session(&mut shell, "10 PRINT 1 )\n");
        assert_eq!(
            out,
            "SYNTAX ERROR IN 10 (11..12); extra input beyond statement end\n\
             10 PRINT 1 )\n-----------^\n"
        );
    }
}
