use super::{Address, Frame, Program};
use crate::error;
use crate::lang::{Error, Line, Statement};
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, Error>;

impl Program {
    /// Runs from the first line with a fresh stack, DATA queue and variables.
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        self.stack.clear();
        self.var.clear();
        self.collect_data();
        self.interrupted.store(false, Ordering::SeqCst);
        let start = self.listing.first().map(|n| Address::new(Some(n), 0));
        tracing::debug!(start = ?start.and_then(|a| a.line), "run");
        self.execute(start, input, out)
    }

    /// Continues after STOP or an interruption.
    pub fn cont(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        let start = match self.stack.pop() {
            Some(Frame::Stop(address)) => self.next_address(address),
            Some(Frame::Pending(address)) => Some(address),
            Some(frame) => {
                self.stack.push(frame)?;
                return Err(not_stopped());
            }
            None => return Err(not_stopped()),
        };
        tracing::debug!(start = ?start.and_then(|a| a.line), "continue");
        self.execute(start, input, out)
    }

    /// Continues after STOP only.
    pub fn resume(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        let start = match self.stack.pop() {
            Some(Frame::Stop(address)) => self.next_address(address),
            Some(frame) => {
                self.stack.push(frame)?;
                return Err(not_stopped());
            }
            None => return Err(not_stopped()),
        };
        tracing::debug!(start = ?start.and_then(|a| a.line), "resume");
        self.execute(start, input, out)
    }

    /// Runs a line typed without a line number against the current state.
    pub fn execute_direct(
        &mut self,
        line: Line,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        if !line.is_direct() {
            return Err(error!(InternalError; "Numbered line executed directly."));
        }
        if line.is_empty() {
            return Ok(());
        }
        self.direct = Rc::new(line);
        self.interrupted.store(false, Ordering::SeqCst);
        self.execute(Some(Address::new(None, 0)), input, out)
    }

    fn execute(
        &mut self,
        mut pc: Option<Address>,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        while let Some(address) = pc {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.stack.push(Frame::Pending(address))?;
                match address.line {
                    Some(number) => writeln!(out, "Stopped at {}", number)?,
                    None => writeln!(out, "Stopped")?,
                }
                self.column = 0;
                tracing::debug!(line = ?address.line, "interrupted");
                return Ok(());
            }
            let line = match self.line_at(address.line) {
                Some(line) => line,
                None => {
                    return Err(error!(UndefinedLine;
                        "Line was deleted while the program was stopped."))
                }
            };
            let statement = match line.statements().get(address.index) {
                Some(statement) => statement,
                None => {
                    pc = self.next_line(address.line);
                    continue;
                }
            };
            if let Statement::Data(_) = statement {
                pc = self.next_address(address);
                continue;
            }
            tracing::trace!(line = ?address.line, index = address.index, "execute");
            if self.trace.is_on() {
                self.trace_statement(address, statement, out)?;
            }
            pc = statement.execute(address, self, input, out)?;
        }
        tracing::debug!("halt");
        Ok(())
    }
}

fn not_stopped() -> Error {
    error!(CantContinue; "This program was not previously stopped.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (String, Result<()>) {
        let mut program = Program::load(&mut source.as_bytes()).unwrap();
        let mut out: Vec<u8> = vec![];
        let result = program.run(&mut "".as_bytes(), &mut out);
        (String::from_utf8_lossy(&out).to_string(), result)
    }

    #[test]
    fn test_empty_program() {
        let (out, result) = run("");
        assert!(result.is_ok());
        assert_eq!(out, "");
    }

    #[test]
    fn test_data_is_skipped() {
        let (out, result) = run("10 DATA 5\n20 READ X : PRINT X");
        assert!(result.is_ok());
        assert_eq!(out, " 5 \n");
    }

    #[test]
    fn test_interrupt() {
        let mut program = Program::load(&mut "10 PRINT 1\n20 PRINT 2".as_bytes()).unwrap();
        let mut out: Vec<u8> = vec![];
        program.collect_data();
        program.interrupt_handle().store(true, Ordering::SeqCst);
        program
            .execute(Some(Address::new(Some(10), 0)), &mut "".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&out), "Stopped at 10\n");
        out.clear();
        program.cont(&mut "".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8_lossy(&out), " 1 \n 2 \n");
    }

    #[test]
    fn test_cont_without_stop() {
        let mut program = Program::new();
        let e = program.cont(&mut "".as_bytes(), &mut vec![]).unwrap_err();
        assert_eq!(
            e.to_string(),
            "CAN'T CONTINUE; This program was not previously stopped."
        );
    }
}
