use super::{Listing, Stack, Trace, Var};
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::{Error, Ident, Line, LineNumber, Literal, Statement};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Where a statement lives: a line and an index into its statements.
/// A `None` line is the direct line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub line: LineNumber,
    pub index: usize,
}

impl Address {
    pub fn new(line: LineNumber, index: usize) -> Address {
        Address { line, index }
    }
}

/// One entry of the call/loop stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// The limits stay unevaluated so NEXT sees their current values.
    For {
        ident: Ident,
        address: Address,
        from: Expression,
        to: Expression,
        step: Option<Expression>,
    },
    Gosub(Address),
    Stop(Address),
    Pending(Address),
}

/// ## Program state
///
/// Everything a running BASIC program can touch. Statements and
/// expressions receive it by reference.

pub struct Program {
    pub(super) listing: Listing,
    pub(super) direct: Rc<Line>,
    pub(super) var: Var,
    pub(super) stack: Stack<Frame>,
    pub(super) data: Vec<Literal>,
    pub(super) data_pointer: usize,
    pub(super) rng: StdRng,
    pub(super) trace: Trace,
    pub(super) column: usize,
    pub(super) interrupted: Arc<AtomicBool>,
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            listing: Listing::default(),
            direct: Rc::new(Line::new(None, vec![])),
            var: Var::new(),
            stack: Stack::new("Stack overflow"),
            data: vec![],
            data_pointer: 0,
            rng: StdRng::seed_from_u64(0),
            trace: Trace::default(),
            column: 0,
            interrupted: Arc::default(),
        }
    }

    /// Forgets the program and its state. The interrupt flag is kept.
    pub fn clear(&mut self) {
        tracing::debug!("new program");
        let interrupted = self.interrupted.clone();
        *self = Program::new();
        self.interrupted = interrupted;
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn set_interrupt_handle(&mut self, interrupted: Arc<AtomicBool>) {
        self.interrupted = interrupted;
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn set_trace(&mut self, on: bool) {
        if on {
            self.trace.on();
        } else {
            self.trace.off();
        }
    }

    /// Stores a numbered line. A number with no statements deletes the line.
    /// Returns false for direct lines, which are not stored.
    pub fn add(&mut self, line: Line) -> bool {
        match line.number() {
            None => false,
            Some(number) => {
                if line.is_empty() {
                    self.listing.remove(number);
                } else {
                    self.listing.insert(line);
                }
                true
            }
        }
    }

    pub fn del(&mut self, range: RangeInclusive<u32>) -> bool {
        self.listing.remove_range(range)
    }

    pub fn list(&self, range: RangeInclusive<u32>, out: &mut dyn Write) -> Result<()> {
        for line in self.listing.range(range) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn save(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(lines = self.listing.len(), "save program");
        self.list(0..=u32::max_value(), out)?;
        out.flush()?;
        Ok(())
    }

    /// Builds a new program from listing text, stopping at the first bad line.
    pub fn load(source: &mut dyn BufRead) -> Result<Program> {
        let mut program = Program::new();
        for line in source.lines() {
            program.listing.load_str(&line?)?;
        }
        tracing::debug!(lines = program.listing.len(), "load program");
        Ok(program)
    }

    pub fn dump(&self, out: &mut dyn Write) -> Result<()> {
        for line in self.var.describe() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub(super) fn line_at(&self, line: LineNumber) -> Option<Rc<Line>> {
        match line {
            None => Some(self.direct.clone()),
            Some(number) => self.listing.get(number),
        }
    }

    /// The statement after `address`, moving to the next line when
    /// this one is used up. The direct line has no next line.
    pub(super) fn next_address(&self, address: Address) -> Option<Address> {
        if let Some(line) = self.line_at(address.line) {
            if address.index + 1 < line.statements().len() {
                return Some(Address::new(address.line, address.index + 1));
            }
        }
        self.next_line(address.line)
    }

    pub(super) fn next_line(&self, line: LineNumber) -> Option<Address> {
        let number = self.listing.successor(line?)?;
        Some(Address::new(Some(number), 0))
    }

    pub(super) fn jump(&self, number: u32, kind: &str) -> Result<Address> {
        match self.listing.get(number) {
            Some(_) => Ok(Address::new(Some(number), 0)),
            None => Err(error!(UndefinedLine;
                format!("{} non-existent line {}.", kind, number))),
        }
    }

    /// Gathers every DATA item in line order, rewinding the read pointer.
    pub(super) fn collect_data(&mut self) {
        self.data.clear();
        self.data_pointer = 0;
        for line in self.listing.lines() {
            for statement in line.statements() {
                if let Statement::Data(items) = statement {
                    self.data.extend(items.iter().cloned());
                }
            }
        }
    }

    pub(super) fn read_data(&mut self) -> Result<Literal> {
        match self.data.get(self.data_pointer) {
            Some(literal) => {
                self.data_pointer += 1;
                Ok(literal.clone())
            }
            None => Err(error!(OutOfData; "READ statement is out of data.")),
        }
    }

    /// Writes program output, keeping track of the column for TAB$.
    pub(super) fn print(&mut self, out: &mut dyn Write, s: &str) -> Result<()> {
        write!(out, "{}", s)?;
        match s.rfind('\n') {
            Some(pos) => self.column = s[pos + 1..].chars().count(),
            None => self.column += s.chars().count(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(lines: &[&str]) -> Program {
        let source = lines.join("\n");
        Program::load(&mut source.as_bytes()).unwrap()
    }

    #[test]
    fn test_next_address() {
        let program = program(&["10 A = 1 : B = 2", "20 END"]);
        let a = Address::new(Some(10), 0);
        assert_eq!(program.next_address(a), Some(Address::new(Some(10), 1)));
        let b = Address::new(Some(10), 1);
        assert_eq!(program.next_address(b), Some(Address::new(Some(20), 0)));
        assert_eq!(program.next_address(Address::new(Some(20), 0)), None);
        assert_eq!(program.next_address(Address::new(None, 0)), None);
    }

    #[test]
    fn test_add_and_delete() {
        let mut program = Program::new();
        assert!(program.add(Line::parse("10 PRINT").unwrap()));
        assert!(!program.add(Line::parse("PRINT").unwrap()));
        assert!(program.add(Line::parse("10").unwrap()));
        assert!(program.listing().is_empty());
    }

    #[test]
    fn test_collect_data() {
        let mut program = program(&["30 DATA \"c\"", "10 DATA 1, -2", "20 END"]);
        program.collect_data();
        assert_eq!(program.read_data().unwrap(), Literal::Number(1.0));
        assert_eq!(program.read_data().unwrap(), Literal::Number(-2.0));
        assert_eq!(
            program.read_data().unwrap(),
            Literal::String("c".to_string())
        );
        assert!(program.read_data().is_err());
    }

    #[test]
    fn test_jump() {
        let program = program(&["10 END"]);
        assert!(program.jump(10, "GOTO").is_ok());
        let e = program.jump(20, "GOTO").unwrap_err();
        assert_eq!(e.to_string(), "UNDEFINED LINE; GOTO non-existent line 20.");
    }

    #[test]
    fn test_print_tracks_column() {
        let mut program = Program::new();
        let mut out: Vec<u8> = vec![];
        program.print(&mut out, "abc").unwrap();
        assert_eq!(program.column, 3);
        program.print(&mut out, "de\nf").unwrap();
        assert_eq!(program.column, 1);
    }
}
