use super::{Address, Program, Val};
use crate::lang::ast::{AcceptVisitor, Variable, Visitor};
use crate::lang::{Error, Ident, Statement};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// TRON/TROFF state. Output goes to the trace file when one was
/// opened, otherwise to the program output.
#[derive(Debug, Default)]
pub struct Trace {
    on: bool,
    file: Option<File>,
}

impl Trace {
    pub fn on(&mut self) {
        self.on = true;
    }

    /// The first file opened stays in use until the program is cleared.
    pub fn on_with_file(&mut self, path: &str) -> Result<()> {
        if self.file.is_none() {
            self.file = Some(File::create(path)?);
        }
        self.on = true;
        Ok(())
    }

    pub fn off(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Default)]
struct VariableCollector {
    vars: BTreeMap<String, Variable>,
}

impl Visitor for VariableCollector {
    // A FOR control variable arrives as a bare ident.
    fn visit_ident(&mut self, ident: &Ident) {
        self.vars
            .entry(ident.to_string())
            .or_insert_with(|| Variable::Unary(ident.clone()));
    }

    fn visit_variable(&mut self, var: &Variable) {
        if let Variable::Array(ident, _) = var {
            self.vars.remove(&ident.to_string());
        }
        self.vars.insert(var.to_string(), var.clone());
    }
}

impl Program {
    /// Writes the statement about to execute and the variables it uses.
    pub(super) fn trace_statement(
        &mut self,
        address: Address,
        statement: &Statement,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut collector = VariableCollector::default();
        statement.accept(&mut collector);
        let number = match address.line {
            Some(number) => number.to_string(),
            None => String::new(),
        };
        let mut lines = vec![format!("**:{:>5}:{}", number, statement)];
        for (name, var) in collector.vars {
            let value = match self.fetch(&var) {
                Ok(val @ Val::String(_)) => val.quoted(),
                Ok(val) => val.to_string(),
                Err(_) => "Not yet defined.".to_string(),
            };
            lines.push(format!("        :{} = {}", name, value));
        }
        match &mut self.trace.file {
            Some(file) => write_lines(file, &lines),
            None => write_lines(out, &lines),
        }
    }
}

fn write_lines(sink: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(sink, "{}", line)?;
    }
    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Line;

    fn names(source: &str) -> Vec<String> {
        let line = Line::parse(source).unwrap();
        let mut collector = VariableCollector::default();
        for statement in line.statements() {
            statement.accept(&mut collector);
        }
        collector.vars.keys().cloned().collect()
    }

    #[test]
    fn test_collects_control_variable() {
        assert_eq!(names("FOR I = 1 TO N STEP S"), vec!["I", "N", "S"]);
        assert_eq!(names("NEXT J"), vec!["J"]);
    }

    #[test]
    fn test_array_elements_replace_their_name() {
        assert_eq!(names("A(I) = A(2) + X"), vec!["A(2)", "A(I)", "I", "X"]);
    }
}
