use crate::error;
use crate::lang::{Error, Line};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::RangeInclusive;
use std::rc::Rc;

/// ## Program source, ordered by line number

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<u32, Rc<Line>>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Replaces any line with the same number. Direct lines are ignored.
    pub fn insert(&mut self, line: Line) -> Option<Rc<Line>> {
        let number = line.number()?;
        self.source.insert(number, Rc::new(line))
    }

    pub fn get(&self, number: u32) -> Option<Rc<Line>> {
        self.source.get(&number).cloned()
    }

    pub fn remove(&mut self, number: u32) -> Option<Rc<Line>> {
        self.source.remove(&number)
    }

    pub fn remove_range(&mut self, range: RangeInclusive<u32>) -> bool {
        let to_remove = self
            .source
            .range(range)
            .map(|(k, _)| *k)
            .collect::<Vec<u32>>();
        if to_remove.is_empty() {
            return false;
        }
        for number in to_remove {
            self.source.remove(&number);
        }
        true
    }

    pub fn first(&self) -> Option<u32> {
        self.source.keys().next().copied()
    }

    /// The next line number after `number`, whether or not `number` exists.
    pub fn successor(&self, number: u32) -> Option<u32> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Rc<Line>> {
        self.source.values()
    }

    pub fn range(&self, range: RangeInclusive<u32>) -> impl Iterator<Item = &Rc<Line>> {
        self.source.range(range).map(|(_, line)| line)
    }

    /// Used for loading a new Listing from a file.
    /// Blank lines are skipped and every other line must be numbered.
    pub fn load_str(&mut self, s: &str) -> Result<(), Error> {
        if s.trim().is_empty() {
            return Ok(());
        }
        let line = Line::parse(s).map_err(|e| e.in_statement(s.to_string()))?;
        if line.is_direct() {
            return Err(error!(SyntaxError; "Line failed to start with a line number.")
                .in_statement(s.to_string()));
        }
        if line.is_empty() {
            if let Some(number) = line.number() {
                self.remove(number);
            }
        } else {
            self.insert(line);
        }
        Ok(())
    }
}
