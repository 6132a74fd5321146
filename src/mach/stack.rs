use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Deepest the FOR/GOSUB stack may grow.
pub const MAX_DEPTH: usize = 65535;

/// ## Size limited LIFO for loop and subroutine frames

pub struct Stack<T> {
    overflow_message: &'static str,
    frames: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.frames.iter().rev()).finish()
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            frames: vec![],
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&T> {
        self.frames.last()
    }

    pub fn push(&mut self, frame: T) -> Result<()> {
        if self.frames.len() >= MAX_DEPTH {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.frames.pop()
    }
}
