use super::val::{string_too_long, MAX_STRING_LEN};
use super::{Operation, Program};
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::{number_to_string, Error, Function};
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

const FREE_MEMORY: f64 = 8192.0;

fn number(args: &[Expression], index: usize, program: &mut Program) -> Result<f64> {
    match args.get(index) {
        Some(expr) => expr.value(program),
        None => Err(error!(IllegalFunctionCall; "Missing function argument.")),
    }
}

fn string(args: &[Expression], index: usize, program: &mut Program) -> Result<String> {
    match args.get(index) {
        Some(expr) => expr.string_value(program),
        None => Err(error!(IllegalFunctionCall; "Missing function argument.")),
    }
}

fn spaces(n: usize) -> Result<String> {
    if n > MAX_STRING_LEN {
        return Err(string_too_long());
    }
    Ok(" ".repeat(n))
}

/// Character count from a BASIC number, never negative.
fn count(n: f64) -> usize {
    if n <= 0.0 {
        0
    } else {
        n as usize
    }
}

impl Function {
    pub fn value(self, args: &[Expression], program: &mut Program) -> Result<f64> {
        use Function::*;
        Operation::checked(match self {
            Abs => number(args, 0, program)?.abs(),
            Atn => number(args, 0, program)?.atan(),
            Cos => number(args, 0, program)?.cos(),
            Fre => FREE_MEMORY,
            Int => number(args, 0, program)?.floor(),
            Len => string(args, 0, program)?.chars().count() as f64,
            Log => {
                let n = number(args, 0, program)?;
                if n <= 0.0 {
                    return Err(error!(IllegalFunctionCall;
                        "LOG of a number less than or equal to zero."));
                }
                n.ln()
            }
            Max => {
                let a = number(args, 0, program)?;
                a.max(number(args, 1, program)?)
            }
            Min => {
                let a = number(args, 0, program)?;
                a.min(number(args, 1, program)?)
            }
            Rnd => {
                let range = if args.is_empty() {
                    1.0
                } else {
                    number(args, 0, program)?
                };
                program.rng.gen::<f64>() * range
            }
            Sgn => {
                let n = number(args, 0, program)?;
                if n > 0.0 {
                    1.0
                } else if n < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Sin => number(args, 0, program)?.sin(),
            Sqr => {
                let n = number(args, 0, program)?;
                if n < 0.0 {
                    return Err(error!(IllegalFunctionCall; "SQR of a negative number."));
                }
                n.sqrt()
            }
            Tan => number(args, 0, program)?.tan(),
            Val => {
                let s = string(args, 0, program)?;
                match s.trim().parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    _ => {
                        return Err(error!(IllegalFunctionCall;
                            "Invalid string for VAL function."))
                    }
                }
            }
            Chr | Left | Mid | Right | Spc | Str | Tab => {
                return Err(error!(TypeMismatch;
                    format!("{} returns a string.", self)))
            }
        })
    }

    pub fn string_value(self, args: &[Expression], program: &mut Program) -> Result<String> {
        use Function::*;
        Ok(match self {
            Chr => {
                let n = number(args, 0, program)?;
                match std::char::from_u32(n as u32) {
                    Some(c) if n >= 0.0 => c.to_string(),
                    _ => return Err(error!(IllegalFunctionCall; "Invalid character code.")),
                }
            }
            Left => {
                let s = string(args, 0, program)?;
                let n = count(number(args, 1, program)?);
                s.chars().take(n).collect()
            }
            Right => {
                let s = string(args, 0, program)?;
                let n = count(number(args, 1, program)?);
                let len = s.chars().count();
                s.chars().skip(len.saturating_sub(n)).collect()
            }
            Mid => {
                let s = string(args, 0, program)?;
                let start = count(number(args, 1, program)?).max(1);
                let len = if args.len() > 2 {
                    count(number(args, 2, program)?)
                } else {
                    1
                };
                s.chars().skip(start - 1).take(len).collect()
            }
            Spc => spaces(count(number(args, 0, program)?))?,
            Str => number_to_string(number(args, 0, program)?),
            Tab => {
                let to = count(number(args, 0, program)?);
                spaces(to.saturating_sub(program.column))?
            }
            _ => return Err(error!(TypeMismatch; format!("{} returns a number.", self))),
        })
    }
}
