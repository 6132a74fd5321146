use super::{Address, Frame, InputBuffer, Program, Val};
use crate::error;
use crate::lang::ast::{Expression, PrintItem, Seed, Statement, Variable};
use crate::lang::{number_to_string, Error, Ident};
use chrono::Timelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

/// Where execution goes after a statement. `None` halts.
type Next = Option<Address>;

impl Statement {
    /// Runs one statement. Errors leave with the line number and the
    /// text of the statement attached.
    pub fn execute(
        &self,
        address: Address,
        program: &mut Program,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Next> {
        self.doit(address, program, input, out)
            .map_err(|e| e.in_line_number(address.line).in_statement(self.to_string()))
    }

    fn doit(
        &self,
        address: Address,
        program: &mut Program,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Next> {
        use Statement::*;
        match self {
            Data(_) | Rem(_) => {}
            Dim(vars) => {
                for var in vars {
                    program.dimension(var)?;
                }
            }
            End => return Ok(None),
            For(ident, from, to, step) => return r#for(address, program, ident, from, to, step),
            Gosub(line) => {
                let target = program.jump(*line, "GOSUB")?;
                program.stack.push(Frame::Gosub(address))?;
                return Ok(Some(target));
            }
            Goto(line) => return Ok(Some(program.jump(*line, "GOTO")?)),
            If(expr, target) => {
                if expr.value(program)? != 1.0 {
                    return Ok(program.next_line(address.line));
                }
                if let Some(line) = target {
                    return Ok(Some(program.jump(*line, "GOTO")?));
                }
            }
            Input(prompt, vars) => {
                input_statement(program, prompt.as_deref(), vars, input, out)?
            }
            Let(var, expr) => {
                let val = expr.val(program)?;
                program.store(var, val)?;
            }
            Next(ident) => return r#next(address, program, ident.as_ref()),
            OnGoto(expr, lines) | OnGosub(expr, lines) => {
                let selector = expr.value(program)?.trunc();
                if selector.is_nan() || selector < 0.0 || selector >= lines.len() as f64 {
                    return Ok(program.next_address(address));
                }
                let line = lines[selector as usize];
                if let OnGosub(..) = self {
                    let target = program.jump(line, "ON GOSUB")?;
                    program.stack.push(Frame::Gosub(address))?;
                    return Ok(Some(target));
                }
                return Ok(Some(program.jump(line, "ON GOTO")?));
            }
            Print(items) => r#print(program, items, out)?,
            Randomize(seed) => r#randomize(program, seed)?,
            Read(vars) => {
                for var in vars {
                    let val = Val::from(program.read_data()?);
                    if val.is_string() != var.is_string() {
                        return Err(error!(TypeMismatch;
                            format!("DATA item does not match the type of {}.", var)));
                    }
                    program.store(var, val)?;
                }
            }
            Restore => program.data_pointer = 0,
            Return => loop {
                match program.stack.pop() {
                    Some(Frame::Gosub(from)) => return Ok(program.next_address(from)),
                    Some(_) => continue,
                    None => return Err(error!(ReturnWithoutGosub; "RETURN without GOSUB")),
                }
            },
            Stop => {
                match address.line {
                    Some(line) => program.print(out, &format!("STOP at line {}\n", line))?,
                    None => program.print(out, "STOP\n")?,
                }
                program.stack.push(Frame::Stop(address))?;
                return Ok(None);
            }
            Troff => program.trace.off(),
            Tron(file) => match file {
                Some(path) => program.trace.on_with_file(path)?,
                None => program.trace.on(),
            },
        }
        Ok(program.next_address(address))
    }
}

fn r#for(
    address: Address,
    program: &mut Program,
    ident: &Ident,
    from: &Expression,
    to: &Expression,
    step: &Option<Expression>,
) -> Result<Next> {
    let start = from.value(program)?;
    program.var.store(ident, Val::Number(start))?;
    program.stack.push(Frame::For {
        ident: ident.clone(),
        address,
        from: from.clone(),
        to: to.clone(),
        step: step.clone(),
    })?;
    Ok(program.next_address(address))
}

/// The limits of a FOR are evaluated again at every NEXT.
fn r#next(address: Address, program: &mut Program, ident: Option<&Ident>) -> Result<Next> {
    loop {
        let frame = match program.stack.pop() {
            Some(frame) => frame,
            None => return Err(error!(NextWithoutFor; "NEXT without FOR")),
        };
        let (for_ident, for_address, from, to, step) = match &frame {
            Frame::For {
                ident,
                address,
                from,
                to,
                step,
            } => (ident, *address, from, to, step),
            _ => return Err(error!(NextWithoutFor; "NEXT without FOR")),
        };
        if let Some(ident) = ident {
            if ident != for_ident {
                continue;
            }
        }
        let step = match step {
            Some(expr) => expr.value(program)?,
            None => 1.0,
        };
        if step == 0.0 {
            return Err(error!(IllegalFunctionCall; "step value of 0 in FOR loop."));
        }
        let current = match program.var.fetch(for_ident)? {
            Val::Number(n) => n + step,
            Val::String(_) => return Err(error!(TypeMismatch)),
        };
        program.var.store(for_ident, Val::Number(current))?;
        let end = to.value(program)?;
        let start = from.value(program)?;
        let done = if start >= end {
            current < end || current > start
        } else {
            current > end || current < start
        };
        if done {
            return Ok(program.next_address(address));
        }
        program.stack.push(frame)?;
        return Ok(program.next_address(for_address));
    }
}

fn r#print(program: &mut Program, items: &[PrintItem], out: &mut dyn Write) -> Result<()> {
    let mut newline = true;
    for item in items {
        newline = false;
        let s = match item {
            PrintItem::Semicolon => continue,
            PrintItem::Comma => "\t".to_string(),
            PrintItem::Expression(expr) => {
                newline = true;
                if expr.is_boolean() {
                    let s = if expr.value(program)? == 1.0 {
                        "TRUE"
                    } else {
                        "FALSE"
                    };
                    s.to_string()
                } else if expr.is_string() {
                    expr.string_value(program)?
                } else {
                    let n = expr.value(program)?;
                    if n < 0.0 {
                        format!("{} ", number_to_string(n))
                    } else {
                        format!(" {} ", number_to_string(n))
                    }
                }
            }
        };
        program.print(out, &s)?;
    }
    if newline {
        program.print(out, "\n")?;
    }
    out.flush()?;
    Ok(())
}

fn input_statement(
    program: &mut Program,
    prompt: Option<&str>,
    vars: &[Variable],
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let prompt = prompt.unwrap_or("?");
    let mut buffer = read_input(program, prompt, input, out)?;
    for (i, var) in vars.iter().enumerate() {
        if buffer.is_empty() {
            buffer = read_input(program, &format!("(more){}", prompt), input, out)?;
        } else if i > 0 {
            buffer.separator()?;
        }
        let val = buffer.value(var.is_string())?;
        program.store(var, val)?;
    }
    Ok(())
}

fn read_input(
    program: &mut Program,
    prompt: &str,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<InputBuffer> {
    program.print(out, &format!("{} ", prompt))?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(error!(OutOfData; "Out of data for INPUT."));
    }
    // The typed line ends with the user's newline.
    program.column = 0;
    Ok(InputBuffer::new(&line))
}

fn r#randomize(program: &mut Program, seed: &Seed) -> Result<()> {
    program.rng = match seed {
        Seed::Clock => StdRng::from_entropy(),
        Seed::Timer => {
            let seconds = chrono::Local::now().num_seconds_from_midnight();
            StdRng::seed_from_u64(seconds as u64)
        }
        Seed::Value(expr) => StdRng::seed_from_u64(expr.value(program)? as i64 as u64),
    };
    Ok(())
}

