use super::val::{string_too_long, MAX_STRING_LEN};
use super::{Operation, Program, Val};
use crate::error;
use crate::lang::ast::{Expression, Variable};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Numeric value. Boolean expressions give 1.0 or 0.0.
    pub fn value(&self, program: &mut Program) -> Result<f64> {
        use Expression::*;
        match self {
            Number(n) => Ok(*n),
            String(_) => Err(error!(TypeMismatch; "String used where a number is required.")),
            Variable(var) => match program.fetch(var)? {
                Val::Number(n) => Ok(n),
                Val::String(_) => Err(error!(TypeMismatch;
                    "String used where a number is required.")),
            },
            Function(func, args) => func.value(args, program),
            Unary(op, expr) => {
                let val = expr.value(program)?;
                Operation::unary(*op, val)
            }
            Binary(op, lhs, rhs) => {
                if op.is_relational() && lhs.is_string() {
                    let lhs = lhs.string_value(program)?;
                    let rhs = rhs.string_value(program)?;
                    return Operation::compare_strings(*op, &lhs, &rhs);
                }
                let lhs = lhs.value(program)?;
                let rhs = rhs.value(program)?;
                Operation::binary(*op, lhs, rhs)
            }
        }
    }

    pub fn string_value(&self, program: &mut Program) -> Result<String> {
        use Expression::*;
        match self {
            String(s) => Ok(s.clone()),
            Variable(var) => match program.fetch(var)? {
                Val::String(s) => Ok(s),
                Val::Number(_) => Err(error!(TypeMismatch;
                    "Number used where a string is required.")),
            },
            Function(func, args) => func.string_value(args, program),
            Binary(crate::lang::ast::BinaryOp::Concat, lhs, rhs) => {
                let mut s = lhs.string_value(program)?;
                let rhs = rhs.string_value(program)?;
                if s.chars().count() + rhs.chars().count() > MAX_STRING_LEN {
                    return Err(string_too_long());
                }
                s.push_str(&rhs);
                Ok(s)
            }
            _ => Err(error!(TypeMismatch; "Number used where a string is required.")),
        }
    }

    /// Evaluates to whichever kind of value the expression produces.
    pub fn val(&self, program: &mut Program) -> Result<Val> {
        if self.is_string() {
            Ok(Val::String(self.string_value(program)?))
        } else {
            Ok(Val::Number(self.value(program)?))
        }
    }
}

impl Program {
    fn indices(&mut self, exprs: &[Expression]) -> Result<Vec<f64>> {
        exprs.iter().map(|expr| expr.value(self)).collect()
    }

    pub(super) fn fetch(&mut self, var: &Variable) -> Result<Val> {
        match var {
            Variable::Unary(ident) => self.var.fetch(ident),
            Variable::Array(ident, exprs) => {
                let indices = self.indices(exprs)?;
                self.var.fetch_array(ident, &indices)
            }
        }
    }

    pub(super) fn store(&mut self, var: &Variable, val: Val) -> Result<()> {
        match var {
            Variable::Unary(ident) => self.var.store(ident, val),
            Variable::Array(ident, exprs) => {
                let indices = self.indices(exprs)?;
                self.var.store_array(ident, &indices, val)
            }
        }
    }

    pub(super) fn dimension(&mut self, var: &Variable) -> Result<()> {
        match var {
            Variable::Unary(ident) => Err(error!(SyntaxError;
                format!("Array dimensions required for {}.", ident))),
            Variable::Array(ident, exprs) => {
                let bounds = self.indices(exprs)?;
                self.var.dimension_array(ident, &bounds)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse_expression, Lexer};

    fn eval(s: &str) -> Result<Val> {
        let mut program = Program::new();
        let expr = parse_expression(&mut Lexer::new(s))?;
        expr.val(&mut program)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), Val::Number(14.0));
        assert_eq!(eval("2 ** 3 ** 2").unwrap(), Val::Number(512.0));
        assert_eq!(eval("1 < 2 .AND. 3 > 2").unwrap(), Val::Number(1.0));
        assert_eq!(eval("(2 + 3) * 4").unwrap(), Val::Number(20.0));
        assert_eq!(eval("-2 ** 2").unwrap(), Val::Number(4.0));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Val::Number(3.0));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            eval(r#""AB" + "CD""#).unwrap(),
            Val::String("ABCD".to_string())
        );
        assert_eq!(eval(r#""ABC" < "ABD""#).unwrap(), Val::Number(1.0));
        assert_eq!(eval(r#".NOT. ("A" = "B")"#).unwrap(), Val::Number(1.0));
    }

    #[test]
    fn test_undefined_variable() {
        let e = eval("X + 1").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UndefinedVariable);
    }
}
