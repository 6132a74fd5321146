use super::{number_to_string, token::Literal, Error, Function, Ident, Operator};

type Result<T> = std::result::Result<T, Error>;

/// One statement of a line.
///
/// An `If` without a target line is followed in its line by the
/// statements of its then-clause.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Data(Vec<Literal>),
    Dim(Vec<Variable>),
    End,
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(u32),
    Goto(u32),
    If(Expression, Option<u32>),
    Input(Option<String>, Vec<Variable>),
    Let(Variable, Expression),
    Next(Option<Ident>),
    OnGoto(Expression, Vec<u32>),
    OnGosub(Expression, Vec<u32>),
    Print(Vec<PrintItem>),
    Randomize(Seed),
    Read(Vec<Variable>),
    Rem(String),
    Restore,
    Return,
    Stop,
    Troff,
    Tron(Option<String>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Expression(Expression),
    Semicolon,
    Comma,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Seed {
    Clock,
    Timer,
    Value(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Unary(Ident),
    Array(Ident, Vec<Expression>),
}

impl Variable {
    pub fn ident(&self) -> &Ident {
        match self {
            Variable::Unary(ident) | Variable::Array(ident, _) => ident,
        }
    }

    pub fn is_string(&self) -> bool {
        self.ident().is_string()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    BitAnd,
    BitOr,
    BitXor,
    Concat,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub fn from_operator(op: Operator) -> Option<BinaryOp> {
        use BinaryOp::*;
        Some(match op {
            Operator::Plus => Add,
            Operator::Minus => Subtract,
            Operator::Multiply => Multiply,
            Operator::Divide => Divide,
            Operator::Power => Power,
            Operator::And => BitAnd,
            Operator::Or => BitOr,
            Operator::Xor => BitXor,
            Operator::Equal => Equal,
            Operator::NotEqual => NotEqual,
            Operator::Less => Less,
            Operator::LessEqual => LessEqual,
            Operator::Greater => Greater,
            Operator::GreaterEqual => GreaterEqual,
            Operator::BoolAnd => And,
            Operator::BoolOr => Or,
            Operator::BoolXor => Xor,
            Operator::Not | Operator::BoolNot => return None,
        })
    }

    pub fn is_relational(self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor)
    }

    fn precedence(self) -> u8 {
        use BinaryOp::*;
        match self {
            And | Or | Xor => 1,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 2,
            Concat => 3,
            BitAnd | BitOr | BitXor => 4,
            Add | Subtract => 5,
            Multiply | Divide => 6,
            Power => 7,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BinaryOp::*;
        let op = match self {
            Add | Concat => Operator::Plus,
            Subtract => Operator::Minus,
            Multiply => Operator::Multiply,
            Divide => Operator::Divide,
            Power => Operator::Power,
            BitAnd => Operator::And,
            BitOr => Operator::Or,
            BitXor => Operator::Xor,
            Equal => Operator::Equal,
            NotEqual => Operator::NotEqual,
            Less => Operator::Less,
            LessEqual => Operator::LessEqual,
            Greater => Operator::Greater,
            GreaterEqual => Operator::GreaterEqual,
            And => Operator::BoolAnd,
            Or => Operator::BoolOr,
            Xor => Operator::BoolXor,
        };
        write!(f, "{}", op)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Negate,
    BitNot,
    Not,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    String(String),
    Variable(Variable),
    Function(Function, Vec<Expression>),
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Builds a binary node, refusing operands of the wrong kind.
    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Result<Expression> {
        if op.is_boolean() {
            if !lhs.is_boolean() || !rhs.is_boolean() {
                return Err(error!(SyntaxError;
                    "Expression: cannot combine boolean term with arithmetic term."));
            }
        } else if lhs.is_boolean() || rhs.is_boolean() {
            return Err(error!(SyntaxError;
                "Expression: cannot combine boolean term with arithmetic term."));
        } else if op == BinaryOp::Concat {
            if !lhs.is_string() || !rhs.is_string() {
                return Err(error!(SyntaxError; "Only add is allowed in string expressions."));
            }
        } else if op.is_relational() {
            if lhs.is_string() != rhs.is_string() {
                return Err(error!(SyntaxError;
                    "Expression: cannot compare string term with arithmetic term."));
            }
        } else if lhs.is_string() || rhs.is_string() {
            return Err(error!(SyntaxError;
                "Expression: cannot combine string term with arithmetic term."));
        }
        Ok(Expression::Binary(op, Box::new(lhs), Box::new(rhs)))
    }

    pub fn unary(op: UnaryOp, expr: Expression) -> Result<Expression> {
        if op == UnaryOp::Not {
            if !expr.is_boolean() {
                return Err(error!(SyntaxError; ".NOT. requires a boolean term."));
            }
        } else if expr.is_boolean() {
            return Err(error!(SyntaxError;
                "Expression: cannot combine boolean term with arithmetic term."));
        } else if expr.is_string() {
            return Err(error!(SyntaxError;
                "Expression: cannot combine string term with arithmetic term."));
        }
        Ok(Expression::Unary(op, Box::new(expr)))
    }

    /// Produces 1.0 or 0.0.
    pub fn is_boolean(&self) -> bool {
        match self {
            Expression::Binary(op, ..) => op.is_relational() || op.is_boolean(),
            Expression::Unary(op, _) => *op == UnaryOp::Not,
            _ => false,
        }
    }

    pub fn is_string(&self) -> bool {
        match self {
            Expression::String(_) => true,
            Expression::Variable(var) => var.is_string(),
            Expression::Function(func, _) => func.is_string(),
            Expression::Binary(op, ..) => *op == BinaryOp::Concat,
            _ => false,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expression::Binary(op, ..) => op.precedence(),
            Expression::Unary(..) => 8,
            _ => 9,
        }
    }
}

fn paren(f: &mut std::fmt::Formatter, expr: &Expression, wrap: bool) -> std::fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(n) => write!(f, "{}", number_to_string(*n)),
            String(s) => write!(f, "{}", Literal::String(s.clone())),
            Variable(var) => write!(f, "{}", var),
            Function(func, args) => {
                if args.is_empty() {
                    write!(f, "{}", func)
                } else {
                    write!(f, "{}({})", func, list(args))
                }
            }
            Unary(op, expr) => {
                match op {
                    UnaryOp::Negate => write!(f, "-")?,
                    UnaryOp::BitNot => write!(f, "!")?,
                    UnaryOp::Not => write!(f, ".NOT. ")?,
                }
                paren(f, expr, expr.precedence() < 8)
            }
            Binary(op, lhs, rhs) => {
                let p = op.precedence();
                let power = *op == BinaryOp::Power;
                paren(f, lhs, lhs.precedence() < p || (power && lhs.precedence() == p))?;
                write!(f, " {} ", op)?;
                paren(f, rhs, rhs.precedence() < p || (!power && rhs.precedence() == p))
            }
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variable::Unary(ident) => write!(f, "{}", ident),
            Variable::Array(ident, indices) => write!(f, "{}({})", ident, list(indices)),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Data(items) => write!(f, "DATA {}", list(items)),
            Dim(vars) => write!(f, "DIM {}", list(vars)),
            End => write!(f, "END"),
            For(ident, from, to, step) => {
                write!(f, "FOR {} = {} TO {}", ident, from, to)?;
                match step {
                    Some(step) => write!(f, " STEP {}", step),
                    None => Ok(()),
                }
            }
            Gosub(line) => write!(f, "GOSUB {}", line),
            Goto(line) => write!(f, "GOTO {}", line),
            If(expr, Some(line)) => write!(f, "IF {} THEN {}", expr, line),
            If(expr, None) => write!(f, "IF {} THEN", expr),
            Input(prompt, vars) => match prompt {
                Some(prompt) => write!(
                    f,
                    "INPUT {}; {}",
                    Literal::String(prompt.clone()),
                    list(vars)
                ),
                None => write!(f, "INPUT {}", list(vars)),
            },
            Let(var, expr) => write!(f, "LET {} = {}", var, expr),
            Next(Some(ident)) => write!(f, "NEXT {}", ident),
            Next(None) => write!(f, "NEXT"),
            OnGoto(expr, lines) => write!(f, "ON {} GOTO {}", expr, list(lines)),
            OnGosub(expr, lines) => write!(f, "ON {} GOSUB {}", expr, list(lines)),
            Print(items) => {
                write!(f, "PRINT")?;
                for item in items {
                    match item {
                        PrintItem::Expression(expr) => write!(f, " {}", expr)?,
                        PrintItem::Semicolon => write!(f, ";")?,
                        PrintItem::Comma => write!(f, ",")?,
                    }
                }
                Ok(())
            }
            Randomize(Seed::Clock) => write!(f, "RANDOMIZE"),
            Randomize(Seed::Timer) => write!(f, "RANDOMIZE TIMER"),
            Randomize(Seed::Value(expr)) => write!(f, "RANDOMIZE {}", expr),
            Read(vars) => write!(f, "READ {}", list(vars)),
            Rem(text) if text.is_empty() => write!(f, "REM"),
            Rem(text) => write!(f, "REM {}", text),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Stop => write!(f, "STOP"),
            Troff => write!(f, "TROFF"),
            Tron(Some(file)) => write!(f, "TRON {}", Literal::String(file.clone())),
            Tron(None) => write!(f, "TRON"),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_ident(&mut self, _: &Ident) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Ident {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_ident(self)
    }
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Variable::*;
        match self {
            Unary(ident) => {
                ident.accept(visitor);
            }
            Array(ident, vec_expr) => {
                ident.accept(visitor);
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Data(_) | End | Gosub(_) | Goto(_) | Rem(_) | Restore | Return | Stop | Troff
            | Tron(_) => {}
            Randomize(seed) => {
                if let Seed::Value(expr) = seed {
                    expr.accept(visitor);
                }
            }
            Dim(vars) | Input(_, vars) | Read(vars) => {
                for var in vars {
                    var.accept(visitor);
                }
            }
            For(ident, expr1, expr2, expr3) => {
                ident.accept(visitor);
                expr1.accept(visitor);
                expr2.accept(visitor);
                if let Some(expr3) = expr3 {
                    expr3.accept(visitor);
                }
            }
            If(expr, _) | OnGoto(expr, _) | OnGosub(expr, _) => {
                expr.accept(visitor);
            }
            Let(var, expr) => {
                var.accept(visitor);
                expr.accept(visitor);
            }
            Next(ident) => {
                if let Some(ident) = ident {
                    ident.accept(visitor);
                }
            }
            Print(items) => {
                for item in items {
                    if let PrintItem::Expression(expr) = item {
                        expr.accept(visitor);
                    }
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Number(_) | String(_) => {}
            Variable(var) => var.accept(visitor),
            Function(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Unary(_, expr) => expr.accept(visitor),
            Binary(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Expression {
        Expression::Number(n)
    }

    #[test]
    fn test_boolean_operands_are_checked() {
        let lt = Expression::binary(BinaryOp::Less, num(1.0), num(2.0)).unwrap();
        assert!(lt.is_boolean());
        assert!(Expression::binary(BinaryOp::Add, lt.clone(), num(1.0)).is_err());
        assert!(Expression::binary(BinaryOp::And, lt.clone(), num(1.0)).is_err());
        assert!(Expression::binary(BinaryOp::And, lt.clone(), lt).is_ok());
    }

    #[test]
    fn test_string_operands_are_checked() {
        let s = Expression::String("a".to_string());
        assert!(Expression::binary(BinaryOp::Multiply, s.clone(), num(2.0)).is_err());
        assert!(Expression::binary(BinaryOp::Concat, s.clone(), num(2.0)).is_err());
        assert!(Expression::binary(BinaryOp::Equal, s.clone(), num(2.0)).is_err());
        let cat = Expression::binary(BinaryOp::Concat, s.clone(), s).unwrap();
        assert!(cat.is_string());
    }

    #[test]
    fn test_display_parens() {
        let sum = Expression::binary(BinaryOp::Add, num(2.0), num(3.0)).unwrap();
        let product = Expression::binary(BinaryOp::Multiply, sum.clone(), num(4.0)).unwrap();
        assert_eq!(product.to_string(), "(2 + 3) * 4");
        let difference = Expression::binary(BinaryOp::Subtract, num(1.0), sum).unwrap();
        assert_eq!(difference.to_string(), "1 - (2 + 3)");
        let power = Expression::binary(BinaryOp::Power, num(3.0), num(2.0)).unwrap();
        let power = Expression::binary(BinaryOp::Power, num(2.0), power).unwrap();
        assert_eq!(power.to_string(), "2 ** 3 ** 2");
        let negate = Expression::unary(UnaryOp::Negate, power).unwrap();
        assert_eq!(negate.to_string(), "-(2 ** 3 ** 2)");
    }
}
