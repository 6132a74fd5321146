use super::{ast::*, lex::Lexer, token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Nesting limit for parenthesis, unary operators and exponents.
const MAX_DEPTH: usize = 64;

/// Parses the remainder of the line as a chain of statements.
pub fn parse(lexer: &mut Lexer) -> Result<Vec<Statement>> {
    let mut parser = Parser { lexer, depth: 0 };
    match parser.statements() {
        Ok(r) => Ok(r),
        Err(e) => Err(e.in_column(&parser.lexer.column())),
    }
}

/// Parses the remainder of the line as a single expression.
pub fn parse_expression(lexer: &mut Lexer) -> Result<Expression> {
    let mut parser = Parser { lexer, depth: 0 };
    let result = parser.expression().and_then(|expr| match parser.next()? {
        Token::EndOfLine => Ok(expr),
        _ => Err(error!(SyntaxError; "extra input beyond expression end")),
    });
    result.map_err(|e| e.in_column(&parser.lexer.column()))
}

pub(super) fn line_number_from(n: f64) -> Option<u32> {
    if n >= 0.0 && n.fract() == 0.0 && n <= u32::max_value() as f64 {
        Some(n as u32)
    } else {
        None
    }
}

struct Parser<'a> {
    lexer: &'a mut Lexer,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Result<Token> {
        match self.lexer.next_token() {
            Token::Error(msg) => Err(error!(SyntaxError; msg)),
            t => Ok(t),
        }
    }

    fn unget(&mut self) {
        self.lexer.unget_token();
    }

    fn expect_symbol(&mut self, c: char, msg: &str) -> Result<()> {
        if self.next()?.is_symbol(c) {
            Ok(())
        } else {
            Err(error!(SyntaxError; msg))
        }
    }

    fn nest<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(error!(ExpressionTooComplex));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut r: Vec<Statement> = vec![];
        loop {
            let statement = self.statement()?;
            let then_clause = matches!(statement, Statement::If(_, None));
            r.push(statement);
            if then_clause {
                continue;
            }
            match self.next()? {
                Token::EndOfLine => return Ok(r),
                Token::Symbol(':') => continue,
                _ => return Err(error!(SyntaxError; "extra input beyond statement end")),
            }
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next()? {
            Token::Word(word) => Statement::for_word(self, word),
            Token::Symbol('?') => Statement::r#print(self),
            Token::Symbol('\'') => Statement::r#rem(self),
            Token::Ident(_) | Token::Array(_) => {
                self.unget();
                Statement::r#let(self)
            }
            Token::Command(command) => Err(error!(SyntaxError;
                format!("{} is a command and cannot be used in a statement.", command))),
            Token::EndOfLine => Err(error!(SyntaxError; "Statement expected.")),
            _ => Err(error!(SyntaxError; "Unrecognized statement.")),
        }
    }

    fn line_number(&mut self, msg: &str) -> Result<u32> {
        if let Token::Literal(Literal::Number(n)) = self.next()? {
            if let Some(line) = line_number_from(n) {
                return Ok(line);
            }
        }
        Err(error!(SyntaxError; msg))
    }

    fn variable(&mut self) -> Result<Variable> {
        match self.next()? {
            Token::Ident(ident) => Ok(Variable::Unary(ident)),
            Token::Array(ident) => {
                self.expect_symbol('(', "Error parsing array index.")?;
                let mut indices = vec![];
                loop {
                    let expr = self.expression()?;
                    if expr.is_string() || expr.is_boolean() {
                        return Err(error!(SyntaxError; "Error parsing array index."));
                    }
                    indices.push(expr);
                    match self.next()? {
                        Token::Symbol(')') => break,
                        Token::Symbol(',') if indices.len() < 4 => continue,
                        Token::Symbol(',') => {
                            return Err(error!(SyntaxError; "Too many array indices."))
                        }
                        _ => return Err(error!(SyntaxError; "Missing comma in array index.")),
                    }
                }
                Ok(Variable::Array(ident, indices))
            }
            _ => Err(error!(SyntaxError; "Variable expected.")),
        }
    }

    fn variable_list(&mut self) -> Result<Vec<Variable>> {
        let mut vars = vec![self.variable()?];
        while self.next()?.is_symbol(',') {
            vars.push(self.variable()?);
        }
        self.unget();
        Ok(vars)
    }

    fn numeric_expression(&mut self, context: &str) -> Result<Expression> {
        let expr = self.expression()?;
        if expr.is_boolean() {
            Err(error!(SyntaxError;
                format!("Boolean expression not allowed in {}.", context)))
        } else if expr.is_string() {
            Err(error!(SyntaxError;
                format!("Numeric expression required in {}.", context)))
        } else {
            Ok(expr)
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.nest(|this| {
            let mut lhs = this.relation()?;
            loop {
                match this.next()? {
                    Token::Operator(op @ Operator::BoolAnd)
                    | Token::Operator(op @ Operator::BoolOr)
                    | Token::Operator(op @ Operator::BoolXor) => {
                        let rhs = this.relation()?;
                        lhs = this.binary(op, lhs, rhs)?;
                    }
                    _ => {
                        this.unget();
                        return Ok(lhs);
                    }
                }
            }
        })
    }

    fn relation(&mut self) -> Result<Expression> {
        let lhs = self.string()?;
        match self.next()? {
            Token::Operator(op) if op.is_relational() => {
                let rhs = self.string()?;
                self.binary(op, lhs, rhs)
            }
            _ => {
                self.unget();
                Ok(lhs)
            }
        }
    }

    fn string(&mut self) -> Result<Expression> {
        let mut lhs = self.logic()?;
        if !lhs.is_string() {
            return Ok(lhs);
        }
        loop {
            match self.next()? {
                Token::Operator(Operator::Plus) => {
                    let rhs = self.logic()?;
                    lhs = Expression::binary(BinaryOp::Concat, lhs, rhs)?;
                }
                _ => {
                    self.unget();
                    return Ok(lhs);
                }
            }
        }
    }

    fn logic(&mut self) -> Result<Expression> {
        let mut lhs = self.sum()?;
        if lhs.is_string() {
            return Ok(lhs);
        }
        loop {
            match self.next()? {
                Token::Operator(op @ Operator::And)
                | Token::Operator(op @ Operator::Or)
                | Token::Operator(op @ Operator::Xor) => {
                    let rhs = self.sum()?;
                    lhs = self.binary(op, lhs, rhs)?;
                }
                _ => {
                    self.unget();
                    return Ok(lhs);
                }
            }
        }
    }

    fn sum(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        if lhs.is_string() {
            return Ok(lhs);
        }
        loop {
            match self.next()? {
                Token::Operator(op @ Operator::Plus) | Token::Operator(op @ Operator::Minus) => {
                    let rhs = self.term()?;
                    lhs = self.binary(op, lhs, rhs)?;
                }
                _ => {
                    self.unget();
                    return Ok(lhs);
                }
            }
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        if lhs.is_string() {
            return Ok(lhs);
        }
        loop {
            match self.next()? {
                Token::Operator(op @ Operator::Multiply)
                | Token::Operator(op @ Operator::Divide) => {
                    let rhs = self.factor()?;
                    lhs = self.binary(op, lhs, rhs)?;
                }
                _ => {
                    self.unget();
                    return Ok(lhs);
                }
            }
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        let lhs = self.primary()?;
        if lhs.is_string() {
            return Ok(lhs);
        }
        match self.next()? {
            Token::Operator(Operator::Power) => {
                let rhs = self.nest(|this| this.factor())?;
                Expression::binary(BinaryOp::Power, lhs, rhs)
            }
            _ => {
                self.unget();
                Ok(lhs)
            }
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        let op = match self.next()? {
            Token::Operator(Operator::Not) => UnaryOp::BitNot,
            Token::Operator(Operator::Minus) => UnaryOp::Negate,
            Token::Operator(Operator::BoolNot) => UnaryOp::Not,
            _ => {
                self.unget();
                return self.element();
            }
        };
        let expr = self.nest(|this| this.primary())?;
        Expression::unary(op, expr)
    }

    fn element(&mut self) -> Result<Expression> {
        match self.next()? {
            Token::Symbol('(') => {
                let expr = self.expression()?;
                if !self.next()?.is_symbol(')') {
                    self.unget();
                    return Err(error!(SyntaxError; "mismatched parenthesis in expression"));
                }
                Ok(expr)
            }
            Token::Literal(Literal::Number(n)) => Ok(Expression::Number(n)),
            Token::Literal(Literal::String(s)) => Ok(Expression::String(s)),
            Token::Ident(_) | Token::Array(_) => {
                self.unget();
                Ok(Expression::Variable(self.variable()?))
            }
            Token::Function(func) => self.function(func),
            _ => {
                self.unget();
                Err(error!(SyntaxError; "Unexpected symbol in expression."))
            }
        }
    }

    fn function(&mut self, func: Function) -> Result<Expression> {
        use Function::*;
        if !self.next()?.is_symbol('(') {
            self.unget();
            return match func {
                Rnd | Fre => Ok(Expression::Function(func, vec![])),
                _ => Err(error!(SyntaxError;
                    format!("Missing argument for function {}.", func))),
            };
        }
        let mut args = vec![self.expression()?];
        while self.next()?.is_symbol(',') {
            args.push(self.expression()?);
        }
        self.unget();
        if !self.next()?.is_symbol(')') {
            self.unget();
            return Err(error!(SyntaxError; "Missing closing parenthesis for function."));
        }
        // true marks a string argument
        let (required, optional): (&[bool], &[bool]) = match func {
            Len | Val => (&[true], &[]),
            Left | Right => (&[true, false], &[]),
            Mid => (&[true, false], &[false]),
            Max | Min => (&[false, false], &[]),
            _ => (&[false], &[]),
        };
        if args.len() < required.len() || args.len() > required.len() + optional.len() {
            return Err(error!(SyntaxError;
                format!("{} function expects {} arguments.", func, required.len())));
        }
        for (arg, wants_string) in args.iter().zip(required.iter().chain(optional)) {
            if arg.is_boolean() {
                return Err(error!(SyntaxError;
                    format!("{} function cannot accept boolean expression.", func)));
            }
            if arg.is_string() != *wants_string {
                let kind = if *wants_string { "string" } else { "numeric" };
                return Err(error!(SyntaxError;
                    format!("{} requires a {} valued argument.", func, kind)));
            }
        }
        Ok(Expression::Function(func, args))
    }

    fn binary(&self, op: Operator, lhs: Expression, rhs: Expression) -> Result<Expression> {
        match BinaryOp::from_operator(op) {
            Some(op) => Expression::binary(op, lhs, rhs),
            None => Err(error!(InternalError; "unary operator in binary position")),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Data => Self::r#data(parse),
            Dim => Self::r#dim(parse),
            End => Ok(Statement::End),
            For => Self::r#for(parse),
            Gosub => Ok(Statement::Gosub(
                parse.line_number("Line number required after GOSUB.")?,
            )),
            Goto => Ok(Statement::Goto(
                parse.line_number("Line number required after GOTO.")?,
            )),
            If => Self::r#if(parse),
            Input => Self::r#input(parse),
            Let => Self::r#let(parse),
            Next => Self::r#next(parse),
            On => Self::r#on(parse),
            Print => Self::r#print(parse),
            Randomize => Self::r#randomize(parse),
            Read => Ok(Statement::Read(parse.variable_list()?)),
            Rem => Self::r#rem(parse),
            Restore => Ok(Statement::Restore),
            Return => Ok(Statement::Return),
            Stop => Ok(Statement::Stop),
            Troff => Ok(Statement::Troff),
            Tron => Self::r#tron(parse),
            Step | Then | Timer | To => {
                Err(error!(SyntaxError; format!("{} is out of place.", word)))
            }
        }
    }

    fn r#data(parse: &mut Parser) -> Result<Statement> {
        let mut items = vec![];
        loop {
            match parse.next()? {
                Token::Literal(literal) => items.push(literal),
                Token::Operator(Operator::Minus) => match parse.next()? {
                    Token::Literal(Literal::Number(n)) => items.push(Literal::Number(-n)),
                    _ => return Err(error!(SyntaxError; "Bogus value in DATA statement.")),
                },
                _ => return Err(error!(SyntaxError; "Bogus value in DATA statement.")),
            }
            if !parse.next()?.is_symbol(',') {
                parse.unget();
                return Ok(Statement::Data(items));
            }
        }
    }

    fn r#dim(parse: &mut Parser) -> Result<Statement> {
        let vars = parse.variable_list()?;
        for var in &vars {
            if let Variable::Unary(_) = var {
                return Err(error!(SyntaxError; "Array dimensions required in DIM statement."));
            }
        }
        Ok(Statement::Dim(vars))
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let ident = match parse.next()? {
            Token::Ident(ident) if !ident.is_string() => ident,
            Token::Ident(_) | Token::Array(_) => {
                return Err(error!(SyntaxError; "Numeric variable required for FOR statement."))
            }
            _ => return Err(error!(SyntaxError; "Missing variable in FOR statement.")),
        };
        if parse.next()? != Token::Operator(Operator::Equal) {
            return Err(error!(SyntaxError; "Missing = in FOR statement."));
        }
        let from = parse.numeric_expression("FOR")?;
        if parse.next()? != Token::Word(Word::To) {
            return Err(error!(SyntaxError; "Missing TO in FOR statement."));
        }
        let to = parse.numeric_expression("FOR")?;
        let step = if parse.next()? == Token::Word(Word::Step) {
            Some(parse.numeric_expression("FOR")?)
        } else {
            parse.unget();
            None
        };
        Ok(Statement::For(ident, from, to, step))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.expression()?;
        if !predicate.is_boolean() {
            return Err(error!(SyntaxError; "Boolean expression required for IF."));
        }
        match parse.next()? {
            Token::Word(Word::Then) => {}
            Token::Symbol(')') => {
                return Err(error!(SyntaxError; "Mismatched parenthesis in IF statement."))
            }
            _ => return Err(error!(SyntaxError; "Missing THEN keyword in IF statement.")),
        }
        match parse.next()? {
            Token::Literal(Literal::Number(n)) => match line_number_from(n) {
                Some(line) => Ok(Statement::If(predicate, Some(line))),
                None => Err(error!(SyntaxError; "Illegal line number following THEN.")),
            },
            Token::EndOfLine => Err(error!(SyntaxError; "Unparsable statement after THEN.")),
            _ => {
                parse.unget();
                Ok(Statement::If(predicate, None))
            }
        }
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        let prompt = match parse.next()? {
            Token::Literal(Literal::String(s)) => {
                parse.expect_symbol(';', "Missing ; after INPUT prompt.")?;
                Some(s)
            }
            _ => {
                parse.unget();
                None
            }
        };
        Ok(Statement::Input(prompt, parse.variable_list()?))
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        if parse.next()? != Token::Operator(Operator::Equal) {
            return Err(error!(SyntaxError; "Missing = in LET statement."));
        }
        let expr = parse.expression()?;
        if expr.is_boolean() {
            return Err(error!(SyntaxError; "Boolean expression not allowed in LET."));
        }
        if var.is_string() && !expr.is_string() {
            return Err(error!(SyntaxError; "String assignment needs string expression."));
        }
        if !var.is_string() && expr.is_string() {
            return Err(error!(SyntaxError; "Numeric assignment needs numeric expression."));
        }
        if parse.next()?.is_symbol(')') {
            return Err(error!(SyntaxError; "Mismatched parenthesis in LET statement."));
        }
        parse.unget();
        Ok(Statement::Let(var, expr))
    }

    fn r#next(parse: &mut Parser) -> Result<Statement> {
        match parse.next()? {
            Token::Ident(ident) if !ident.is_string() => Ok(Statement::Next(Some(ident))),
            Token::Ident(_) | Token::Array(_) => {
                Err(error!(SyntaxError; "Numeric variable required for NEXT statement."))
            }
            _ => {
                parse.unget();
                Ok(Statement::Next(None))
            }
        }
    }

    fn r#on(parse: &mut Parser) -> Result<Statement> {
        let selector = parse.numeric_expression("ON")?;
        let gosub = match parse.next()? {
            Token::Word(Word::Goto) => false,
            Token::Word(Word::Gosub) => true,
            _ => return Err(error!(SyntaxError; "GOTO or GOSUB expected in ON statement.")),
        };
        let mut lines = vec![];
        loop {
            lines.push(parse.line_number("Line number expected in ON statement.")?);
            if !parse.next()?.is_symbol(',') {
                parse.unget();
                break;
            }
        }
        if gosub {
            Ok(Statement::OnGosub(selector, lines))
        } else {
            Ok(Statement::OnGoto(selector, lines))
        }
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let mut items = vec![];
        loop {
            match parse.next()? {
                Token::Symbol(';') => items.push(PrintItem::Semicolon),
                Token::Symbol(',') => items.push(PrintItem::Comma),
                Token::Literal(_)
                | Token::Function(_)
                | Token::Ident(_)
                | Token::Array(_)
                | Token::Operator(_)
                | Token::Symbol('(') => {
                    parse.unget();
                    items.push(PrintItem::Expression(parse.expression()?));
                }
                _ => {
                    parse.unget();
                    return Ok(Statement::Print(items));
                }
            }
        }
    }

    fn r#randomize(parse: &mut Parser) -> Result<Statement> {
        match parse.next()? {
            Token::Word(Word::Timer) => Ok(Statement::Randomize(Seed::Timer)),
            Token::EndOfLine | Token::Symbol(':') => {
                parse.unget();
                Ok(Statement::Randomize(Seed::Clock))
            }
            _ => {
                parse.unget();
                let expr = parse.numeric_expression("RANDOMIZE")?;
                Ok(Statement::Randomize(Seed::Value(expr)))
            }
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Rem(parse.lexer.rest().trim().to_string()))
    }

    fn r#tron(parse: &mut Parser) -> Result<Statement> {
        match parse.next()? {
            Token::Literal(Literal::String(file)) => Ok(Statement::Tron(Some(file))),
            _ => {
                parse.unget();
                Ok(Statement::Tron(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(s: &str) -> Result<Vec<Statement>> {
        parse(&mut Lexer::new(s))
    }

    fn expression(s: &str) -> Result<Expression> {
        parse_expression(&mut Lexer::new(s))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(expression("2 + 3 * 4").unwrap().to_string(), "2 + 3 * 4");
        assert_eq!(expression("(2 + 3) * 4").unwrap().to_string(), "(2 + 3) * 4");
        assert_eq!(
            expression("2 ** 3 ** 2").unwrap(),
            Expression::Binary(
                BinaryOp::Power,
                Box::new(Expression::Number(2.0)),
                Box::new(Expression::Binary(
                    BinaryOp::Power,
                    Box::new(Expression::Number(3.0)),
                    Box::new(Expression::Number(2.0)),
                )),
            )
        );
        assert!(expression("1 < 2 .AND. 3 > 2").unwrap().is_boolean());
    }

    #[test]
    fn test_string_expressions() {
        assert!(expression(r#"A$ + "x" + LEFT$(B$, 2)"#).unwrap().is_string());
        assert!(expression(r#"A$ = "x""#).unwrap().is_boolean());
        assert!(expression(r#"A$ - "x""#).is_err());
        assert!(expression(r#"1 + "x""#).is_err());
    }

    #[test]
    fn test_mismatched_parenthesis() {
        let e = expression("(1 + 2").unwrap_err();
        assert!(e.is_syntax());
        assert_eq!(e.message_str(), "mismatched parenthesis in expression");
    }

    #[test]
    fn test_depth_guard() {
        let deep = format!("{}1{}", "(".repeat(500), ")".repeat(500));
        assert_eq!(
            expression(&deep).unwrap_err().code(),
            crate::lang::ErrorCode::ExpressionTooComplex
        );
        let shallow = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        assert!(expression(&shallow).is_ok());
    }

    #[test]
    fn test_let_rejects_boolean() {
        let e = statements("LET X = (1 < 2)").unwrap_err();
        assert_eq!(e.message_str(), "Boolean expression not allowed in LET.");
        assert!(statements("X$ = 1").is_err());
        assert!(statements("X = \"a\"").is_err());
    }

    #[test]
    fn test_inline_if_chain() {
        let r = statements("IF X > 1 THEN PRINT X : GOTO 10").unwrap();
        assert_eq!(r.len(), 3);
        assert!(matches!(r[0], Statement::If(_, None)));
        let r = statements("IF X > 1 THEN 100").unwrap();
        assert!(matches!(r[0], Statement::If(_, Some(100))));
        assert!(statements("IF X THEN 100").is_err());
        assert!(statements("IF X > 1 THEN").is_err());
    }

    #[test]
    fn test_shorthand() {
        let r = statements("? 1 : ' note").unwrap();
        assert_eq!(r[0].to_string(), "PRINT 1");
        assert_eq!(r[1], Statement::Rem("note".to_string()));
    }

    #[test]
    fn test_functions() {
        assert!(expression("RND").is_ok());
        assert!(expression("MID$(A$, 2)").is_ok());
        assert!(expression("MID$(A$, 2, 3)").is_ok());
        assert!(expression("MAX(1)").is_err());
        assert!(expression("LEN(3)").is_err());
        assert!(expression("SIN").is_err());
        assert!(expression("SQR(1 < 2)").is_err());
    }

    #[test]
    fn test_array_indices() {
        assert!(statements("A(1, 2, 3, 4) = 1").is_ok());
        let e = statements("A(1, 2, 3, 4, 5) = 1").unwrap_err();
        assert_eq!(e.message_str(), "Too many array indices.");
        assert!(statements("A(1 2) = 1").is_err());
    }

    #[test]
    fn test_extra_input() {
        let e = statements("PRINT 1 )").unwrap_err();
        assert_eq!(e.message_str(), "extra input beyond statement end");
        assert_eq!(e.column(), 8..9);
    }
}
