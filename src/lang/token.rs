pub use super::ident::Ident;
use super::number_to_string;
use std::collections::HashMap;

thread_local!(
    // Later entries win, so functions shadow keywords which shadow commands.
    static STRING_TO_TOKEN: HashMap<std::string::String, Token> = Command::ALL
        .iter()
        .map(|x| Token::Command(*x))
        .chain(Word::ALL.iter().map(|x| Token::Word(*x)))
        .chain(Function::ALL.iter().map(|x| Token::Function(*x)))
        .map(|d| (d.to_string(), d))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Symbol(char),
    Command(Command),
    Literal(Literal),
    Function(Function),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    /// An identifier immediately followed by `(`. The paren is left in the stream.
    Array(Ident),
    Error(String),
    EndOfLine,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Token::Symbol(s) if *s == c)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Symbol(c) => write!(f, "{}", c),
            Command(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Array(s) => write!(f, "{}", s),
            Error(s) => write!(f, "{}", s),
            EndOfLine => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", number_to_string(*n)),
            Literal::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Data,
    Dim,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    On,
    Print,
    Randomize,
    Read,
    Rem,
    Restore,
    Return,
    Step,
    Stop,
    Then,
    Timer,
    To,
    Troff,
    Tron,
}

impl Word {
    pub const ALL: [Word; 24] = [
        Word::Data,
        Word::Dim,
        Word::End,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::Next,
        Word::On,
        Word::Print,
        Word::Randomize,
        Word::Read,
        Word::Rem,
        Word::Restore,
        Word::Return,
        Word::Step,
        Word::Stop,
        Word::Then,
        Word::Timer,
        Word::To,
        Word::Troff,
        Word::Tron,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            Data => "DATA",
            Dim => "DIM",
            End => "END",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            Next => "NEXT",
            On => "ON",
            Print => "PRINT",
            Randomize => "RANDOMIZE",
            Read => "READ",
            Rem => "REM",
            Restore => "RESTORE",
            Return => "RETURN",
            Step => "STEP",
            Stop => "STOP",
            Then => "THEN",
            Timer => "TIMER",
            To => "TO",
            Troff => "TROFF",
            Tron => "TRON",
        };
        write!(f, "{}", s)
    }
}

/// Shell commands. These never appear inside a program line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Bye,
    Cat,
    Cont,
    Del,
    Dump,
    List,
    Load,
    New,
    Resume,
    Run,
    Save,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::Bye,
        Command::Cat,
        Command::Cont,
        Command::Del,
        Command::Dump,
        Command::List,
        Command::Load,
        Command::New,
        Command::Resume,
        Command::Run,
        Command::Save,
    ];
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Command::*;
        let s = match self {
            Bye => "BYE",
            Cat => "CAT",
            Cont => "CONT",
            Del => "DEL",
            Dump => "DUMP",
            List => "LIST",
            Load => "LOAD",
            New => "NEW",
            Resume => "RESUME",
            Run => "RUN",
            Save => "SAVE",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Abs,
    Atn,
    Chr,
    Cos,
    Fre,
    Int,
    Left,
    Len,
    Log,
    Max,
    Mid,
    Min,
    Right,
    Rnd,
    Sgn,
    Sin,
    Spc,
    Sqr,
    Str,
    Tab,
    Tan,
    Val,
}

impl Function {
    pub const ALL: [Function; 22] = [
        Function::Abs,
        Function::Atn,
        Function::Chr,
        Function::Cos,
        Function::Fre,
        Function::Int,
        Function::Left,
        Function::Len,
        Function::Log,
        Function::Max,
        Function::Mid,
        Function::Min,
        Function::Right,
        Function::Rnd,
        Function::Sgn,
        Function::Sin,
        Function::Spc,
        Function::Sqr,
        Function::Str,
        Function::Tab,
        Function::Tan,
        Function::Val,
    ];

    /// Whether the function returns a string.
    pub fn is_string(self) -> bool {
        use Function::*;
        matches!(self, Chr | Left | Mid | Right | Spc | Str | Tab)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        let s = match self {
            Abs => "ABS",
            Atn => "ATN",
            Chr => "CHR$",
            Cos => "COS",
            Fre => "FRE",
            Int => "INT",
            Left => "LEFT$",
            Len => "LEN",
            Log => "LOG",
            Max => "MAX",
            Mid => "MID$",
            Min => "MIN",
            Right => "RIGHT$",
            Rnd => "RND",
            Sgn => "SGN",
            Sin => "SIN",
            Spc => "SPC$",
            Sqr => "SQR",
            Str => "STR$",
            Tab => "TAB$",
            Tan => "TAN",
            Val => "VAL",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    And,
    Or,
    Xor,
    Not,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    BoolAnd,
    BoolOr,
    BoolXor,
    BoolNot,
}

impl Operator {
    pub fn is_relational(self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }

    /// The dotted forms are spelled in any case.
    pub fn from_dotted(s: &str) -> Option<Operator> {
        match s.to_ascii_uppercase().as_str() {
            ".AND." => Some(Operator::BoolAnd),
            ".OR." => Some(Operator::BoolOr),
            ".XOR." => Some(Operator::BoolXor),
            ".NOT." => Some(Operator::BoolNot),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        let s = match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Power => "**",
            And => "&",
            Or => "|",
            Xor => "^",
            Not => "!",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            BoolAnd => ".AND.",
            BoolOr => ".OR.",
            BoolXor => ".XOR.",
            BoolNot => ".NOT.",
        };
        write!(f, "{}", s)
    }
}
