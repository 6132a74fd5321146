use std::rc::Rc;

// Used in both Token and Ast

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub enum Ident {
    Plain(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    /// A trailing `$` makes a string variable.
    pub fn new(name: &str) -> Ident {
        if name.ends_with('$') {
            Ident::String(name.into())
        } else {
            Ident::Plain(name.into())
        }
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
