use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const MAX_ARRAY_LEN: usize = 1_000_000;

/// ## Variable memory
///
/// Scalars and arrays share one namespace. Names are kept in order
/// so DUMP lists them alphabetically.

#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Slot>,
}

#[derive(Debug)]
enum Slot {
    Scalar(Val),
    Array(Array),
}

#[derive(Debug)]
struct Array {
    dims: Vec<usize>,
    values: Vec<Val>,
}

impl Array {
    fn offset(&self, name: &str, indices: &[f64]) -> Result<usize> {
        if indices.len() != self.dims.len() {
            return Err(error!(IndexOutOfRange;
                format!("Wrong number of indices for array {}.", name)));
        }
        let mut offset = 0;
        for (index, dim) in indices.iter().zip(&self.dims) {
            let index = index.trunc();
            if !index.is_finite() || index < 1.0 || index > *dim as f64 {
                return Err(error!(IndexOutOfRange; "Index out of range."));
            }
            offset = offset * dim + (index as usize - 1);
        }
        Ok(offset)
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        match self.vars.get(ident.name()) {
            Some(Slot::Scalar(val)) => Ok(val.clone()),
            Some(Slot::Array(_)) => Err(error!(TypeMismatch;
                format!("Array {} used without indices.", ident))),
            None if ident.is_string() => Err(error!(UndefinedVariable;
                format!("Variable {} has not been initialized.", ident))),
            None => Err(error!(UndefinedVariable;
                format!("Undefined variable '{}'", ident))),
        }
    }

    pub fn store(&mut self, ident: &Ident, val: Val) -> Result<()> {
        if ident.is_string() != val.is_string() {
            return Err(error!(TypeMismatch));
        }
        match self.vars.get_mut(ident.name()) {
            Some(Slot::Scalar(slot)) => *slot = val,
            Some(Slot::Array(_)) => {
                return Err(error!(TypeMismatch;
                    format!("Array {} used without indices.", ident)))
            }
            None => {
                self.vars.insert(ident.name().clone(), Slot::Scalar(val));
            }
        }
        Ok(())
    }

    pub fn fetch_array(&self, ident: &Ident, indices: &[f64]) -> Result<Val> {
        let array = self.array(ident)?;
        let offset = array.offset(ident.name(), indices)?;
        Ok(array.values[offset].clone())
    }

    pub fn store_array(&mut self, ident: &Ident, indices: &[f64], val: Val) -> Result<()> {
        if ident.is_string() != val.is_string() {
            return Err(error!(TypeMismatch));
        }
        let array = match self.vars.get_mut(ident.name()) {
            Some(Slot::Array(array)) => array,
            Some(Slot::Scalar(_)) => return Err(not_an_array(ident)),
            None => return Err(not_declared(ident)),
        };
        let offset = array.offset(ident.name(), indices)?;
        array.values[offset] = val;
        Ok(())
    }

    /// Declares an array, replacing anything of the same name.
    /// Elements start as zero or the empty string.
    pub fn dimension_array(&mut self, ident: &Ident, bounds: &[f64]) -> Result<()> {
        let mut dims = Vec::with_capacity(bounds.len());
        let mut len: usize = 1;
        for bound in bounds {
            let bound = bound.trunc();
            if bound.is_nan() || bound < 1.0 {
                return Err(error!(IllegalFunctionCall;
                    format!("Array {} needs a dimension of at least 1.", ident)));
            }
            if bound > MAX_ARRAY_LEN as f64 {
                return Err(error!(OutOfMemory; "Array too large."));
            }
            len = len.saturating_mul(bound as usize);
            dims.push(bound as usize);
        }
        if len > MAX_ARRAY_LEN {
            return Err(error!(OutOfMemory; "Array too large."));
        }
        let zero = if ident.is_string() {
            Val::String(String::new())
        } else {
            Val::Number(0.0)
        };
        tracing::debug!(array = %ident, len, "dimension array");
        let array = Array {
            dims,
            values: vec![zero; len],
        };
        self.vars.insert(ident.name().clone(), Slot::Array(array));
        Ok(())
    }

    fn array(&self, ident: &Ident) -> Result<&Array> {
        match self.vars.get(ident.name()) {
            Some(Slot::Array(array)) => Ok(array),
            Some(Slot::Scalar(_)) => Err(not_an_array(ident)),
            None => Err(not_declared(ident)),
        }
    }

    /// One line per variable, the way DUMP prints them.
    pub fn describe(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, slot)| match slot {
                Slot::Scalar(val) => format!("{} = {}", name, val.quoted()),
                Slot::Array(array) => {
                    let dims = array
                        .dims
                        .iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<String>>()
                        .join(", ");
                    let values = array
                        .values
                        .iter()
                        .map(|v| v.quoted())
                        .collect::<Vec<String>>()
                        .join(", ");
                    format!("{}({}) = {}", name, dims, values)
                }
            })
            .collect()
    }
}

fn not_declared(ident: &Ident) -> Error {
    error!(ArrayNotDeclared;
        format!("Array {} must be declared in a DIM statement.", ident))
}

fn not_an_array(ident: &Ident) -> Error {
    error!(TypeMismatch; format!("{} is not an array.", ident))
}
