use crate::error;
use crate::lang::ast::{BinaryOp, UnaryOp};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl Operation {
    pub fn binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64> {
        use BinaryOp::*;
        let result = match op {
            Add | Concat => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => {
                if rhs == 0.0 {
                    return Err(error!(DivideByZero; "divide by zero"));
                }
                lhs / rhs
            }
            Power => lhs.powf(rhs),
            BitAnd => ((lhs as i64) & (rhs as i64)) as f64,
            BitOr => ((lhs as i64) | (rhs as i64)) as f64,
            BitXor => ((lhs as i64) ^ (rhs as i64)) as f64,
            Equal => truth(lhs == rhs),
            NotEqual => truth(lhs != rhs),
            Less => truth(lhs < rhs),
            LessEqual => truth(lhs <= rhs),
            Greater => truth(lhs > rhs),
            GreaterEqual => truth(lhs >= rhs),
            And => truth(lhs != 0.0 && rhs != 0.0),
            Or => truth(lhs != 0.0 || rhs != 0.0),
            Xor => truth((lhs != 0.0) != (rhs != 0.0)),
        };
        Operation::checked(result)
    }

    pub fn unary(op: UnaryOp, val: f64) -> Result<f64> {
        match op {
            UnaryOp::Negate => Ok(-val),
            UnaryOp::BitNot => Ok(!(val as i64) as f64),
            UnaryOp::Not => Ok(truth(val == 0.0)),
        }
    }

    /// Strings compare by character code.
    pub fn compare_strings(op: BinaryOp, lhs: &str, rhs: &str) -> Result<f64> {
        use BinaryOp::*;
        match op {
            Equal => Ok(truth(lhs == rhs)),
            NotEqual => Ok(truth(lhs != rhs)),
            Less => Ok(truth(lhs < rhs)),
            LessEqual => Ok(truth(lhs <= rhs)),
            Greater => Ok(truth(lhs > rhs)),
            GreaterEqual => Ok(truth(lhs >= rhs)),
            _ => Err(error!(TypeMismatch; format!("{} is not a string comparison.", op))),
        }
    }

    /// NaN and infinity never reach a variable.
    pub fn checked(n: f64) -> Result<f64> {
        if n.is_nan() {
            Err(error!(IllegalFunctionCall; "result is not a number"))
        } else if n.is_infinite() {
            Err(error!(Overflow))
        } else {
            Ok(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::binary(BinaryOp::Divide, 1.0, 0.0).unwrap_err();
        assert_eq!(e.to_string(), "DIVIDE BY ZERO; divide by zero");
    }

    #[test]
    fn test_bitwise_truncates() {
        assert_eq!(Operation::binary(BinaryOp::BitAnd, 6.9, 3.2).unwrap(), 2.0);
        assert_eq!(Operation::binary(BinaryOp::BitOr, 4.0, 1.0).unwrap(), 5.0);
        assert_eq!(Operation::binary(BinaryOp::BitXor, 5.0, 1.0).unwrap(), 4.0);
        assert_eq!(Operation::unary(UnaryOp::BitNot, 0.0).unwrap(), -1.0);
    }

    #[test]
    fn test_overflow() {
        let e = Operation::binary(BinaryOp::Power, 10.0, 400.0).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::Overflow);
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            Operation::compare_strings(BinaryOp::Less, "ABC", "ABD").unwrap(),
            1.0
        );
        assert_eq!(
            Operation::compare_strings(BinaryOp::Equal, "a", "A").unwrap(),
            0.0
        );
    }
}
