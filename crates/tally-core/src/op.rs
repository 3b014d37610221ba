//! Binary operators, unary functions, domain errors, and value formatting.

/// The display text standing in for a value after an invalid operation.
///
/// It is never fed back into arithmetic: the state machine treats it as a
/// terminal display value until a digit entry or clear replaces it.
pub const ERROR_DISPLAY: &str = "Error";

/// An operation that has no valid numeric result.
///
/// Never propagated to callers of the engine; the state layer converts it
/// into [`ERROR_DISPLAY`] on the value line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative number")]
    NegativeSqrt,

    #[error("logarithm of a non-positive number")]
    NonPositiveLog,

    #[error("result is not a finite number")]
    NonFinite,
}

/// A binary operator awaiting (or receiving) its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Glyph shown in the pending-expression line.
    pub fn glyph(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '−',
            BinaryOp::Multiply => '×',
            BinaryOp::Divide => '÷',
        }
    }

    /// Apply the operator. Division by a zero operand is a domain error,
    /// not a panic and not an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DomainError> {
        let out = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => {
                if rhs == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        finite(out)
    }
}

/// A scientific unary function. Trigonometric functions take degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sqrt,
    Square,
    Sin,
    Cos,
    Tan,
    Log10,
}

impl UnaryFn {
    /// Short label for keypad buttons.
    pub fn label(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "√",
            UnaryFn::Square => "x²",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Log10 => "log",
        }
    }

    /// ASCII name used by the REPL word commands and the history tape.
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Square => "square",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Log10 => "log",
        }
    }

    /// Inverse of [`UnaryFn::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(UnaryFn::Sqrt),
            "square" => Some(UnaryFn::Square),
            "sin" => Some(UnaryFn::Sin),
            "cos" => Some(UnaryFn::Cos),
            "tan" => Some(UnaryFn::Tan),
            "log" => Some(UnaryFn::Log10),
            _ => None,
        }
    }

    /// Apply the function. Square root rejects negative input; log10
    /// rejects non-positive input.
    pub fn apply(self, v: f64) -> Result<f64, DomainError> {
        let out = match self {
            UnaryFn::Sqrt => {
                if v < 0.0 {
                    return Err(DomainError::NegativeSqrt);
                }
                v.sqrt()
            }
            UnaryFn::Square => v * v,
            UnaryFn::Sin => v.to_radians().sin(),
            UnaryFn::Cos => v.to_radians().cos(),
            UnaryFn::Tan => v.to_radians().tan(),
            UnaryFn::Log10 => {
                if v <= 0.0 {
                    return Err(DomainError::NonPositiveLog);
                }
                v.log10()
            }
        };
        finite(out)
    }
}

/// Format a computed value for the display: shortest round-trip decimal,
/// negative zero normalized to `0`.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

fn finite(v: f64) -> Result<f64, DomainError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DomainError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_ops() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(BinaryOp::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(BinaryOp::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(BinaryOp::Divide.apply(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        assert_eq!(
            BinaryOp::Divide.apply(10.0, 0.0),
            Err(DomainError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_domain_error() {
        assert_eq!(
            BinaryOp::Multiply.apply(f64::MAX, 10.0),
            Err(DomainError::NonFinite)
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(UnaryFn::Sqrt.apply(4.0), Ok(2.0));
        assert_eq!(UnaryFn::Sqrt.apply(-4.0), Err(DomainError::NegativeSqrt));
    }

    #[test]
    fn test_square() {
        assert_eq!(UnaryFn::Square.apply(5.0), Ok(25.0));
        assert_eq!(UnaryFn::Square.apply(-3.0), Ok(9.0));
    }

    #[test]
    fn test_trig_in_degrees() {
        let sin90 = UnaryFn::Sin.apply(90.0).unwrap();
        assert!((sin90 - 1.0).abs() < 1e-12);

        let cos0 = UnaryFn::Cos.apply(0.0).unwrap();
        assert!((cos0 - 1.0).abs() < 1e-12);

        let tan45 = UnaryFn::Tan.apply(45.0).unwrap();
        assert!((tan45 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_log10() {
        assert_eq!(UnaryFn::Log10.apply(1000.0), Ok(3.0));
        assert_eq!(UnaryFn::Log10.apply(0.0), Err(DomainError::NonPositiveLog));
        assert_eq!(UnaryFn::Log10.apply(-1.0), Err(DomainError::NonPositiveLog));
    }

    #[test]
    fn test_format_integers_without_fraction() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(-12.0), "-12");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(1.25), "1.25");
    }

    #[test]
    fn test_format_normalizes_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_unary_name_round_trip() {
        for f in [
            UnaryFn::Sqrt,
            UnaryFn::Square,
            UnaryFn::Sin,
            UnaryFn::Cos,
            UnaryFn::Tan,
            UnaryFn::Log10,
        ] {
            assert_eq!(UnaryFn::from_name(f.name()), Some(f));
        }
        assert_eq!(UnaryFn::from_name("cbrt"), None);
    }
}
