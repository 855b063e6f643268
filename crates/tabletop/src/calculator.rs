//! Two-operand arithmetic for the `calc` command.

use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Operator {
    /// Addition.
    #[strum(serialize = "+")]
    Add,
    /// Subtraction.
    #[strum(serialize = "-")]
    Subtract,
    /// Multiplication.
    #[strum(serialize = "*")]
    Multiply,
    /// Division.
    #[strum(serialize = "/")]
    Divide,
}

/// Calculator failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CalcError {
    /// Operand is not a number.
    #[display("Invalid number '{input}'")]
    InvalidNumber {
        /// Text that failed to parse.
        input: String,
    },
    /// Operator is not one of `+ - * /`.
    #[display("Invalid operator")]
    InvalidOperator {
        /// Text that failed to parse.
        input: String,
    },
    /// Right-hand side of `/` is zero.
    #[display("Division by zero")]
    DivisionByZero,
}

/// A parsed `lhs operator rhs` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    lhs: f64,
    operator: Operator,
    rhs: f64,
}

impl Calculation {
    /// Parses the three command-line operands.
    #[instrument]
    pub fn parse(lhs: &str, operator: &str, rhs: &str) -> Result<Self, CalcError> {
        let operator =
            Operator::from_str(operator.trim()).map_err(|_| CalcError::InvalidOperator {
                input: operator.to_string(),
            })?;
        Ok(Self {
            lhs: parse_number(lhs)?,
            operator,
            rhs: parse_number(rhs)?,
        })
    }

    /// Computes the result.
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        let result = match self.operator {
            Operator::Add => self.lhs + self.rhs,
            Operator::Subtract => self.lhs - self.rhs,
            Operator::Multiply => self.lhs * self.rhs,
            Operator::Divide if self.rhs == 0.0 => return Err(CalcError::DivisionByZero),
            Operator::Divide => self.lhs / self.rhs,
        };
        debug!(calculation = ?self, result, "Evaluated");
        Ok(result)
    }

    /// Formats the expression and its result as `lhs op rhs = result`.
    pub fn render(&self) -> Result<String, CalcError> {
        let result = self.evaluate()?;
        Ok(format!(
            "{} {} {} = {}",
            self.lhs, self.operator, self.rhs, result
        ))
    }
}

fn parse_number(input: &str) -> Result<f64, CalcError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| CalcError::InvalidNumber {
            input: input.to_string(),
        })
}
