// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Binary arithmetic operations.

use crate::calculator::error::CalcError;

/// An arithmetic operation waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Maps a keyboard character to its operation.
    pub(crate) fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The separator written between the two operands of an equation.
    ///
    /// The surrounding spaces are part of the symbol, equations are split on
    /// the whole string to recover the left operand.
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Subtract => " − ",
            Self::Multiply => " × ",
            Self::Divide => " ÷ ",
        }
    }

    /// The bare symbol, as printed on a keypad button.
    pub(crate) fn label(self) -> &'static str {
        self.symbol().trim()
    }

    /// Applies the operation to a pair of operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}
