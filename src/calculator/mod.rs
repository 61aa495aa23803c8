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

//! The equation accumulator.
//!
//! [`Calculator`] holds everything typed during a session: the operand being
//! edited, the pending operation and the human-readable equation composed
//! from both. Every operation mutates the state in place and never fails;
//! division by zero and unparseable operands are only observable through
//! [`Calculator::display`].

pub(crate) mod error;
pub(crate) mod operation;

use tracing::{debug, warn};

use crate::{calculator::error::CalcError, util::format::format_result};

pub(crate) use operation::Operation;

/// Maximum number of characters in the operand being edited.
pub(crate) const MAX_OPERAND_LEN: usize = 12;

/// Text shown in place of the operand after a division by zero.
pub(crate) const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Calculator {
    current_operand: String,
    previous_operand: String,
    pending: Option<Operation>,
    reset_screen: bool,
    full_equation: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current_operand: String::from("0"),
            previous_operand: String::new(),
            pending: None,
            reset_screen: false,
            full_equation: String::new(),
        }
    }
}

impl Calculator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Enters a digit, starting a fresh operand if the last input finished
    /// one.
    pub(crate) fn digit(&mut self, digit: char) {
        if self.reset_screen || self.current_operand == "0" {
            self.current_operand = digit.to_string();
            self.reset_screen = false;
        } else if self.operand_len() < MAX_OPERAND_LEN {
            self.current_operand.push(digit);
        }

        self.rebuild_equation();
    }

    pub(crate) fn decimal_point(&mut self) {
        if self.reset_screen {
            self.current_operand = String::from("0.");
            self.reset_screen = false;
        } else if !self.current_operand.contains('.') && self.operand_len() < MAX_OPERAND_LEN {
            self.current_operand.push('.');
        }

        self.rebuild_equation();
    }

    /// Starts a new operation.
    ///
    /// If an operation is already pending it is folded into the current
    /// operand first, so `1 + 2 ×` continues as `3 ×`.
    pub(crate) fn operator(&mut self, operation: Operation) {
        if self.pending.is_some() {
            self.fold(false);
        }

        self.pending = Some(operation);
        self.full_equation = format!("{}{}", self.current_operand, operation.symbol());
        self.reset_screen = true;
    }

    /// Evaluates the pending operation and moves the finished equation to
    /// the secondary display. Does nothing if no operation is pending.
    pub(crate) fn equals(&mut self) {
        self.fold(true);
    }

    pub(crate) fn backspace(&mut self) {
        self.current_operand.pop();
        if self.current_operand.is_empty() {
            self.current_operand = String::from("0");
        }

        self.rebuild_equation();
    }

    pub(crate) fn clear(&mut self) {
        *self = Self {
            full_equation: String::from("0"),
            ..Self::default()
        };
    }

    /// Returns the `(main, secondary)` display texts.
    pub(crate) fn display(&self) -> (&str, &str) {
        let main = if self.full_equation.is_empty() {
            &self.current_operand
        } else {
            &self.full_equation
        };

        (main, &self.previous_operand)
    }

    fn operand_len(&self) -> usize {
        self.current_operand.chars().count()
    }

    // Left operand of the pending equation, the text before the first
    // occurrence of the operator symbol (or all of it if there is none).
    fn left_operand(&self, operation: Operation) -> &str {
        self.full_equation
            .split_once(operation.symbol())
            .map_or(self.full_equation.as_str(), |(left, _)| left)
    }

    // Must run after every change to `current_operand`.
    fn rebuild_equation(&mut self) {
        self.full_equation = match self.pending {
            None => self.current_operand.clone(),
            Some(operation) => format!(
                "{}{}{}",
                self.left_operand(operation),
                operation.symbol(),
                self.current_operand
            ),
        };
    }

    fn evaluate(&self, operation: Operation) -> Result<f64, CalcError> {
        let lhs = parse_operand(self.left_operand(operation))?;
        let rhs = parse_operand(&self.current_operand)?;

        operation.apply(lhs, rhs)
    }

    // Reduces the pending operation to a single value. A finalizing fold
    // also moves the equation to `previous_operand` and ends the operation.
    fn fold(&mut self, finalize: bool) {
        let Some(operation) = self.pending else {
            return;
        };

        match self.evaluate(operation) {
            Ok(value) => {
                let result = format_result(value);
                debug!(equation = %self.full_equation, %result, finalize, "folded equation");

                if finalize {
                    self.previous_operand = format!("{} =", self.full_equation);
                    self.pending = None;
                    self.reset_screen = true;
                }
                self.current_operand = result.clone();
                self.full_equation = result;
            }
            Err(CalcError::DivisionByZero) => {
                warn!(equation = %self.full_equation, "division by zero");
                self.current_operand = String::from(ERROR_TEXT);
                self.full_equation = String::from(ERROR_TEXT);
            }
            Err(e @ CalcError::InvalidOperand(_)) => {
                debug!(equation = %self.full_equation, "ignoring evaluation: {e}");
            }
        }
    }
}

// `Infinity` is accepted so an overflowed result can keep being used, `NaN`
// is not.
fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(calc: &mut Calculator, digits: &str) {
        for d in digits.chars() {
            match d {
                '.' => calc.decimal_point(),
                _ => calc.digit(d),
            }
        }
    }

    fn assert_cleared(calc: &Calculator) {
        assert_eq!(calc.current_operand, "0");
        assert_eq!(calc.previous_operand, "");
        assert_eq!(calc.pending, None);
        assert_eq!(calc.full_equation, "0");
        assert!(!calc.reset_screen);
    }

    #[test]
    fn starts_with_zero_and_empty_equation() {
        let calc = Calculator::new();
        assert_eq!(calc.current_operand, "0");
        assert_eq!(calc.full_equation, "");
        assert_eq!(calc.display(), ("0", ""));
    }

    #[test]
    fn adds_two_operands() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.digit('2');
        calc.operator(Operation::Add);
        calc.digit('5');
        assert_eq!(calc.display(), ("12 + 5", ""));

        calc.equals();
        assert_eq!(calc.current_operand, "17");
        assert_eq!(calc.previous_operand, "12 + 5 =");
        assert_eq!(calc.full_equation, "17");
        assert_eq!(calc.pending, None);
        assert!(calc.reset_screen);
        assert_eq!(calc.display(), ("17", "12 + 5 ="));
    }

    #[test]
    fn division_by_zero_shows_error() {
        let mut calc = Calculator::new();
        calc.digit('5');
        calc.operator(Operation::Divide);
        calc.digit('0');
        calc.equals();

        assert_eq!(calc.current_operand, ERROR_TEXT);
        assert_eq!(calc.full_equation, ERROR_TEXT);
        assert_eq!(calc.pending, Some(Operation::Divide));
        assert_eq!(calc.previous_operand, "");
    }

    #[test]
    fn chained_operator_folds_pending_operation() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.operator(Operation::Add);
        calc.digit('2');
        calc.operator(Operation::Multiply);

        assert_eq!(calc.current_operand, "3");
        assert_eq!(calc.full_equation, "3 × ");
        assert_eq!(calc.pending, Some(Operation::Multiply));
        assert_eq!(calc.previous_operand, "");

        calc.digit('3');
        calc.equals();
        assert_eq!(calc.current_operand, "9");
        assert_eq!(calc.previous_operand, "3 × 3 =");
    }

    #[test]
    fn repeated_operator_reuses_current_operand() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.operator(Operation::Add);
        calc.operator(Operation::Multiply);

        assert_eq!(calc.current_operand, "2");
        assert_eq!(calc.full_equation, "2 × ");
    }

    #[test]
    fn long_fractions_are_rounded_to_eight_places() {
        let mut calc = Calculator::new();
        enter(&mut calc, "10");
        calc.operator(Operation::Divide);
        calc.digit('3');
        calc.equals();

        assert_eq!(calc.current_operand, "3.33333333");
        assert_eq!(calc.previous_operand, "10 ÷ 3 =");
    }

    #[test]
    fn negative_result_feeds_next_equation() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Operation::Subtract);
        calc.digit('5');
        calc.equals();
        assert_eq!(calc.current_operand, "-3");

        calc.operator(Operation::Add);
        calc.digit('1');
        calc.equals();
        assert_eq!(calc.current_operand, "-2");
        assert_eq!(calc.previous_operand, "-3 + 1 =");
    }

    #[test]
    fn equals_without_operation_does_nothing() {
        let mut calc = Calculator::new();
        enter(&mut calc, "42");
        let before = calc.clone();

        calc.equals();
        assert_eq!(calc, before);
    }

    #[test]
    fn digit_after_result_starts_new_operand() {
        let mut calc = Calculator::new();
        calc.digit('4');
        calc.operator(Operation::Multiply);
        calc.digit('2');
        calc.equals();

        calc.digit('7');
        assert_eq!(calc.current_operand, "7");
        assert_eq!(calc.display(), ("7", "4 × 2 ="));
    }

    #[test]
    fn operand_is_capped_at_twelve_characters() {
        let mut calc = Calculator::new();
        enter(&mut calc, "1234567890123456");
        assert_eq!(calc.current_operand, "123456789012");

        let mut calc = Calculator::new();
        enter(&mut calc, "1.2.3.4.5.6.7.8.9.0.1.2.3");
        assert!(calc.current_operand.chars().count() <= MAX_OPERAND_LEN);
        assert_eq!(calc.current_operand.matches('.').count(), 1);

        let mut calc = Calculator::new();
        enter(&mut calc, "12345678901.");
        enter(&mut calc, ".");
        assert_eq!(calc.current_operand, "12345678901.");
    }

    #[test]
    fn decimal_point_starts_fresh_operand_after_operator() {
        let mut calc = Calculator::new();
        calc.digit('3');
        calc.operator(Operation::Add);
        calc.decimal_point();
        calc.digit('5');

        assert_eq!(calc.current_operand, "0.5");
        assert_eq!(calc.full_equation, "3 + 0.5");

        calc.equals();
        assert_eq!(calc.current_operand, "3.5");
    }

    #[test]
    fn decimal_point_on_zero_extends_it() {
        let mut calc = Calculator::new();
        enter(&mut calc, ".5");
        assert_eq!(calc.current_operand, "0.5");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut calc = Calculator::new();
        enter(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.current_operand, "12");
        assert_eq!(calc.full_equation, "12");

        calc.backspace();
        calc.backspace();
        assert_eq!(calc.current_operand, "0");
        assert_eq!(calc.full_equation, "0");
    }

    #[test]
    fn backspace_rebuilds_equation_with_pending_operation() {
        let mut calc = Calculator::new();
        enter(&mut calc, "12");
        calc.operator(Operation::Add);
        calc.digit('5');
        calc.backspace();

        assert_eq!(calc.current_operand, "0");
        assert_eq!(calc.full_equation, "12 + 0");
    }

    #[test]
    fn digit_then_backspace_round_trips() {
        for start in ["12", "3.5", "10000", "98765432101"] {
            let mut calc = Calculator::new();
            enter(&mut calc, start);
            calc.digit('7');
            calc.backspace();
            assert_eq!(calc.current_operand, start);
        }
    }

    #[test]
    fn clear_resets_from_any_state() {
        let mut calc = Calculator::new();
        calc.clear();
        assert_cleared(&calc);

        enter(&mut calc, "12");
        calc.operator(Operation::Add);
        calc.digit('5');
        calc.equals();
        calc.clear();
        assert_cleared(&calc);

        calc.digit('5');
        calc.operator(Operation::Divide);
        calc.digit('0');
        calc.equals();
        calc.clear();
        assert_cleared(&calc);
        assert_eq!(calc.display(), ("0", ""));
    }

    #[test]
    fn error_state_falls_through_to_normal_handlers() {
        let mut calc = Calculator::new();
        calc.digit('5');
        calc.operator(Operation::Divide);
        calc.digit('0');
        calc.equals();

        calc.digit('7');
        assert_eq!(calc.current_operand, "Error7");
        assert_eq!(calc.full_equation, "Error ÷ Error7");

        let before = calc.clone();
        calc.equals();
        assert_eq!(calc, before);

        calc.clear();
        calc.digit('7');
        assert_eq!(calc.display(), ("7", ""));
    }

    #[test]
    fn operator_after_error_keeps_error_operand() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.operator(Operation::Divide);
        calc.digit('0');
        calc.operator(Operation::Add);

        assert_eq!(calc.current_operand, ERROR_TEXT);
        assert_eq!(calc.full_equation, "Error + ");
        assert_eq!(calc.pending, Some(Operation::Add));
    }

    #[test]
    fn tied_result_rounds_up() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.operator(Operation::Divide);
        enter(&mut calc, "512");
        calc.equals();

        assert_eq!(calc.current_operand, "0.00195313");
        assert_eq!(calc.previous_operand, "1 ÷ 512 =");
    }

    #[test]
    fn overflow_shows_infinity_and_nan_blocks_equals() {
        let mut calc = Calculator::new();
        enter(&mut calc, "999999999999");
        for _ in 0..6 {
            calc.operator(Operation::Multiply);
        }
        assert_eq!(calc.current_operand, "Infinity");
        assert_eq!(calc.full_equation, "Infinity × ");

        // Infinity × Infinity, then Infinity − Infinity
        calc.operator(Operation::Subtract);
        assert_eq!(calc.current_operand, "Infinity");
        calc.operator(Operation::Add);
        assert_eq!(calc.current_operand, "NaN");
        assert_eq!(calc.full_equation, "NaN + ");

        calc.digit('1');
        let before = calc.clone();
        calc.equals();
        assert_eq!(calc, before);
        assert_eq!(calc.display(), ("NaN + 1", ""));
        assert_eq!(calc.pending, Some(Operation::Add));
    }

    #[test]
    fn rejects_nan_but_accepts_infinity_operands() {
        assert_eq!(
            parse_operand("NaN"),
            Err(CalcError::InvalidOperand(String::from("NaN")))
        );
        assert_eq!(parse_operand("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_operand(ERROR_TEXT).is_err());
    }

    #[test]
    fn equation_matches_its_parts_after_every_operation() {
        let mut calc = Calculator::new();
        let check = |calc: &Calculator| match calc.pending {
            None => assert_eq!(calc.full_equation, calc.current_operand),
            Some(op) if !calc.reset_screen => assert_eq!(
                calc.full_equation,
                format!("{}{}{}", calc.left_operand(op), op.symbol(), calc.current_operand)
            ),
            Some(_) => {}
        };

        calc.digit('8');
        check(&calc);
        calc.decimal_point();
        check(&calc);
        calc.digit('2');
        check(&calc);
        calc.operator(Operation::Subtract);
        calc.digit('1');
        check(&calc);
        calc.backspace();
        check(&calc);
        calc.equals();
        check(&calc);
    }
}
