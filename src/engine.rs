//! Calculator engine — the input state machine behind the button grid.
//!
//! Holds the visible display string, the operand captured when an operator
//! was pressed, and a flag deciding whether the next digit starts a fresh
//! number. Chained operations apply left-to-right with no precedence:
//! 2 + 3 * 4 evaluates as (2 + 3) * 4. That is intended behavior.
//!
//! No egui types in here; the UI feeds events in and reads the display back.

use thiserror::Error;

/// A binary arithmetic operator awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// One button press, as the engine sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
}

/// Terminal error states. The `Display` impls are exactly the strings the
/// user sees; once latched, only `Clear` gets the engine out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Error: Div by 0")]
    DivisionByZero,
    #[error("Error")]
    Parse,
}

pub struct Engine {
    display: String,
    pending_operand: f64,
    pending_operator: Option<Operator>,
    awaiting_operand: bool,
    error: Option<CalcError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: 0.0,
            pending_operator: None,
            awaiting_operand: true,
            error: None,
        }
    }

    /// The text the UI shows: the current number, or an error literal.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Feed one input event through the state machine.
    ///
    /// While an error is latched every event except `Clear` is ignored.
    pub fn handle_event(&mut self, event: Event) {
        if self.error.is_some() && event != Event::Clear {
            return;
        }
        match event {
            Event::Digit(d) => self.append_digit(d),
            Event::DecimalPoint => self.append_decimal(),
            Event::Operator(op) => self.set_operator(op),
            Event::Equals => self.equals(),
            Event::Clear => self.clear(),
        }
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.error = None;
    }

    fn append_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        let ch = char::from(b'0' + digit % 10);
        if self.awaiting_operand {
            self.display = ch.to_string();
            self.awaiting_operand = false;
        } else {
            // String concatenation, not numeric: "00" then "007" is fine.
            self.display.push(ch);
        }
    }

    fn append_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn set_operator(&mut self, op: Operator) {
        // An operator pressed mid-expression settles the previous one first;
        // pressed right after another operator it just replaces it.
        if self.pending_operator.is_some() && !self.awaiting_operand {
            self.compute();
            if self.error.is_some() {
                return;
            }
        }
        match parse_number(&self.display) {
            Ok(value) => {
                self.pending_operand = value;
                self.pending_operator = Some(op);
                self.awaiting_operand = true;
            }
            Err(err) => self.latch_error(err),
        }
    }

    fn equals(&mut self) {
        if self.pending_operator.is_some() && !self.awaiting_operand {
            self.compute();
            self.pending_operator = None;
        }
    }

    /// Apply the pending operator to (pending_operand, display). On success
    /// the formatted result becomes both the display and the operand for the
    /// next operation; on failure the error is latched.
    fn compute(&mut self) {
        let op = match self.pending_operator {
            Some(op) => op,
            None => return,
        };
        match self.eval(op) {
            Ok(result) => {
                self.display = format_number(result);
                self.pending_operand = result;
                self.awaiting_operand = true;
            }
            Err(err) => self.latch_error(err),
        }
    }

    fn eval(&self, op: Operator) -> Result<f64, CalcError> {
        let second = parse_number(&self.display)?;
        match op {
            Operator::Add => Ok(self.pending_operand + second),
            Operator::Subtract => Ok(self.pending_operand - second),
            Operator::Multiply => Ok(self.pending_operand * second),
            Operator::Divide => {
                if second == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(self.pending_operand / second)
                }
            }
        }
    }

    fn latch_error(&mut self, err: CalcError) {
        self.display = err.to_string();
        self.pending_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.error = Some(err);
    }
}

fn parse_number(s: &str) -> Result<f64, CalcError> {
    s.parse().map_err(|_| CalcError::Parse)
}

/// Whole-number results render as integer literals for a cleaner look;
/// everything else uses the default f64 formatting.
fn format_number(value: f64) -> String {
    let truncated = value as i64;
    if truncated as f64 == value {
        format!("{}", truncated)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(engine: &mut Engine, events: &[Event]) {
        for &event in events {
            engine.handle_event(event);
        }
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Engine::new().display_text(), "0");
    }

    #[test]
    fn test_digit_concatenation() {
        let mut e = Engine::new();
        press(&mut e, &[Event::Digit(1), Event::Digit(2), Event::Digit(3)]);
        assert_eq!(e.display_text(), "123");
    }

    #[test]
    fn test_leading_zeros_concatenate() {
        // Plain string concatenation: "0" "0" "7" really is "007"
        let mut e = Engine::new();
        press(&mut e, &[Event::Digit(0), Event::Digit(0), Event::Digit(7)]);
        assert_eq!(e.display_text(), "007");
    }

    #[test]
    fn test_decimal_point_is_idempotent() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(1),
                Event::DecimalPoint,
                Event::Digit(5),
                Event::DecimalPoint,
                Event::Digit(2),
            ],
        );
        assert_eq!(e.display_text(), "1.52");
    }

    #[test]
    fn test_decimal_point_starts_fresh_number() {
        let mut e = Engine::new();
        e.handle_event(Event::DecimalPoint);
        assert_eq!(e.display_text(), "0.");
        e.handle_event(Event::Digit(5));
        assert_eq!(e.display_text(), "0.5");
    }

    #[test]
    fn test_addition() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(2),
                Event::Operator(Operator::Add),
                Event::Digit(3),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "5");
    }

    #[test]
    fn test_subtraction_below_zero() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(2),
                Event::Operator(Operator::Subtract),
                Event::Digit(5),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "-3");
    }

    #[test]
    fn test_chained_operators_left_to_right() {
        // 2 + 3 * 4 = (2 + 3) * 4, no precedence
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(2),
                Event::Operator(Operator::Add),
                Event::Digit(3),
                Event::Operator(Operator::Multiply),
                Event::Digit(4),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "20");
    }

    #[test]
    fn test_whole_result_renders_without_decimal_point() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(4),
                Event::Operator(Operator::Divide),
                Event::Digit(2),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "2");
    }

    #[test]
    fn test_fractional_result_default_formatting() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(1),
                Event::Operator(Operator::Divide),
                Event::Digit(4),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "0.25");
    }

    #[test]
    fn test_division_by_zero_latches_until_clear() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(5),
                Event::Operator(Operator::Divide),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "Error: Div by 0");

        // Everything but Clear is ignored now
        press(
            &mut e,
            &[Event::Digit(7), Event::DecimalPoint, Event::Equals],
        );
        assert_eq!(e.display_text(), "Error: Div by 0");

        e.handle_event(Event::Clear);
        assert_eq!(e.display_text(), "0");
        e.handle_event(Event::Digit(7));
        assert_eq!(e.display_text(), "7");
    }

    #[test]
    fn test_clear_resets_mid_expression() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(9),
                Event::Operator(Operator::Add),
                Event::Digit(1),
                Event::Clear,
            ],
        );
        assert_eq!(e.display_text(), "0");

        // No stale pending operator survives the reset
        press(&mut e, &[Event::Digit(3), Event::Equals]);
        assert_eq!(e.display_text(), "3");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut e = Engine::new();
        press(&mut e, &[Event::Digit(7), Event::Equals]);
        assert_eq!(e.display_text(), "7");
    }

    #[test]
    fn test_equals_while_awaiting_operand_is_noop() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[Event::Digit(5), Event::Operator(Operator::Add), Event::Equals],
        );
        assert_eq!(e.display_text(), "5");

        // The operator is still pending and applies once an operand arrives
        press(&mut e, &[Event::Digit(3), Event::Equals]);
        assert_eq!(e.display_text(), "8");
    }

    #[test]
    fn test_operator_replaces_pending_without_compute() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(5),
                Event::Operator(Operator::Add),
                Event::Operator(Operator::Multiply),
                Event::Digit(3),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "15");
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::Digit(2),
                Event::Operator(Operator::Add),
                Event::Digit(3),
                Event::Equals,
                Event::Operator(Operator::Add),
                Event::Digit(1),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "15");
    }

    #[test]
    fn test_decimal_arithmetic() {
        // 0.5 + 0.25 comes out exact in binary
        let mut e = Engine::new();
        press(
            &mut e,
            &[
                Event::DecimalPoint,
                Event::Digit(5),
                Event::Operator(Operator::Add),
                Event::DecimalPoint,
                Event::Digit(2),
                Event::Digit(5),
                Event::Equals,
            ],
        );
        assert_eq!(e.display_text(), "0.75");
    }

    #[test]
    fn test_parse_failure_latches_until_clear() {
        // Not reachable through events (the display always holds a valid
        // number), so corrupt it directly to exercise the defensive path.
        let mut e = Engine::new();
        press(&mut e, &[Event::Digit(5), Event::Operator(Operator::Add)]);
        e.display = "not a number".to_string();
        e.awaiting_operand = false;
        e.handle_event(Event::Equals);
        assert_eq!(e.display_text(), "Error");

        e.handle_event(Event::Digit(1));
        assert_eq!(e.display_text(), "Error");
        e.handle_event(Event::Clear);
        assert_eq!(e.display_text(), "0");
    }
}
