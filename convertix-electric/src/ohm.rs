//! Ohm's law and power relations
//!
//! Plain f64 formulas. Division by a zero current or resistance follows
//! IEEE semantics (inf or NaN); callers that need a hard error go through
//! `solve_ohms_law` or the plugin functions.

use serde::Serialize;
use thiserror::Error;

/// V = I * R
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// I = V / R
pub fn current(voltage: f64, resistance: f64) -> f64 {
    voltage / resistance
}

/// R = V / I
pub fn resistance(voltage: f64, current: f64) -> f64 {
    voltage / current
}

/// P = V * I
pub fn power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// P = I² * R
pub fn power_from_current_resistance(current: f64, resistance: f64) -> f64 {
    current * current * resistance
}

/// P = V² / R
pub fn power_from_voltage_resistance(voltage: f64, resistance: f64) -> f64 {
    voltage * voltage / resistance
}

/// A fully determined resistive circuit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circuit {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OhmsLawError {
    #[error("exactly two of voltage, current and resistance are required, got {0}")]
    WrongArity(usize),

    #[error("{0} must be non-zero")]
    ZeroDivisor(&'static str),
}

/// Derive the missing quantity and the power from any two of V, I, R
pub fn solve_ohms_law(
    voltage_v: Option<f64>,
    current_a: Option<f64>,
    resistance_ohm: Option<f64>,
) -> Result<Circuit, OhmsLawError> {
    let (v, i, r) = match (voltage_v, current_a, resistance_ohm) {
        (None, Some(i), Some(r)) => (voltage(i, r), i, r),
        (Some(v), None, Some(r)) => {
            if r == 0.0 {
                return Err(OhmsLawError::ZeroDivisor("resistance"));
            }
            (v, current(v, r), r)
        }
        (Some(v), Some(i), None) => {
            if i == 0.0 {
                return Err(OhmsLawError::ZeroDivisor("current"));
            }
            (v, i, resistance(v, i))
        }
        (v, i, r) => {
            let given = [v, i, r].iter().filter(|x| x.is_some()).count();
            return Err(OhmsLawError::WrongArity(given));
        }
    };

    Ok(Circuit {
        voltage: v,
        current: i,
        resistance: r,
        power: power(v, i),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voltage() {
        assert_eq!(voltage(2.0, 5.0), 10.0);
    }

    #[test]
    fn test_current_and_resistance() {
        assert_eq!(current(10.0, 5.0), 2.0);
        assert_eq!(resistance(10.0, 2.0), 5.0);
    }

    #[test]
    fn test_power_forms_agree() {
        let (v, i, r) = (12.0, 0.5, 24.0);
        assert_eq!(power(v, i), 6.0);
        assert_eq!(power_from_current_resistance(i, r), 6.0);
        assert_eq!(power_from_voltage_resistance(v, r), 6.0);
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        assert!(current(5.0, 0.0).is_infinite());
        assert!(resistance(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_solve_each_missing_quantity() {
        let c = solve_ohms_law(None, Some(2.0), Some(5.0)).unwrap();
        assert_eq!(c.voltage, 10.0);
        assert_eq!(c.power, 20.0);

        let c = solve_ohms_law(Some(10.0), None, Some(5.0)).unwrap();
        assert_eq!(c.current, 2.0);

        let c = solve_ohms_law(Some(10.0), Some(2.0), None).unwrap();
        assert_eq!(c.resistance, 5.0);
        assert_eq!(c.power, 20.0);
    }

    #[test]
    fn test_solve_rejects_zero_divisor() {
        assert_eq!(
            solve_ohms_law(Some(10.0), None, Some(0.0)),
            Err(OhmsLawError::ZeroDivisor("resistance"))
        );
        assert_eq!(
            solve_ohms_law(Some(10.0), Some(0.0), None),
            Err(OhmsLawError::ZeroDivisor("current"))
        );
    }

    #[test]
    fn test_solve_wrong_arity() {
        assert_eq!(solve_ohms_law(Some(1.0), None, None), Err(OhmsLawError::WrongArity(1)));
        assert_eq!(solve_ohms_law(Some(1.0), Some(1.0), Some(1.0)), Err(OhmsLawError::WrongArity(3)));
        assert_eq!(solve_ohms_law(None, None, None), Err(OhmsLawError::WrongArity(0)));
    }
}
