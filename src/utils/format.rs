//! Formatting utilities for metric values and counts.

/// Format a metric number, dropping the fraction when it is whole
/// (e.g. `68.0` → "68", `42.5` → "42.5").
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a value with its unit (e.g. "68%").
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// Format progress against a target (e.g. "68/100%").
pub fn format_progress(value: f64, target: f64, unit: &str) -> String {
    format!("{}/{}{}", format_number(value), format_number(target), unit)
}

/// Format the visible/total count shown in the browser header.
pub fn format_visible_count(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{} points", total)
    } else {
        format!("{} of {} points", visible, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(68.0), "68");
        assert_eq!(format_number(42.5), "42.5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_format_value_and_progress() {
        assert_eq!(format_value(78.0, "%"), "78%");
        assert_eq!(format_progress(68.0, 100.0, "%"), "68/100%");
        assert_eq!(format_progress(1.5, 4.0, " t"), "1.5/4 t");
    }

    #[test]
    fn test_format_visible_count() {
        assert_eq!(format_visible_count(3, 3), "3 points");
        assert_eq!(format_visible_count(1, 3), "1 of 3 points");
        assert_eq!(format_visible_count(0, 3), "0 of 3 points");
    }
}
