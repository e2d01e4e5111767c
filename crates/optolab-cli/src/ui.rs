//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Styled result line: bold label, green value.
#[must_use]
pub fn result_line(label: &str, value: &str) -> String {
    if is_color_disabled() {
        format!("{label}: {value}")
    } else {
        format!("{}: {}", style(label).bold(), style(value).green())
    }
}

/// Dimmed secondary text, used for captions.
#[must_use]
pub fn muted(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("OptoSim Lab").contains("OptoSim Lab"));
    }

    #[test]
    fn result_line_contains_both_parts() {
        let line = result_line("Transmitted Intensity", "0.50");
        assert!(line.contains("Transmitted Intensity"));
        assert!(line.contains("0.50"));
    }

    #[test]
    fn muted_keeps_text() {
        assert!(muted("caption").contains("caption"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }

    #[test]
    fn helpers_with_unicode() {
        assert!(header("LED: Bandgap \u{2192} Wavelength").contains('\u{2192}'));
        assert!(result_line("Current (\u{b5}A)", "-10.00").contains('\u{b5}'));
    }
}
