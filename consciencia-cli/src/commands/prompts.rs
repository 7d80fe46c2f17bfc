//! Terminal output helpers shared by the interactive commands.

use dialoguer::console::style;
use std::io::{self, Write};

const HEADER_WIDTH: usize = 60;

/// Draws a boxed header with the given title.
pub fn print_header(title: &str) -> io::Result<()> {
    print_header_to(&mut io::stdout(), title)
}

/// Draws a boxed header to a writer (for testing).
pub fn print_header_to<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let border = "─".repeat(HEADER_WIDTH);
    writeln!(w, "┌{}┐", border)?;
    writeln!(w, "│ {:<width$} │", title, width = HEADER_WIDTH - 2)?;
    writeln!(w, "└{}┘", border)?;
    writeln!(w)?;
    Ok(())
}

/// Prints a success message with a green checkmark.
pub fn print_success(message: &str) -> io::Result<()> {
    print_success_to(&mut io::stdout(), message)
}

/// Prints a success message to a writer (for testing).
pub fn print_success_to<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        w,
        "\n{} {}",
        style("✓").green().bold(),
        style(message).green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_header_draws_box_with_title() {
        let mut output = Vec::new();
        print_header_to(&mut output, "CONSCIÊNCIA SEGURA").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains("┌"), "Missing top-left corner");
        assert!(result.contains("┘"), "Missing bottom-right corner");
        assert!(result.contains("CONSCIÊNCIA SEGURA"), "Missing title");
    }

    #[test]
    fn print_header_border_has_fixed_width() {
        let mut output = Vec::new();
        print_header_to(&mut output, "Short").unwrap();
        let result = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = result.lines().collect();
        assert!(lines.len() >= 3, "Header should have at least 3 lines");
        assert_eq!(
            lines[0].chars().filter(|&c| c == '─').count(),
            HEADER_WIDTH
        );
    }

    #[test]
    fn print_success_shows_checkmark() {
        let mut output = Vec::new();
        print_success_to(&mut output, "Avaliação concluída").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains('✓'), "Should contain checkmark");
        assert!(result.contains("Avaliação concluída"));
        assert!(result.ends_with('\n'));
    }
}
