//! Output formatting

use console::style;
use keypad_calc::driver::KeyStep;
use keypad_calc::keys::Key;
use std::io::Write;

/// Formats calculator output for the terminal
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub const fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }

    /// Render the final display line
    #[must_use]
    pub fn display_line(&self, display: &str) -> String {
        if self.use_color {
            style(display).bold().to_string()
        } else {
            display.to_string()
        }
    }

    /// Render one traced key step
    #[must_use]
    pub fn step_line(&self, step: &KeyStep) -> String {
        let label = format!("{:>3}", step.key.label());
        if self.use_color {
            format!("{}  {}", style(label).cyan(), step.display)
        } else {
            format!("{label}  {}", step.display)
        }
    }

    /// Render the key binding table
    #[must_use]
    pub fn binding_table(&self) -> Vec<String> {
        Key::BINDINGS
            .iter()
            .map(|(chars, action)| {
                let chars = format!("{chars:<8}");
                if self.use_color {
                    format!("{}{action}", style(chars).green())
                } else {
                    format!("{chars}{action}")
                }
            })
            .collect()
    }

    /// Write the display
    pub fn write_display(&self, out: &mut impl Write, display: &str) -> std::io::Result<()> {
        writeln!(out, "{}", self.display_line(display))
    }

    /// Write traced steps, skipped in quiet mode
    pub fn write_steps(&self, out: &mut impl Write, steps: &[KeyStep]) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for step in steps {
            writeln!(out, "{}", self.step_line(step))?;
        }
        Ok(())
    }

    /// Write a warning to stderr, skipped in quiet mode
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("!").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        eprintln!("{prefix} {message}");
    }
}
