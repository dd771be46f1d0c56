//! Colored terminal output for icon generation
//!
//! Provides consistent, colored CLI output with proper formatting

use std::io::{self, Write};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    /// Create a new output manager writing to stdout
    pub fn new() -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
        }
    }

    fn emit(&self, symbol: &str, symbol_color: ColorSpec, message: &str) {
        let mut buffer = self.bufwtr.buffer();
        let _ = write_line(&mut buffer, symbol, &symbol_color, None, message);
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        self.emit("ℹ", ColorSpec::new().set_fg(Some(Color::Cyan)).clone(), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.emit(
            "✓",
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true).clone(),
            message,
        );
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        let mut buffer = self.bufwtr.buffer();
        let _ = write_line(
            &mut buffer,
            "⚠",
            ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true),
            Some(ColorSpec::new().set_fg(Some(Color::Yellow))),
            message,
        );
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print an error message to stderr, falling back to stdout
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let written = write_line(
            &mut buffer,
            "✗",
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
            Some(ColorSpec::new().set_fg(Some(Color::Red))),
            message,
        )
        .and_then(|()| stderr.print(&buffer));

        if written.is_err() {
            println!("✗ {}", message);
        }
    }

    /// Print a progress message
    pub fn progress(&self, message: &str) {
        self.emit("⋯", ColorSpec::new().set_fg(Some(Color::Magenta)).clone(), message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer);
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = writeln!(&mut buffer, "═══ {} ═══", title);
        let _ = buffer.reset();
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "    {}", message);
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print a plain message
    pub fn println(&self, message: &str) {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "{}", message);
        let _ = self.bufwtr.print(&buffer);
    }
}

/// Write `<symbol> <message>` with the symbol and optionally the message colored.
fn write_line(
    out: &mut impl WriteColor,
    symbol: &str,
    symbol_color: &ColorSpec,
    message_color: Option<&mut ColorSpec>,
    message: &str,
) -> io::Result<()> {
    out.set_color(symbol_color)?;
    write!(out, "{symbol}")?;
    out.reset()?;
    if let Some(color) = message_color {
        out.set_color(color)?;
    }
    writeln!(out, " {}", message)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn test_plain_line_layout() {
        let mut buffer = Buffer::no_color();
        write_line(
            &mut buffer,
            "✗",
            ColorSpec::new().set_fg(Some(Color::Red)),
            Some(ColorSpec::new().set_fg(Some(Color::Red))),
            "Fatal error: Logo not found at logo/clash-chain-patcher.png",
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buffer.into_inner()).unwrap(),
            "✗ Fatal error: Logo not found at logo/clash-chain-patcher.png\n"
        );
    }

    #[test]
    fn test_ansi_line_keeps_message_contiguous() {
        let mut buffer = Buffer::ansi();
        write_line(
            &mut buffer,
            "⚠",
            ColorSpec::new().set_fg(Some(Color::Yellow)),
            None,
            "Note: .icns can only be generated on macOS",
        )
        .unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains(" Note: .icns can only be generated on macOS\n"));
        assert!(text.starts_with("\x1b["));
    }
}
