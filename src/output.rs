//! CLI output formatting and the quiet flag.
//!
//! Format functions are pure — no I/O, no side effects — so they can be
//! unit tested; [`Console`] does the printing. The quiet flag lives in the
//! `Console` value threaded through each operation rather than in process
//! globals. Informational lines go to stdout and honor the flag; error
//! lines go to stderr unconditionally.

/// Printing handle carrying the verbosity choice.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Informational line; suppressed by `--silence`.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Error line; never suppressed.
    pub fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// One generated derivative: `  xhdpi: 96x96 -> ../drawable-xhdpi/icon.png`.
pub fn format_derivative_line(label: &str, width: u32, height: u32, output: &str) -> String {
    format!("  {label}: {width}x{height} -> {output}")
}

/// Header for a file entering derivative generation.
pub fn format_file_header(file_name: &str, width: u32, height: u32) -> String {
    format!("Resizing file: {file_name} ({width}x{height})")
}

/// A file skipped by an eligibility gate, with the reason.
pub fn format_skip_line(file_name: &str, reason: &str) -> String {
    format!("Skipping {file_name}: {reason}")
}

/// A per-file failure inside a batch.
pub fn format_file_error(file_name: &str, error: &str) -> String {
    format!("Failed {file_name}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_line_shape() {
        assert_eq!(
            format_derivative_line("xxhdpi", 144, 144, "../drawable-xxhdpi/icon.png"),
            "  xxhdpi: 144x144 -> ../drawable-xxhdpi/icon.png"
        );
    }

    #[test]
    fn file_header_shape() {
        assert_eq!(
            format_file_header("icon@3x.png", 300, 300),
            "Resizing file: icon@3x.png (300x300)"
        );
    }

    #[test]
    fn skip_line_shape() {
        assert_eq!(
            format_skip_line("button.9.png", "NinePatch files are never resized"),
            "Skipping button.9.png: NinePatch files are never resized"
        );
    }

    #[test]
    fn file_error_shape() {
        assert_eq!(
            format_file_error("broken.png", "decode failed"),
            "Failed broken.png: decode failed"
        );
    }
}
