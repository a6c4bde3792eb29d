//! ExecResult: the outcome of every command.
//!
//! Commands never print directly. They hand back what they would have
//! written (`out`), any diagnostic (`err`) and an exit code; the front end
//! decides where the text goes.

/// Exit code for a command that ran but reported a problem.
pub const EXIT_FAILURE: i64 = 1;

/// Exit code for a program name with no registered tool.
pub const EXIT_NOT_FOUND: i64 = 127;

/// The result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Regular output.
    pub out: String,
    /// Diagnostic text, already prefixed with the program name where relevant.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a result from both streams.
    pub fn from_output(code: i64, out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            code,
            out: out.into(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// True if neither stream has anything to show.
    pub fn is_silent(&self) -> bool {
        self.out.is_empty() && self.err.is_empty()
    }

    /// Output followed by diagnostics, the way a terminal would show them.
    pub fn combined(&self) -> String {
        let mut text = self.out.clone();
        text.push_str(&self.err);
        text
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
