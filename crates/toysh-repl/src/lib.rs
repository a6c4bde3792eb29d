//! toysh REPL: the interactive front end of the toy operating system.
//!
//! A session goes:
//!
//! - Boot screen (optional, see [`boot`])
//! - `login:` / `password:` until the credentials match
//! - `<user>@<host>:<path>$ ` prompt until `shutdown` or end of input

pub mod boot;
pub mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use toysh_kernel::{Kernel, KernelConfig, ShellState};

pub use config::ReplConfig;

/// One shell session over a kernel.
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(config: KernelConfig) -> Self {
        Self {
            kernel: Kernel::new(config),
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn is_authenticating(&self) -> bool {
        self.kernel.state() == ShellState::Authenticating
    }

    pub fn is_terminated(&self) -> bool {
        self.kernel.state() == ShellState::Terminated
    }

    pub fn prompt(&self) -> String {
        self.kernel.prompt()
    }

    /// Try one login. Returns the message to show on failure.
    pub fn login(&mut self, login: &str, password: &str) -> Option<String> {
        match self.kernel.login(login, password) {
            Ok(_) => None,
            Err(e) => Some(format!("{e}\n")),
        }
    }

    /// Process a single line of input.
    ///
    /// Returns everything the command printed, errors included, or `None`
    /// if it printed nothing.
    pub async fn process_line(&mut self, line: &str) -> Option<String> {
        let result = self.kernel.execute_line(line).await;
        let text = result.combined();
        if text.is_empty() { None } else { Some(text) }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

/// What a read from the terminal produced.
enum Input {
    Line(String),
    Interrupted,
    Closed,
}

fn read(rl: &mut Editor<(), DefaultHistory>, prompt: &str) -> Result<Input> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
        Err(ReadlineError::Eof) => Ok(Input::Closed),
        Err(err) => Err(anyhow::anyhow!("Failed to read input: {err}")),
    }
}

/// Prompt until the credentials match. Returns `false` if input ended.
fn authenticate(rl: &mut Editor<(), DefaultHistory>, repl: &mut Repl) -> Result<bool> {
    while repl.is_authenticating() {
        let login = match read(rl, "login: ")? {
            Input::Line(line) => line,
            Input::Interrupted => continue,
            Input::Closed => return Ok(false),
        };
        let password = match read(rl, "password: ")? {
            Input::Line(line) => line,
            Input::Interrupted => continue,
            Input::Closed => return Ok(false),
        };
        if let Some(message) = repl.login(login.trim_end(), password.trim_end()) {
            print!("{message}");
        }
    }
    Ok(true)
}

/// Run the REPL.
pub fn run(config: ReplConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to create runtime")?;

    if config.boot {
        let machine = boot::Machine::desktop();
        runtime
            .block_on(boot::boot(&machine, &mut io::stdout(), config.boot_pacing))
            .context("Failed to write boot sequence")?;
    }

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history_path = config.history_path();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    let mut repl = Repl::new(config.kernel_config());

    if authenticate(&mut rl, &mut repl)? {
        while !repl.is_terminated() {
            let line = match read(&mut rl, &repl.prompt())? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Closed => break,
            };

            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.as_str());
            }

            if let Some(output) = runtime.block_on(repl.process_line(&line)) {
                print!("{output}");
                io::stdout().flush().context("Failed to flush output")?;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
