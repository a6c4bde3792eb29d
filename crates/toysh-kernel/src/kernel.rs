//! The kernel: the heart of toysh.
//!
//! The Kernel owns and coordinates all core components:
//! - Tool registry (builtins)
//! - Execution context (filesystem, working path, clock)
//! - User table and the logged-in user
//! - Session state (authenticating, running, terminated)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Kernel                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ ToolRegistry │  │ ExecContext  │  │ UserTable  │  │
//! │  │  (builtins)  │  │ (tree, cwd,  │  │  (logins)  │  │
//! │  │              │  │  clock)      │  │            │  │
//! │  └──────────────┘  └──────────────┘  └────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A session moves through three states:
//!
//! ```text
//! Authenticating --login()--> Running --shutdown--> Terminated
//! ```

use crate::parser::parse_line;
use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, ExecOptions, ModeCheck, ToolArgs, ToolRegistry, register_builtins};
use crate::users::{AuthError, User, UserSpec, UserTable};
use crate::vfs::{ResolveMode, Tree};

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Start with the demo layout instead of an empty root.
    pub populate: bool,
    /// What to do with unresolvable working path segments.
    pub resolve_mode: ResolveMode,
    /// What `chmod` does with modes outside `0..=7`.
    pub mode_check: ModeCheck,
    /// Accounts accepted at login.
    pub users: Vec<UserSpec>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            hostname: "desktop".to_string(),
            populate: true,
            resolve_mode: ResolveMode::Lenient,
            mode_check: ModeCheck::Strict,
            users: UserTable::default_specs(),
        }
    }
}

impl KernelConfig {
    /// Fail on unresolvable path segments as well as bad modes.
    pub fn strict() -> Self {
        Self {
            resolve_mode: ResolveMode::Strict,
            ..Self::default()
        }
    }

    /// Start from an empty root directory.
    pub fn empty() -> Self {
        Self {
            populate: false,
            ..Self::default()
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }
}

/// Where a session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Authenticating,
    Running,
    Terminated,
}

/// Runs toysh command lines for one session.
pub struct Kernel {
    hostname: String,
    tools: ToolRegistry,
    ctx: ExecContext,
    users: UserTable,
    current_user: Option<User>,
    state: ShellState,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    pub fn new(config: KernelConfig) -> Self {
        let tree = if config.populate {
            Tree::populate_demo()
        } else {
            Tree::new()
        };

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        let options = ExecOptions {
            resolve_mode: config.resolve_mode,
            mode_check: config.mode_check,
        };
        let mut ctx = ExecContext::with_options(tree, options);
        ctx.set_tool_schemas(tools.schemas());

        tracing::debug!(hostname = %config.hostname, ?options, tools = tools.len(), "kernel created");

        Self {
            hostname: config.hostname,
            tools,
            ctx,
            users: UserTable::new(&config.users),
            current_user: None,
            state: ShellState::Authenticating,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Check credentials and start the session.
    ///
    /// On failure the kernel stays in [`ShellState::Authenticating`] and
    /// may be asked again any number of times.
    pub fn login(&mut self, login: &str, password: &str) -> Result<&User, AuthError> {
        if self.state != ShellState::Authenticating {
            return Err(AuthError::NotExpected);
        }
        match self.users.authenticate(login, password) {
            Ok(user) => {
                tracing::info!(login = user.login(), superuser = user.is_superuser(), "login");
                self.state = ShellState::Running;
                Ok(&*self.current_user.insert(user.clone()))
            }
            Err(e) => {
                tracing::warn!(%login, "failed login");
                Err(e)
            }
        }
    }

    /// `<login>@<hostname>:<cwd>$ `
    pub fn prompt(&self) -> String {
        let login = self.current_user.as_ref().map(User::login).unwrap_or("");
        format!("{}@{}:{}$ ", login, self.hostname, self.ctx.cwd)
    }

    /// Parse and run one input line. Blank lines do nothing.
    pub async fn execute_line(&mut self, line: &str) -> ExecResult {
        match parse_line(line) {
            Some(args) => self.execute(args).await,
            None => ExecResult::default(),
        }
    }

    /// Run already-parsed arguments.
    pub async fn execute(&mut self, args: ToolArgs) -> ExecResult {
        match self.state {
            ShellState::Running => {}
            ShellState::Authenticating => {
                return ExecResult::failure(EXIT_FAILURE, "not logged in\n");
            }
            ShellState::Terminated => {
                return ExecResult::failure(EXIT_FAILURE, "system is shut down\n");
            }
        }

        let result = self.tools.dispatch(args, &mut self.ctx).await;

        if self.ctx.shutdown_requested() {
            tracing::info!("shutdown");
            self.state = ShellState::Terminated;
        }
        result
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn ctx(&self) -> &ExecContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut ExecContext {
        &mut self.ctx
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("hostname", &self.hostname)
            .field("state", &self.state)
            .field("user", &self.current_user)
            .field("cwd", &self.ctx.cwd.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Kernel {
        let mut kernel = Kernel::default();
        kernel.login("user", "12345678").unwrap();
        kernel
    }

    #[test]
    fn starts_authenticating() {
        let kernel = Kernel::default();
        assert_eq!(kernel.state(), ShellState::Authenticating);
        assert!(kernel.current_user().is_none());
    }

    #[test]
    fn failed_login_stays_authenticating() {
        let mut kernel = Kernel::default();
        for _ in 0..3 {
            assert_eq!(kernel.login("root", "nope").unwrap_err(), AuthError::InvalidLogin);
        }
        assert_eq!(kernel.state(), ShellState::Authenticating);
    }

    #[test]
    fn login_starts_session() {
        let mut kernel = Kernel::default();
        let user = kernel.login("root", "12345678").unwrap();
        assert!(user.is_superuser());
        assert!(kernel.is_running());
        assert_eq!(kernel.login("root", "12345678").unwrap_err(), AuthError::NotExpected);
    }

    #[test]
    fn prompt_shows_user_host_and_path() {
        let mut kernel = logged_in();
        assert_eq!(kernel.prompt(), "user@desktop:/$ ");
        kernel.ctx_mut().go_into("usr");
        kernel.ctx_mut().go_into("bin");
        assert_eq!(kernel.prompt(), "user@desktop:/usr/bin$ ");
    }

    #[test]
    fn hostname_is_configurable() {
        let mut kernel = Kernel::new(KernelConfig::default().with_hostname("laptop"));
        kernel.login("root", "12345678").unwrap();
        assert_eq!(kernel.prompt(), "root@laptop:/$ ");
    }

    #[test]
    fn every_builtin_is_registered() {
        let kernel = Kernel::default();
        assert_eq!(
            kernel.tools().names(),
            ["cd", "chmod", "clear", "date", "help", "ls", "mkdir", "rm", "shutdown"]
        );
    }

    #[tokio::test]
    async fn commands_need_a_session() {
        let mut kernel = Kernel::default();
        let result = kernel.execute_line("mkdir x").await;
        assert_eq!(result.err, "not logged in\n");
        let root = kernel.ctx().tree.root();
        assert!(kernel.ctx().tree.find_child(root, "x", None).is_none());
    }

    #[tokio::test]
    async fn shutdown_terminates() {
        let mut kernel = logged_in();
        let result = kernel.execute_line("shutdown").await;
        assert!(result.ok());
        assert_eq!(kernel.state(), ShellState::Terminated);

        let after = kernel.execute_line("ls").await;
        assert!(!after.ok());
        assert_eq!(after.err, "system is shut down\n");
    }

    #[tokio::test]
    async fn blank_line_is_noop() {
        let mut kernel = logged_in();
        let result = kernel.execute_line("   ").await;
        assert!(result.ok());
        assert!(result.is_silent());
    }

    #[tokio::test]
    async fn unknown_command() {
        let mut kernel = logged_in();
        let result = kernel.execute_line("frobnicate --now").await;
        assert_eq!(result.code, 127);
        assert_eq!(result.err, "command not found: frobnicate\n");
        assert!(kernel.is_running());
    }

    #[tokio::test]
    async fn empty_config_has_empty_root() {
        let mut kernel = Kernel::new(KernelConfig::empty());
        kernel.login("root", "12345678").unwrap();
        let result = kernel.execute_line("ls -l").await;
        assert_eq!(result.out, "total 0\n");
    }
}
