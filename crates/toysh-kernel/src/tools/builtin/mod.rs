//! Built-in tools for toysh.

mod cd;
mod chmod;
mod clear;
mod date;
mod help;
mod ls;
mod mkdir;
mod rm;
mod shutdown;

pub use clear::CLEAR_SCREEN;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(ls::Ls);
    registry.register(mkdir::Mkdir);
    registry.register(rm::Rm);
    registry.register(cd::Cd);
    registry.register(chmod::Chmod);
    registry.register(date::Date);
    registry.register(clear::Clear);
    registry.register(shutdown::Shutdown);
    registry.register(help::Help);
}
