//! Child process execution and platform helpers.

pub mod command;
pub mod interrupt;
pub mod mock;
pub mod platform;

pub use command::{ChildExit, CommandResult, ProcessRunner, ProcessSpec, SystemRunner};
pub use interrupt::InterruptFlag;
pub use mock::MockRunner;
pub use platform::{is_ci, is_executable, parse_system_path, resolve_tool_path};
