//! Interactive presentation layer: the main window, the job dialog and
//! the pieces they share.

pub mod console;
pub mod dialog;
pub mod grid;
pub mod messages;
pub mod window;

pub use console::TerminalConsole;
pub use window::MainWindow;
