// Library root: session handling and the terminal front end, exposed so the
// integration tests can drive them.

pub mod app;
pub mod protocol;
pub mod tui;
