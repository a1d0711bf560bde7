pub(crate) mod compose;
pub(crate) mod context;
pub(crate) mod debug;
pub(crate) mod generate;
/// Event-driven sketch host API.
pub mod sketch;
