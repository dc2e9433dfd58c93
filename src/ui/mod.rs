pub(crate) mod app;
pub(crate) mod commands;
pub(crate) mod notification;
pub(crate) mod panels;
pub(crate) mod render;
pub(crate) mod theme;
pub(crate) mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;
