//! Terminal carousel: a configurable deck of text slides with
//! wrap-around navigation, clickable edge buttons, and a dot row
//! mirroring the active slide.

pub mod config;
pub mod logging;
pub mod ui;
