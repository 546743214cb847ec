//! shoplist
//!
//! Shopping lists in the terminal: a model that owns lists, items, users and
//! categories, a mediator that validates user commands, and a ratatui view
//! kept current through observer notifications.
//!
//! Pure core (`model`, `state`, `mediator`) and an impure shell (`source`,
//! `logging`, `view`).

pub mod config;
pub mod logging;
pub mod mediator;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
