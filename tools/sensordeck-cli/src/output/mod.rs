//! Output formatting for the terminal panel

pub mod live;
