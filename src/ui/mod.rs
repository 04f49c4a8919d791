//! Terminal UI: session-driven game view with a column selector, score line,
//! and box-drawing board art sized to the configured grid.

mod app;
mod game_view;

pub use app::App;
