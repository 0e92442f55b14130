mod commands;
mod render;
mod setup;
mod tokenize;

pub use commands::run;
