//! Pseudo-terminal helpers

pub mod winsize;

pub use winsize::{resize_pty, to_winsize_dimension, winsize_from_term_size, TermSize, Winsize};
