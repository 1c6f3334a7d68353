//! A small clipping window compositor drawing into one shared pixel buffer.
//!
//! Windows form a tree with z-ordered siblings. Every paint is restricted to
//! the part of a window nobody covers, and moves repaint only what they
//! expose, so the buffer stays correct without a full redraw.

pub mod canvas;
pub mod components;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod font;
pub mod rect;
pub mod region;
pub mod runner;
pub mod term_color;
pub mod theme;
pub mod tracing_sub;
pub mod window;
