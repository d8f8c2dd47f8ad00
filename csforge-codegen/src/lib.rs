//! Text emission primitives for csforge.
//!
//! This crate knows nothing about C# declarations. It provides the pieces the
//! declaration crate renders through:
//!
//! - [`builder`] - [`CodeBuilder`], [`CodeFragment`], [`Renderable`] and [`Indent`]
//! - [`format`] - the idempotent [`Formatter`] applied to rendered text

pub mod builder;
pub mod format;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use format::{Formatter, format};
