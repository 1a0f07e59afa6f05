//! UI layer
//!
//! Contains the placeholder view, its components and layout primitives,
//! widgets, symbols, and theme definitions.

pub mod components;
pub mod layout;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
