//! Terminal snake on a wrap-around grid.
//!
//! The game core ([`game`], [`snake`], [`grid`]) never touches the terminal
//! directly; everything on screen goes through the [`term::Screen`] trait and
//! all timing through [`clock::Clock`], so the whole loop can be driven by
//! fakes in tests.

pub mod app;
pub mod clock;
pub mod consts;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

#[cfg(test)]
mod testing;

pub type TermInt = u16;
pub type Coords = (u16, u16);
