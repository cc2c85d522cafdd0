//! # keymenu
//!
//! ## Overview
//!
//! This crate shows single-keystroke menus in a minibuffer-style prompt. Menus are registered
//! by name in a [MenuRegistry], and a [MenuRunner] shows one as a single line, reads a key, and
//! runs whatever that key is bound to:
//!
//! ```text
//! Buffer ops: [k] Kill, [b] Bury, [q] Quit
//! ```
//!
//! Every menu gets an implicit `[q] Quit` choice. Running without a menu name shows a generated
//! menu listing every registered menu.
//!
//! How the prompt is displayed and how the key is read is up to the host application, through
//! the [Minibuffer] trait. [TerminalMinibuffer] does this on a terminal with [crossterm].
//!
//! ## Example
//!
//! ```
//! use keymenu::{Menu, MenuAction, MenuOutcome, MenuRegistry, MenuResult, MenuRunner, Minibuffer};
//!
//! /// Always picks the second choice.
//! struct Second;
//!
//! impl Minibuffer for Second {
//!     fn read_choice(&mut self, prompt: &str, choices: &[char]) -> MenuResult<char> {
//!         assert_eq!(prompt, "Buffer ops: [k] Kill, [b] Bury, [q] Quit");
//!         Ok(choices[1])
//!     }
//!
//!     fn echo(&mut self, _: &str) -> MenuResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! let buffer = Menu::new("Buffer ops", vec![])
//!     .item('k', "Kill", MenuAction::call(|| println!("killed")))
//!     .item('b', "Bury", MenuAction::call(|| println!("buried")));
//! let registry = MenuRegistry::new().with("buffer-menu", buffer);
//!
//! let mut runner = MenuRunner::new(registry, Second);
//! assert_eq!(runner.run(Some("buffer-menu")).unwrap(), MenuOutcome::Invoked('b'));
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

pub mod errors;
pub mod host;
pub mod menu;
pub mod prompt;
pub mod registry;
pub mod runner;

pub use crossterm;

pub use self::errors::{MenuError, MenuResult};
pub use self::host::{Minibuffer, TerminalMinibuffer};
pub use self::menu::{Menu, MenuAction, MenuCallback, MenuItem};
pub use self::prompt::PromptOptions;
pub use self::registry::MenuRegistry;
pub use self::runner::{MenuCommand, MenuOutcome, MenuRunner};
