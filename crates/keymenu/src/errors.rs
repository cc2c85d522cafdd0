//! # Error Types
//!
//! ## Overview
//!
//! Failures that stop a menu from being shown or a choice from being read. Quitting a menu
//! or running with no menus configured are not errors; see [MenuOutcome](crate::MenuOutcome).

/// Errors returned while running a menu.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum MenuError {
    /// Failure during Input/Output.
    #[error("Input/Output Error: {0}")]
    IOError(#[from] std::io::Error),

    /// The user interrupted the prompt instead of choosing an item.
    #[error("Interrupted")]
    Interrupted,

    /// There are more registered menus than selector keys for the menu of menus.
    #[error("Too many menus to assign selector keys: {0}")]
    TooManyMenus(usize),
}

/// Common result type for menu operations.
pub type MenuResult<V> = Result<V, MenuError>;
