//! # Prompt rendering
//!
//! ## Overview
//!
//! Menus are shown as a single line in the minibuffer, with the title followed by each choice:
//!
//! ```text
//! Buffer ops: [k] Kill, [b] Bury, [q] Quit
//! ```
//!
//! The quit choice isn't part of any [Menu]; it's added here when rendering. The punctuation,
//! the quit choice and the status messages can all be changed through [PromptOptions].
use std::borrow::Cow;

use textwrap::wrap;

use crate::menu::{Menu, MenuAction, MenuItem};

/// Text and keys used when showing menus.
#[derive(Clone, Debug)]
pub struct PromptOptions {
    separator: Cow<'static, str>,
    delimiter: Cow<'static, str>,
    quit_key: char,
    quit_label: Cow<'static, str>,
    unconfigured: Cow<'static, str>,
    aborted: Cow<'static, str>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        PromptOptions {
            separator: ": ".into(),
            delimiter: ", ".into(),
            quit_key: 'q',
            quit_label: "Quit".into(),
            unconfigured: "Configure menus first".into(),
            aborted: "Aborted".into(),
        }
    }
}

impl PromptOptions {
    /// Set the text placed between the title and the first choice.
    pub fn separator<T: Into<Cow<'static, str>>>(mut self, separator: T) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the text placed between choices.
    pub fn delimiter<T: Into<Cow<'static, str>>>(mut self, delimiter: T) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the key that quits a menu.
    pub fn quit_key(mut self, key: char) -> Self {
        self.quit_key = key;
        self
    }

    /// Set the label shown for the quit choice.
    pub fn quit_label<T: Into<Cow<'static, str>>>(mut self, label: T) -> Self {
        self.quit_label = label.into();
        self
    }

    /// Set the message shown when there are no menus to run.
    pub fn unconfigured_message<T: Into<Cow<'static, str>>>(mut self, msg: T) -> Self {
        self.unconfigured = msg.into();
        self
    }

    /// Set the message shown when a menu is quit.
    pub fn aborted_message<T: Into<Cow<'static, str>>>(mut self, msg: T) -> Self {
        self.aborted = msg.into();
        self
    }

    /// The key that quits a menu.
    pub fn get_quit_key(&self) -> char {
        self.quit_key
    }

    /// Message shown when there are no menus to run.
    pub fn get_unconfigured_message(&self) -> &str {
        self.unconfigured.as_ref()
    }

    /// Message shown when a menu is quit.
    pub fn get_aborted_message(&self) -> &str {
        self.aborted.as_ref()
    }

    /// The implicit choice appended to every displayed menu.
    pub fn quit_item(&self) -> MenuItem {
        MenuItem::new(self.quit_key, self.quit_label.clone(), MenuAction::Nothing)
    }
}

/// Render the single-line prompt for `menu`, ending with the quit choice.
pub fn render_prompt(menu: &Menu, options: &PromptOptions) -> String {
    let quit = options.quit_item();
    let choices = menu
        .items()
        .iter()
        .chain(std::iter::once(&quit))
        .map(|item| format!("[{}] {}", item.key(), item.label()))
        .collect::<Vec<_>>();

    let mut prompt = String::from(menu.title());
    prompt.push_str(options.separator.as_ref());
    prompt.push_str(&choices.join(options.delimiter.as_ref()));

    return prompt;
}

/// The keys accepted while `menu` is shown: each item's key in order, then the quit key.
pub fn choice_keys(menu: &Menu, options: &PromptOptions) -> Vec<char> {
    let mut keys = Vec::with_capacity(menu.items().len() + 1);

    for key in menu.items().iter().map(MenuItem::key).chain(Some(options.quit_key)) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    return keys;
}

/// Wrap a rendered prompt to fit within `max_cols` columns.
///
/// A width of zero means the available space is unknown, and the prompt is left on one line.
pub fn wrap_prompt(prompt: &str, max_cols: usize) -> Vec<Cow<'_, str>> {
    if max_cols == 0 {
        return vec![Cow::Borrowed(prompt)];
    }

    return wrap(prompt, max_cols);
}
