//! Glue utilities for the Retypeset blog theme: Mastodon comment fetching
//! and threading, plus the theme's static locale and UI string tables.
//!
//! Comment loading is deliberately fail-soft. A missing identifier, a dead
//! instance, or a malformed response all degrade to an empty reply list so
//! that a broken comments section can never break a page render.

pub use crate::{
  account::Account,
  client::Client,
  comment::{Comment, MAX_REPLY_DEPTH, build_comment_tree},
  context::Context,
  language::Language,
  status::Status,
  ui_strings::UiStrings,
};

use {
  serde::{Deserialize, Serialize},
  tracing::warn,
};

mod account;
mod client;
mod comment;
mod context;
mod language;
mod status;
mod ui_strings;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
