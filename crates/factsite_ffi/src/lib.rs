//! Flutter bridge for the content core.

pub mod api;
