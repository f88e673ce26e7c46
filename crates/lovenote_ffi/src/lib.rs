//! Flutter-facing bindings for `lovenote_core`.

pub mod api;
