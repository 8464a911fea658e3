//! Flutter bridge for tempfmt.

pub mod api;
