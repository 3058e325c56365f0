//! Cross-cutting helpers shared by the data layer and the views.

pub mod config;
pub mod error;
pub mod format;
