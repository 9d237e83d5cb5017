//! Help output for the listing built-ins.
//!
//! Descriptor data is extracted into serializable structs (`data`) and
//! rendered through embedded templates (`render`), so the wording of the
//! `help` and `commands` output lives in one editable place instead of
//! being scattered through format strings.

mod data;
mod render;

pub(crate) use render::{collapsed_listing, command_detail, command_listing};
