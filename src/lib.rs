//! Workspace-level tooling anchor. The actual crates live under `crates/`;
//! this package only carries the pre-commit hook configuration.
