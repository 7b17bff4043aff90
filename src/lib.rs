//! Scaffolds a TypeScript Factorio mod project for the typed-factorio /
//! typescript-to-lua toolchain: a fixed tree of boilerplate config and source
//! stubs, a `package.json`, and one `yarn add --dev` run for the toolchain's
//! development dependencies.

pub mod api;
pub mod config;
pub mod errors;
pub mod installer;
pub mod manifest;
pub mod preview;
pub mod scaffold;
pub mod vfs;
