// This file is the module declaration file for the `core` module.
// In Rust, a `mod.rs` file within a directory (e.g., `src/core/`)
// serves two main purposes:
//
// 1. It declares the submodules contained within that directory.
// 2. It exposes these submodules to the parent module (`src/` in this case),
//    making them accessible to the entire crate.

// The `pub mod config;` declaration tells the Rust compiler to look for
// a file named `config.rs` (or `config/mod.rs`) within the same directory.
// The `pub` keyword makes the `config` module and all its public items
// (structs, functions, traits) available to the parent crate.
//
// `config` module:
// This module is responsible for managing the coverage manifest. It defines
// the manifest's data structure (`CoverageConfig`), provides a
// `ConfigProvider` trait for abstracting manifest access, and includes a
// `ConfigManager` to handle file I/O operations like loading, saving,
// editing, and validating the manifest.
pub mod config;
pub mod engine;
