// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules encapsulate various utility and construction logic.

// The `pub mod importer;` declaration exposes the `importer` module.
//
// `importer` module:
// This module provides functionality for importing an existing coverage
// manifest from an external source, currently the JavaScript `.solcover.js`
// form used by solidity-coverage. It handles the extraction of the skip
// list and metric flags and their conversion into the internal
// `CoverageConfig` representation.
pub mod importer;

// The `pub mod reporter;` declaration exposes the `reporter` module.
//
// `reporter` module:
// This module is responsible for generating human-readable reports and status
// updates. It defines a `StatusReporter` trait and its `ConsoleReporter`
// implementation, which displays which project sources will be instrumented
// and which the manifest excludes.
pub mod reporter;

// The `pub mod validator;` declaration exposes the `validator` module.
//
// `validator` module:
// This module is dedicated to ensuring the integrity and correctness of
// the manifest. It defines the `ManifestValidator` trait and a
// `StandardValidator` implementation to check for common issues like
// empty or absolute skip entries, duplicates, and listed files that do
// not exist in the project.
pub mod validator;
