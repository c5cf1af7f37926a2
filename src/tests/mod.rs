//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the real key handling and
//! rendering through `TuiApp<TestBackend>`.
