//! Property-based tests for catalog spell correction
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `similarity_props`: Tests for the similarity scorer
//!   - Score is symmetric and within 0-100
//!   - Identical strings score 100
//!   - Partial score is never below the full score
//!
//! - `phonetic_props`: Tests for the phonetic coder
//!   - Code is one uppercase letter and three digits
//!   - Coding is case-insensitive
//!   - Words sharing a first letter and consonant skeleton share a code
//!
//! - `correction_props`: Tests for the token corrector and query pipeline
//!   - Vocabulary tokens are never changed
//!   - Correction is idempotent
//!   - Output tokens are vocabulary tokens or unresolved originals
//!   - Parallel and sequential scans agree
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod correction_props;
mod phonetic_props;
mod similarity_props;
