//! Comment span detection test suite.
//!
//! Tests are organized into submodules by category:
//! - `line_comment_tests`: Line comments, terminators, merging of adjacent comments
//! - `string_context_tests`: Comment markers inside string literals (must not split strings)
//! - `block_comment_tests`: Block comments, nesting, shared-prefix markers
//! - `doc_string_tests`: Triple-quoted doc strings reported as comments
//! - `unterminated_tests`: Strings and comments still open at end of input
//! - `coverage_tests`: Spans tile the input for tricky fixture-style sources

use super::*;


// Re-export shared test fixtures for submodules
pub(super) use crate::detector::test_fixtures::{
    assert_covers, c_rule, doc_rule, hash_rule, lua_rule, nested_rule, shell_rule, texts,
    triples,
};
