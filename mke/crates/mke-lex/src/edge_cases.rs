//! Edge case tests for mke-lex
