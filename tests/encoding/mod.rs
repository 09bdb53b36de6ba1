//! Module containing tests for the text encoding schemes.
