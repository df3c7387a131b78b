// ABOUTME: Configuration and constants for the Lisp interpreter

pub const VERSION: &str = "1.0.0";
pub const CLI_ABOUT: &str = "A small Scheme-flavored Lisp interpreter";
