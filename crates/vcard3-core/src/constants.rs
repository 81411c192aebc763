/// Keyword tokens and line-ending constants shared across crates
pub const VCARD_KEYWORD: &str = "VCARD";
pub const VCARD_KEYWORD_ALT: &str = "vCard";

pub const BEGIN_PREFIX: &str = "BEGIN:";
pub const END_PREFIX: &str = "END:";
pub const BEGIN_LINE: &str = const_str::concat!(BEGIN_PREFIX, VCARD_KEYWORD);
pub const END_LINE: &str = const_str::concat!(END_PREFIX, VCARD_KEYWORD);

/// Terminates entries of a top-level vCard.
pub const CRLF: &str = "\r\n";
/// Terminates entries of a nested vCard and separates vCards in a document.
pub const LF: &str = "\n";

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 16;
/// Hard ceiling on `AGENT` nesting; decoding recurses once per level.
pub const MAX_NESTING_DEPTH: usize = 64;
/// Maximum line length in octets before a binary body is folded.
pub const DEFAULT_FOLD_WIDTH: usize = 75;
pub const MIN_FOLD_WIDTH: usize = 16;
