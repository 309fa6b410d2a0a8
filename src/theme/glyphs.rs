pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const POINTER: &str = "\u{258c} ";
pub const NO_POINTER: &str = "  ";
