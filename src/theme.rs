use colored::{ColoredString, Colorize};

// Truecolor palette shared by every surface of the tool.

pub fn success(text: &str) -> ColoredString {
    text.truecolor(6, 214, 160)
}

pub fn warning(text: &str) -> ColoredString {
    text.truecolor(255, 158, 0)
}

pub fn error(text: &str) -> ColoredString {
    text.truecolor(239, 71, 111)
}

pub fn info(text: &str) -> ColoredString {
    text.truecolor(17, 138, 178)
}

pub fn muted(text: &str) -> ColoredString {
    text.truecolor(141, 153, 174)
}

pub fn highlight(text: &str) -> ColoredString {
    text.truecolor(114, 9, 183)
}

pub mod icons {
    pub const PACKAGE: &str = "📦";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const UNUSED: &str = "🟡";
    pub const MISSING: &str = "🔴";
    pub const FOLDER: &str = "📂";
}
