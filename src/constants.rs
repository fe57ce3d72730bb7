//! Application constants.
//!
//! Centralizes the fixed document text and default locations.

/// Output document layout.
pub mod document {
    /// Front matter written at the top of every formatted file.
    pub const HEADER: &str = "---\nname: Quotes\ndescription: Collection of memorable quotes and thoughts\ncolor: #4A90E2\n---\n\n";

    /// Title line shared by every quote block.
    pub const BLOCK_TITLE: &str = "Quote";

    /// Separator placed between consecutive quote blocks.
    pub const BLOCK_SEPARATOR: &str = "\n";

    /// Front matter delimiter line.
    pub const FRONT_MATTER_DELIMITER: &str = "---";
}

/// Default file locations.
pub mod paths {
    /// Plain-text quote list read when no input is given.
    pub const DEFAULT_INPUT: &str = "notes-learner/src/data/topics/quotes.md";

    /// Formatted topic file written when no output is given.
    pub const DEFAULT_OUTPUT: &str = "notes-learner/src/data/topics/quotes_formatted.md";
}

/// Environment variable names.
pub mod env {
    /// Overrides the default input path.
    pub const INPUT: &str = "QUOTEFORM_INPUT";

    /// Overrides the default output path.
    pub const OUTPUT: &str = "QUOTEFORM_OUTPUT";
}

/// Fallback topic values used when a document carries no front matter.
pub mod topic {
    /// Topic id when the name is missing.
    pub const DEFAULT_ID: &str = "default";

    /// Topic name when the name is missing.
    pub const DEFAULT_NAME: &str = "Default Topic";

    /// Topic color when the color is missing.
    pub const DEFAULT_COLOR: &str = "#4A90E2";
}
