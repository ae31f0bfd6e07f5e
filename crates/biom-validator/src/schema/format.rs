//! Canonical format identifiers.

/// The format string every document must declare.
pub const FORMAT: &str = "Biological Observation Matrix v0.9";

/// The URL every document must declare as its format reference.
pub const FORMAT_URL: &str = "http://www.qiime.org/svn_documentation/documentation/biom_format.html";

/// Canonical spellings of the recognized table types.
pub const TABLE_TYPES: [&str; 7] = [
    "OTU table",
    "Pathway table",
    "Function table",
    "Ortholog table",
    "Gene table",
    "Metabolite table",
    "Taxon table",
];
