//! The document suffix catalog and filename-stem generation.

use crate::CitizenId;

/// Document-type suffixes appended to an ID number, in output order.
///
/// The first entry is empty so the bare ID number leads the generated list.
pub const DOCUMENT_SUFFIXES: [&str; 12] = [
    "",
    "_寸照",
    "_身份证",
    "_身份证正面",
    "_身份证反面",
    "_户口本",
    "_学历证明",
    "_健康承诺书",
    "_取证申请表",
    "_证书",
    "_证书正面",
    "_证书反面",
];

/// Generates the filename stems for a validated ID number.
///
/// Returns one entry per [`DOCUMENT_SUFFIXES`] element, in catalog order,
/// each the ID number followed by one suffix.
#[must_use]
pub fn document_names(id: &CitizenId) -> Vec<String> {
    DOCUMENT_SUFFIXES
        .iter()
        .map(|suffix| format!("{id}{suffix}"))
        .collect()
}
