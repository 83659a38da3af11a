//! Core trait for anything the text filter can run over.

use profile_core::UserProfile;

/// Exposes the text fields a query is compared against.
///
/// ## Design Note
/// - Fields are `Option<&str>` so records with optional attributes can
///   report "absent" instead of an empty string; absent fields never match
/// - Order of fields is irrelevant, a record matches if any field matches
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Users are searched by name, title, company and location.
impl Searchable for UserProfile {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.title.as_deref(),
            self.current_company.as_deref(),
            self.location.as_deref(),
        ]
    }
}

impl Searchable for &str {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(*self)]
    }
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.as_str())]
    }
}
