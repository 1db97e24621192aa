// crates/popview-core/src/traits.rs

/// Name-based matching helpers for types that expose a canonical district name.
///
/// Matching is exact and case-sensitive: district names in the monthly extract
/// are Hangul or fixed-case romanizations, so no folding is applied.
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — exact equality
/// - [`NameMatch::name_contains`] — substring containment
///
/// # Examples
/// ```rust
/// use popview_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("서울특별시 종로구").name_contains("종로"));
/// assert!(!Place("Gangnam-Gu").name_contains("gangnam"));
/// ```
pub trait NameMatch {
    /// Returns the canonical name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str() == q
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str().contains(q)
    }
}
