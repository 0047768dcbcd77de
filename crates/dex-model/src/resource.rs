//! Resource locator helpers.

/// Extracts the numeric id from a resource locator.
///
/// The data service addresses every resource as `.../<kind>/<id>/`. The id is
/// the last non-empty path segment; trailing slashes are ignored. Returns
/// `None` when that segment is not a number.
///
/// # Example
///
/// ```
/// use dex_model::id_from_resource_url;
///
/// assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
/// assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/"), None);
/// ```
#[must_use]
pub fn id_from_resource_url(url: &str) -> Option<u32> {
    url.split('/')
        .rfind(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
}
