//! Query parameter types for API handlers.

/// Raw `?start=&count=` parameters for the startup listing.
///
/// Kept as strings so a malformed number never rejects the request; the
/// handler parses them leniently and clamps the result.
#[derive(Debug, Default)]
pub struct ListParams {
    pub start: Option<String>,
    pub count: Option<String>,
}

impl ListParams {
    /// Build from the raw query pairs. The first occurrence of a repeated key
    /// wins and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut params.start,
                "count" => &mut params.count,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}
