//! Parsing for `nebius profile list` output.

/// Marker appended to the active profile's line.
pub const DEFAULT_MARKER: &str = "[default]";

/// A named CLI profile.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Profile name with the default marker removed.
    pub name: String,
    /// Whether this is the currently active profile.
    pub is_default: bool,
}

/// Parses newline-separated profile names, preserving input order.
///
/// Blank lines are skipped. Lines containing [`DEFAULT_MARKER`] anywhere are
/// flagged as the default profile; every occurrence of the marker is removed
/// and the remainder trimmed.
#[must_use]
pub fn parse_profile_list(output: &str) -> Vec<Profile> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.contains(DEFAULT_MARKER) {
                Profile {
                    name: line.replace(DEFAULT_MARKER, "").trim().to_owned(),
                    is_default: true,
                }
            } else {
                Profile {
                    name: line.to_owned(),
                    is_default: false,
                }
            }
        })
        .collect()
}
