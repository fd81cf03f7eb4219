//! Address to coordinate lookup.
//!
//! Not a geocoder: a fixed table of known city centres, matched
//! case-insensitively as substrings of free-form text. Text that names
//! none of the known cities resolves to nothing, and the caller keeps
//! its current coordinates.

/// Known city centres: lowercase name, latitude, longitude.
const KNOWN_PLACES: &[(&str, f64, f64)] = &[
    ("berlin", 52.520008, 13.404954),
    ("munich", 48.137154, 11.576124),
    ("hamburg", 53.551086, 9.993682),
    ("cologne", 50.937531, 6.960279),
    ("frankfurt", 50.110922, 8.682127),
];

/// Resolve free-form address text to coordinates.
///
/// Returns the centre of the first known city (in table order) whose
/// name appears anywhere in the text, ignoring case.
pub fn resolve_address(text: &str) -> Option<(f64, f64)> {
    let text = text.to_lowercase();

    KNOWN_PLACES
        .iter()
        .find(|(name, _, _)| text.contains(name))
        .map(|&(_, lat, lng)| (lat, lng))
}
