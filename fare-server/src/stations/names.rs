//! Station name translation for the national-rail fare service.
//!
//! TfL display names carry a network qualifier ("Bond Street Underground
//! Station") that the national-rail service does not recognise. This
//! module turns a TfL display name into the URL-ready name the fare
//! service expects.

/// Network qualifiers stripped from the end of a display name.
const NETWORK_QUALIFIERS: [&str; 3] = ["Underground", "DLR", "Rail"];

/// Stations whose canonical names differ between the two systems.
const NAME_OVERRIDES: [(&str, &str); 2] = [
    ("London%20Gatwick%20Airport", "Gatwick%20Airport"),
    ("Victoria", "London%20Victoria"),
];

/// Translate a TfL display name into a national-rail station name.
///
/// Strips a trailing `<space>(Underground|DLR|Rail)<space>Station`,
/// encodes spaces as `%20`, then applies the known name overrides.
///
/// # Examples
///
/// ```
/// use fare_server::stations::rail_station_name;
///
/// assert_eq!(rail_station_name("Clapham Junction Rail Station"), "Clapham%20Junction");
/// assert_eq!(rail_station_name("Victoria Underground Station"), "London%20Victoria");
/// assert_eq!(rail_station_name("London Gatwick Airport Rail Station"), "Gatwick%20Airport");
/// ```
pub fn rail_station_name(common_name: &str) -> String {
    let name = strip_network_suffix(common_name).replace(' ', "%20");

    NAME_OVERRIDES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(name)
}

/// Remove one trailing network qualifier and "Station", with the
/// whitespace before each.
fn strip_network_suffix(name: &str) -> &str {
    let Some(rest) = name.strip_suffix("Station") else {
        return name;
    };
    let trimmed = rest.trim_end();
    if trimmed.len() == rest.len() {
        // No whitespace before "Station"
        return name;
    }

    for qualifier in NETWORK_QUALIFIERS {
        if let Some(base) = trimmed.strip_suffix(qualifier) {
            let stripped = base.trim_end();
            if stripped.len() < base.len() {
                return stripped;
            }
        }
    }

    name
}
