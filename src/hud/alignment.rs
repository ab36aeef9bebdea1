//! Screen alignment lookup
//!
//! The Metal runtime takes the HUD position as an opaque numeric code.
//! The mapping below is fixed; it is not documented by Apple but has
//! been stable across releases.

/// Alignment picker options: (display name, settings key)
pub const ALIGNMENTS: &[(&str, &str)] = &[
    ("Top Left", "topLeft"),
    ("Top Center", "topCenter"),
    ("Top Right", "topRight"),
    ("Center", "center"),
    ("Left Center", "leftCenter"),
    ("Center Right", "centerRight"),
    ("Bottom Right", "bottomRight"),
    ("Bottom Center", "bottomCenter"),
    ("Bottom Left", "bottomLeft"),
];

/// Map an alignment key to the numeric code the runtime expects.
///
/// Unknown keys fall back to "4", the runtime's own default position.
pub fn alignment_value(key: &str) -> &'static str {
    match key {
        "topLeft" => "10",
        "topCenter" => "14",
        "topRight" => "12",
        "center" => "30",
        "leftCenter" => "26",
        "centerRight" => "28",
        "bottomRight" => "20",
        "bottomCenter" => "22",
        "bottomLeft" => "18",
        _ => "4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_documented_codes() {
        let expected = [
            ("topLeft", "10"),
            ("topCenter", "14"),
            ("topRight", "12"),
            ("center", "30"),
            ("leftCenter", "26"),
            ("centerRight", "28"),
            ("bottomRight", "20"),
            ("bottomCenter", "22"),
            ("bottomLeft", "18"),
        ];
        for (key, code) in expected {
            assert_eq!(alignment_value(key), code, "key {key}");
        }
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(alignment_value("middleish"), "4");
        assert_eq!(alignment_value(""), "4");
    }

    #[test]
    fn picker_options_cover_every_mapped_key() {
        assert_eq!(ALIGNMENTS.len(), 9);
        for (_, key) in ALIGNMENTS {
            assert_ne!(alignment_value(key), "4", "key {key} should be mapped");
        }
    }
}
