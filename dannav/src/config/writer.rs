//! INI serialization logic for converting `ConfigFile` → INI string.

use super::parser::path_to_display;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let buildings_file = config
        .store
        .buildings_file
        .as_ref()
        .map(|p| path_to_display(p))
        .unwrap_or_default();

    format!(
        r#"[navigation]
; Distance to the destination that counts as arrived, in meters (default: 20)
arrival_threshold_m = {}
; Average speed used to estimate remaining time, in km/h (default: 30)
average_speed_kmh = {}
; Minimum time between position updates, in milliseconds (default: 1000)
update_interval_ms = {}
; Minimum movement between position updates, in meters (default: 5)
update_distance_m = {}

[store]
; GeoJSON FeatureCollection of known buildings used for exact DAN lookups.
; Point features with "name", "category" and "state" properties.
; Leave empty to decode from the address grid only.
buildings_file = {}

[logging]
; Directory for log files (default: ~/.dannav/logs)
directory = {}
; Log file name (default: dannav.log)
file = {}
"#,
        config.navigation.arrival_threshold_m,
        config.navigation.average_speed_kmh,
        config.navigation.update_interval_ms,
        config.navigation.update_distance_m,
        buildings_file,
        path_to_display(&config.logging.directory),
        config.logging.file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_contains_sections() {
        let output = to_config_string(&ConfigFile::default());

        assert!(output.contains("[navigation]"));
        assert!(output.contains("[store]"));
        assert!(output.contains("[logging]"));
        assert!(output.contains("arrival_threshold_m = 20\n"));
        assert!(output.contains("average_speed_kmh = 30\n"));
        assert!(output.contains("update_interval_ms = 1000\n"));
        assert!(output.contains("buildings_file = \n"));
        assert!(output.contains("file = dannav.log\n"));
    }

    #[test]
    fn test_output_parses_back() {
        let mut config = ConfigFile::default();
        config.navigation.average_speed_kmh = 12.5;

        let ini = ini::Ini::load_from_str(&to_config_string(&config)).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();
        assert_eq!(parsed, config);
    }
}
