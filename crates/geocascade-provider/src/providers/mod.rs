//! Geocoding vendor implementations.

pub mod format;
pub mod google;
pub mod locationiq;
pub mod mapquest;
pub mod opencage;
pub mod osm;
pub mod positionstack;
pub mod rest;

use rest::ProviderSpec;

/// All known vendors, in fallback order.
///
/// The order is a priority ranking: keyed providers first, the free
/// Nominatim service last.
pub const BUILTIN_PROVIDERS: &[ProviderSpec] = &[
    google::GOOGLE,
    positionstack::POSITIONSTACK,
    opencage::OPENCAGE,
    locationiq::LOCATIONIQ,
    mapquest::MAPQUEST,
    osm::OSM,
];

/// Name of the provider that works without any credential.
pub const DEFAULT_PROVIDER: &str = osm::OSM.name;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let names: Vec<&str> = BUILTIN_PROVIDERS.iter().map(|spec| spec.name).collect();
        assert_eq!(
            names,
            ["google", "positionstack", "opencage", "locationiq", "mapquest", "osm"]
        );
    }

    #[test]
    fn test_names_are_unique() {
        for (i, spec) in BUILTIN_PROVIDERS.iter().enumerate() {
            assert!(
                BUILTIN_PROVIDERS[i + 1..].iter().all(|other| other.name != spec.name),
                "duplicate provider name: {}",
                spec.name
            );
        }
    }

    #[test]
    fn test_only_default_provider_is_keyless() {
        let keyless: Vec<&str> = BUILTIN_PROVIDERS
            .iter()
            .filter(|spec| spec.credential.is_none())
            .map(|spec| spec.name)
            .collect();
        assert_eq!(keyless, [DEFAULT_PROVIDER]);
    }
}
