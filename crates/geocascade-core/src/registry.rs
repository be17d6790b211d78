//! Ordered provider table.
//!
//! Unlike a name-keyed map, the registry preserves insertion order: table
//! order is the fallback order.

use geocascade_provider::{
    new_google_provider, new_locationiq_provider, new_mapquest_provider, new_opencage_provider,
    new_osm_provider, new_positionstack_provider, Geocoder,
};

/// Ordered collection of geocoders. Names are expected to be unique.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Geocoder>>,
}

impl ProviderRegistry {
    /// Create a registry from geocoders in fallback order.
    pub fn new(providers: Vec<Box<dyn Geocoder>>) -> Self {
        Self { providers }
    }

    /// The built-in vendors against their real endpoints, keyed providers
    /// first and the free Nominatim service last.
    pub fn builtin() -> Self {
        Self::new(vec![
            Box::new(new_google_provider()),
            Box::new(new_positionstack_provider()),
            Box::new(new_opencage_provider()),
            Box::new(new_locationiq_provider()),
            Box::new(new_mapquest_provider()),
            Box::new(new_osm_provider()),
        ])
    }

    /// Provider names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&dyn Geocoder> {
        self.position(name).map(|index| self.providers[index].as_ref())
    }

    /// Table index of a provider.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.providers.iter().position(|p| p.name() == name)
    }

    /// All providers in table order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Geocoder> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Attempt sequence: the preferred entry first, then everything else in
    /// table order.
    pub fn attempt_order(&self, preferred: Option<usize>) -> Vec<&dyn Geocoder> {
        let mut ordered = Vec::with_capacity(self.providers.len());
        if let Some(first) = preferred.and_then(|index| self.providers.get(index)) {
            ordered.push(first.as_ref());
        }
        ordered.extend(
            self.providers
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != preferred)
                .map(|(_, p)| p.as_ref()),
        );
        ordered
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
