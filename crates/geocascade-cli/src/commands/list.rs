//! `--list-providers` output.

use geocascade_core::ProviderRegistry;
use geocascade_provider::CredentialSource;

/// Print the provider table in fallback order.
pub fn run(registry: &ProviderRegistry, credentials: &dyn CredentialSource) {
    for line in render(registry, credentials) {
        println!("{line}");
    }
}

fn render(registry: &ProviderRegistry, credentials: &dyn CredentialSource) -> Vec<String> {
    registry
        .iter()
        .map(|provider| match provider.credential_var() {
            Some(var) => {
                let state = if credentials.is_set(var) { "set" } else { "not set" };
                format!("{:<14} {var} ({state})", provider.name())
            }
            None => format!("{:<14} (no key required)", provider.name()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocascade_provider::StaticCredentials;

    #[test]
    fn test_render_table() {
        let registry = ProviderRegistry::builtin();
        let creds = StaticCredentials::new().with("OPENCAGE_KEY", "k");
        let lines = render(&registry, &creds);
        assert_eq!(
            lines,
            [
                "google         GOOGLE_API_KEY (not set)",
                "positionstack  POSITIONSTACK_KEY (not set)",
                "opencage       OPENCAGE_KEY (set)",
                "locationiq     LOCATIONIQ_KEY (not set)",
                "mapquest       MAPQUEST_KEY (not set)",
                "osm            (no key required)",
            ]
        );
    }
}
