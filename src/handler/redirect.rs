//! Release redirect resolution module
//!
//! Maps a `package` + optional `tag` query to a GitHub release asset URL.
//! Pure function over an explicit parameter map; validation failure is a
//! returned variant, never an error propagated to the connection layer.

use std::collections::HashMap;

use crate::config::ReleaseConfig;

/// Fixed body returned when `package` is missing or malformed
pub const INVALID_PACKAGE_BODY: &str = "Invalid or missing package parameter";

/// Outcome of resolving a redirect query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Redirect to the computed release asset URL
    Found { location: String },
    /// `package` absent or without the required suffix
    InvalidPackage,
}

/// Resolve query parameters into a redirect target.
///
/// `package` must be present and end with the configured suffix
/// (case-sensitive). `tag` falls back to the configured default when
/// absent or empty. The target is built by plain interpolation; neither
/// component is URL-encoded on the way out.
//
// TODO: percent-encode tag and package into the Location value once the
// install scripts relying on raw interpolation have been migrated.
pub fn resolve(params: &HashMap<String, String>, release: &ReleaseConfig) -> RedirectOutcome {
    let package = match params.get("package") {
        Some(p) if p.ends_with(&release.package_suffix) => p,
        _ => return RedirectOutcome::InvalidPackage,
    };

    let tag = match params.get("tag") {
        Some(t) if !t.is_empty() => t.as_str(),
        _ => release.default_tag.as_str(),
    };

    RedirectOutcome::Found {
        location: format!("{}/{}/{}", release.base_url, tag, package),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_missing_package_is_invalid() {
        let outcome = resolve(&HashMap::new(), &ReleaseConfig::default());
        assert_eq!(outcome, RedirectOutcome::InvalidPackage);
    }

    #[test]
    fn test_wrong_suffix_is_invalid() {
        let release = ReleaseConfig::default();
        for pkg in ["foo.rpm", "foo", "", "foo.DEB"] {
            let outcome = resolve(&params(&[("package", pkg)]), &release);
            assert_eq!(outcome, RedirectOutcome::InvalidPackage, "package: {pkg:?}");
        }
    }

    #[test]
    fn test_default_tag_applied() {
        let outcome = resolve(&params(&[("package", "app.deb")]), &ReleaseConfig::default());
        assert_eq!(
            outcome,
            RedirectOutcome::Found {
                location:
                    "https://github.com/denova234/novaide-packages/releases/download/1.0/app.deb"
                        .to_string()
            }
        );
    }

    #[test]
    fn test_empty_tag_falls_back_to_default() {
        let outcome = resolve(
            &params(&[("package", "app.deb"), ("tag", "")]),
            &ReleaseConfig::default(),
        );
        assert_eq!(
            outcome,
            RedirectOutcome::Found {
                location:
                    "https://github.com/denova234/novaide-packages/releases/download/1.0/app.deb"
                        .to_string()
            }
        );
    }

    #[test]
    fn test_explicit_tag_used() {
        let outcome = resolve(
            &params(&[("package", "app.deb"), ("tag", "2.3.1")]),
            &ReleaseConfig::default(),
        );
        assert_eq!(
            outcome,
            RedirectOutcome::Found {
                location:
                    "https://github.com/denova234/novaide-packages/releases/download/2.3.1/app.deb"
                        .to_string()
            }
        );
    }

    #[test]
    fn test_no_output_encoding_applied() {
        // Decoded spaces pass through to the Location value literally
        let outcome = resolve(
            &params(&[("package", "weird name.deb")]),
            &ReleaseConfig::default(),
        );
        match outcome {
            RedirectOutcome::Found { location } => {
                assert!(location.contains("weird name.deb"));
                assert!(!location.contains("%20"));
            }
            RedirectOutcome::InvalidPackage => panic!("expected redirect"),
        }
    }

    #[test]
    fn test_repeated_resolution_is_identical() {
        let release = ReleaseConfig::default();
        let p = params(&[("package", "app.deb"), ("tag", "2.3.1")]);
        assert_eq!(resolve(&p, &release), resolve(&p, &release));
    }
}
