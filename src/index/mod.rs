//! Debian Packages index generation module
//!
//! Turns GitHub releases JSON into `Packages` stanzas for an APT
//! repository whose `Filename` fields point straight at release assets.
//! Consumed by the `gen_packages` binary in the release pipeline:
//! releases JSON on stdin, rendered index on stdout.

use serde::Deserialize;

/// Maintainer recorded in every generated stanza
pub const MAINTAINER: &str = "Nova IDE <alexnova205@gmail.com>";

/// Homepage recorded in every generated stanza
pub const HOMEPAGE: &str = "https://github.com/nova-ide/novaide-packages";

/// A GitHub release, reduced to the fields the index needs
#[derive(Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub draft: bool,
    /// Release notes; the first line becomes the package description
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A single release asset
#[derive(Debug, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
    pub size: u64,
    /// `sha256:<hex>` digest, present on newer GitHub API responses
    #[serde(default)]
    pub digest: Option<String>,
}

/// Package fields parsed from a `.deb` filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebName {
    pub package: String,
    pub version: String,
    pub architecture: String,
}

/// Parse a `name_version_arch.deb` filename.
///
/// With fewer than three underscore-separated parts the whole base name
/// is taken as the package name, with version `1.0` and architecture
/// `aarch64` as fallbacks.
pub fn parse_deb_filename(filename: &str) -> DebName {
    let base = filename.strip_suffix(".deb").unwrap_or(filename);
    let parts: Vec<&str> = base.split('_').collect();

    if parts.len() >= 3 {
        DebName {
            package: parts[0].to_string(),
            version: parts[1].to_string(),
            architecture: parts[parts.len() - 1].to_string(),
        }
    } else {
        DebName {
            package: base.to_string(),
            version: "1.0".to_string(),
            architecture: "aarch64".to_string(),
        }
    }
}

/// Render one Packages stanza for a `.deb` asset, or None otherwise.
///
/// Checksums come from the asset's digest when GitHub provides one;
/// otherwise zero-filled placeholders keep the stanza well-formed. The
/// MD5 field is always a placeholder since the API only publishes SHA256.
pub fn package_entry(asset: &Asset, release: &Release) -> Option<String> {
    if !asset.name.ends_with(".deb") {
        return None;
    }

    let deb = parse_deb_filename(&asset.name);

    let description = release
        .body
        .as_deref()
        .map(|body| body.lines().next().unwrap_or("").to_string())
        .unwrap_or_else(|| format!("Custom package - {}", deb.package));

    let md5sum = "0".repeat(32);
    let sha256sum = asset
        .digest
        .as_deref()
        .and_then(|d| d.strip_prefix("sha256:"))
        .map_or_else(|| "0".repeat(64), ToString::to_string);

    Some(format!(
        "Package: {package}\n\
         Version: {version}\n\
         Architecture: {architecture}\n\
         Maintainer: {MAINTAINER}\n\
         Installed-Size: {installed_size}\n\
         Description: {description}\n\
         Homepage: {HOMEPAGE}\n\
         Filename: {filename}\n\
         Size: {size}\n\
         MD5sum: {md5sum}\n\
         SHA256: {sha256sum}\n\n",
        package = deb.package,
        version = deb.version,
        architecture = deb.architecture,
        installed_size = asset.size / 1024,
        filename = asset.browser_download_url,
        size = asset.size,
    ))
}

/// Generate the full Packages index for a set of releases.
///
/// Draft releases are skipped. Returns the rendered index and the number
/// of packages included.
pub fn generate_index(releases: &[Release]) -> (String, usize) {
    let mut index = String::new();
    let mut count = 0;

    for release in releases {
        if release.draft {
            continue;
        }
        for asset in &release.assets {
            if let Some(entry) = package_entry(asset, release) {
                index.push_str(&entry);
                count += 1;
            }
        }
    }

    (index, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> Asset {
        Asset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/{name}"),
            size: 204_800,
            digest: None,
        }
    }

    fn release(assets: Vec<Asset>) -> Release {
        Release {
            draft: false,
            body: Some("Editor core package\nFull changelog below".to_string()),
            assets,
        }
    }

    #[test]
    fn test_parse_full_filename() {
        let deb = parse_deb_filename("novaide_1.2.3_amd64.deb");
        assert_eq!(deb.package, "novaide");
        assert_eq!(deb.version, "1.2.3");
        assert_eq!(deb.architecture, "amd64");
    }

    #[test]
    fn test_parse_extra_parts_takes_last_as_arch() {
        let deb = parse_deb_filename("nova_ide_2.0_arm64.deb");
        assert_eq!(deb.package, "nova");
        assert_eq!(deb.version, "ide");
        assert_eq!(deb.architecture, "arm64");
    }

    #[test]
    fn test_parse_short_filename_uses_fallbacks() {
        let deb = parse_deb_filename("novaide.deb");
        assert_eq!(deb.package, "novaide");
        assert_eq!(deb.version, "1.0");
        assert_eq!(deb.architecture, "aarch64");
    }

    #[test]
    fn test_non_deb_asset_skipped() {
        let rel = release(vec![asset("novaide_1.0_amd64.rpm")]);
        assert!(package_entry(&rel.assets[0], &rel).is_none());
    }

    #[test]
    fn test_entry_fields() {
        let rel = release(vec![asset("novaide_1.2.3_amd64.deb")]);
        let entry = package_entry(&rel.assets[0], &rel).expect("deb asset");
        assert!(entry.contains("Package: novaide\n"));
        assert!(entry.contains("Version: 1.2.3\n"));
        assert!(entry.contains("Architecture: amd64\n"));
        assert!(entry.contains("Installed-Size: 200\n"));
        assert!(entry.contains("Description: Editor core package\n"));
        assert!(entry.contains("Size: 204800\n"));
        assert!(entry.contains(&format!("SHA256: {}\n", "0".repeat(64))));
        assert!(entry.ends_with("\n\n"));
    }

    #[test]
    fn test_digest_used_when_present() {
        let mut rel = release(vec![asset("novaide_1.2.3_amd64.deb")]);
        rel.assets[0].digest = Some(format!("sha256:{}", "ab".repeat(32)));
        let entry = package_entry(&rel.assets[0], &rel).expect("deb asset");
        assert!(entry.contains(&format!("SHA256: {}\n", "ab".repeat(32))));
    }

    #[test]
    fn test_missing_body_gets_default_description() {
        let mut rel = release(vec![asset("novaide_1.2.3_amd64.deb")]);
        rel.body = None;
        let entry = package_entry(&rel.assets[0], &rel).expect("deb asset");
        assert!(entry.contains("Description: Custom package - novaide\n"));
    }

    #[test]
    fn test_drafts_excluded_from_index() {
        let mut draft = release(vec![asset("draft_0.1_amd64.deb")]);
        draft.draft = true;
        let published = release(vec![
            asset("novaide_1.2.3_amd64.deb"),
            asset("novaide_1.2.3_amd64.changes"),
        ]);

        let (index, count) = generate_index(&[draft, published]);
        assert_eq!(count, 1);
        assert!(index.contains("Package: novaide\n"));
        assert!(!index.contains("Package: draft\n"));
    }
}
