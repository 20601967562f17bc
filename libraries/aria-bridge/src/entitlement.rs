//! Voice-assistant entitlement probe
//!
//! The embedded provisioning profile wraps a plist in a CMS signature blob.
//! The probe decodes the bytes as Latin-1, slices out the plist, and looks
//! for the voice-assistant capability key: declared true or merely present
//! counts as entitled, only an explicit false opts out. Any read or shape
//! failure means "entitlement absent", never an error.
use std::path::Path;
use tracing::debug;

/// Capability key gating voice-assistant integration
pub const SIRI_ENTITLEMENT_KEY: &str = "com.apple.developer.siri";

/// Triggers the OS voice-authorization prompt.
///
/// Injected so the bridge's startup sequence is testable without the OS.
pub trait VoiceAuthorizer: Send + Sync {
    /// Ask the OS to show the voice-assistant authorization prompt
    fn request_authorization(&self);
}

/// Check the provisioning profile for the voice-assistant capability.
pub fn siri_entitlement_declared(profile_path: &Path) -> bool {
    let Ok(bytes) = std::fs::read(profile_path) else {
        debug!(path = %profile_path.display(), "provisioning profile unreadable");
        return false;
    };

    // Latin-1 decode keeps the binary CMS framing from breaking the scan.
    let raw: String = bytes.iter().map(|&b| char::from(b)).collect();

    let Some(start) = raw.find("<plist") else {
        return false;
    };
    let Some(end) = raw[start..].find("</plist>") else {
        return false;
    };
    let plist = &raw[start..start + end + "</plist>".len()];

    let key_marker = format!("<key>{SIRI_ENTITLEMENT_KEY}</key>");
    let Some(key_at) = plist.find(&key_marker) else {
        return false;
    };

    let value = plist[key_at + key_marker.len()..].trim_start();
    !value.starts_with("<false/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile_with(entitlements: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Binary-ish prefix and suffix stand in for the CMS framing.
        file.write_all(&[0x30, 0x82, 0xFF, 0x01]).unwrap();
        write!(
            file,
            "<plist version=\"1.0\"><dict><key>Entitlements</key><dict>{entitlements}</dict></dict></plist>"
        )
        .unwrap();
        file.write_all(&[0xDE, 0xAD]).unwrap();
        file
    }

    #[test]
    fn declared_true_is_entitled() {
        let file = profile_with("<key>com.apple.developer.siri</key><true/>");
        assert!(siri_entitlement_declared(file.path()));
    }

    #[test]
    fn declared_false_is_not_entitled() {
        let file = profile_with("<key>com.apple.developer.siri</key><false/>");
        assert!(!siri_entitlement_declared(file.path()));
    }

    #[test]
    fn merely_present_counts_as_entitled() {
        let file = profile_with("<key>com.apple.developer.siri</key><string>yes</string>");
        assert!(siri_entitlement_declared(file.path()));
    }

    #[test]
    fn absent_key_is_not_entitled() {
        let file = profile_with("<key>aps-environment</key><string>production</string>");
        assert!(!siri_entitlement_declared(file.path()));
    }

    #[test]
    fn missing_or_malformed_profile_is_not_entitled() {
        assert!(!siri_entitlement_declared(Path::new("/nonexistent/profile")));

        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        garbage.write_all(b"no plist here").unwrap();
        assert!(!siri_entitlement_declared(garbage.path()));
    }
}
