/// The only platform family the resolver discriminates on.
pub const WINDOWS_FAMILY: &str = "windows";

/// Platform family of the host this binary was built for.
pub fn host_family() -> &'static str {
    #[cfg(windows)]
    const FAMILY: &str = WINDOWS_FAMILY;

    #[cfg(target_os = "linux")]
    const FAMILY: &str = "linux";

    #[cfg(target_os = "macos")]
    const FAMILY: &str = "mac_os_x";

    #[cfg(not(any(windows, target_os = "linux", target_os = "macos")))]
    const FAMILY: &str = std::env::consts::OS;

    tracing::debug!(family = FAMILY, "detected host platform family");
    FAMILY
}

pub fn is_windows(family: &str) -> bool {
    family == WINDOWS_FAMILY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_windows_matches() {
        assert!(is_windows("windows"));
        assert!(!is_windows("Windows"));
        assert!(!is_windows(" windows"));
        assert!(!is_windows("debian"));
        assert!(!is_windows(""));
    }

    #[test]
    fn host_family_matches_build_target() {
        assert_eq!(is_windows(host_family()), cfg!(windows));
    }
}
