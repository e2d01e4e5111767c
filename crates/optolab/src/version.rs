//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Program name and version, as shown above the experiment list.
#[must_use]
pub fn full_version() -> String {
    format!("OptoSim Lab {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_the_lab() {
        assert!(full_version().starts_with("OptoSim Lab "));
        assert!(full_version().ends_with(version()));
    }
}
