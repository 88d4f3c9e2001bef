pub const APP_NAME: &str = "Мастер плитки — Владивосток";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, else the crate version.
pub fn version_label() -> String {
    match GIT_TAG.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => tag.to_string(),
        None => format!("v{}", APP_VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_never_empty() {
        let label = version_label();
        assert!(!label.is_empty());
        if GIT_TAG.is_none() {
            assert_eq!(label, format!("v{APP_VERSION}"));
        }
    }
}
