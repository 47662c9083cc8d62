pub const APP_NAME: &str = "Screenprint Pricing";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build provenance stamped by `build.rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildSource {
    Release(&'static str),
    Commit(&'static str),
    Unknown,
}

impl BuildSource {
    pub const fn current() -> Self {
        match (
            option_env!("PRICING_RELEASE_TAG"),
            option_env!("PRICING_BUILD_COMMIT"),
        ) {
            (Some(tag), _) => Self::Release(tag),
            (None, Some(commit)) => Self::Commit(commit),
            (None, None) => Self::Unknown,
        }
    }

    /// Tag for releases, otherwise the package version with any known commit.
    pub fn label(self) -> String {
        match self {
            Self::Release(tag) => tag.to_string(),
            Self::Commit(commit) => format!("v{APP_VERSION}+{commit}"),
            Self::Unknown => format!("v{APP_VERSION}"),
        }
    }
}

pub fn version_label() -> String {
    BuildSource::current().label()
}
