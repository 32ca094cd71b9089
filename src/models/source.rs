//! Location of the gallery's media folder.
//!
//! The gallery reads a single directory of a public GitHub repository
//! through the REST "contents" API.

// ============================================================================
// MediaSource
// ============================================================================

/// A directory inside a public GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource {
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// Directory path relative to the repository root
    path: String,
}

impl MediaSource {
    /// Create a new GitHub directory source.
    ///
    /// Leading and trailing slashes on `path` are ignored.
    pub fn github(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into().trim_matches('/').to_string(),
        }
    }

    /// Directory name shown to visitors (last path segment).
    #[inline]
    pub fn folder_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// REST endpoint returning the directory listing.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            crate::config::GITHUB_API_BASE,
            self.owner,
            self.repo,
            self.path
        )
    }

    /// Browsable folder page on github.com.
    pub fn folder_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/tree/HEAD/{}",
            self.owner, self.repo, self.path
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let source = MediaSource::github("user", "repo", "media");
        assert_eq!(
            source.listing_url(),
            "https://api.github.com/repos/user/repo/contents/media"
        );
    }

    #[test]
    fn test_nested_path() {
        let source = MediaSource::github("user", "repo", "/assets/media/");
        assert_eq!(
            source.listing_url(),
            "https://api.github.com/repos/user/repo/contents/assets/media"
        );
        assert_eq!(source.folder_name(), "media");
    }

    #[test]
    fn test_folder_url() {
        let source = MediaSource::github("user", "repo", "media");
        assert_eq!(
            source.folder_url(),
            "https://github.com/user/repo/tree/HEAD/media"
        );
    }
}
