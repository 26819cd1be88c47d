use crate::error::{Error, Result};
use std::path::PathBuf;

/// Resolves a file in a hub repository to a local path, downloading it if needed.
pub trait ArtifactFetcher {
    fn fetch(&self, repo_id: &str, filename: &str) -> Result<PathBuf>;
}

pub(crate) fn validate_request(repo_id: &str, filename: &str) -> Result<()> {
    if repo_id.trim().is_empty() {
        return Err(Error::InvalidInput("Empty repository id".to_string()));
    }
    if filename.trim().is_empty() {
        return Err(Error::InvalidInput("Empty filename".to_string()));
    }
    Ok(())
}

#[cfg(feature = "hub")]
pub use hub::HubFetcher;

#[cfg(feature = "hub")]
mod hub {
    use super::{validate_request, ArtifactFetcher};
    use crate::error::{Error, Result};
    use hf_hub::api::sync::Api;
    use std::path::PathBuf;

    /// Downloads through the HuggingFace cache (`HF_HOME`, token file).
    #[derive(Debug, Default)]
    pub struct HubFetcher;

    impl ArtifactFetcher for HubFetcher {
        fn fetch(&self, repo_id: &str, filename: &str) -> Result<PathBuf> {
            validate_request(repo_id, filename)?;

            tracing::info!("Fetching {} from HuggingFace repo {}", filename, repo_id);

            let api = Api::new().map_err(|e| Error::DownloadFailed(e.to_string()))?;
            let repo = api.model(repo_id.to_string());

            let path = repo.get(filename).map_err(|e| {
                Error::DownloadFailed(format!("Could not fetch {}: {}", filename, e))
            })?;

            if !path.exists() {
                return Err(Error::DownloadFailed(format!(
                    "Hub cache returned a missing file: {:?}",
                    path
                )));
            }

            tracing::debug!("Resolved {} to {:?}", filename, path);
            Ok(path)
        }
    }
}

/// Stand-in used when the crate is built without the hub client.
#[cfg(not(feature = "hub"))]
#[derive(Debug, Default)]
pub struct HubFetcher;

#[cfg(not(feature = "hub"))]
impl ArtifactFetcher for HubFetcher {
    fn fetch(&self, repo_id: &str, filename: &str) -> Result<PathBuf> {
        validate_request(repo_id, filename)?;
        Err(Error::MissingDependency(crate::deps::Dependency::HubClient))
    }
}
