//! Quiz source reading JSON documents from a local directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use quizdeck_core::error::LoadError;
use quizdeck_core::model::{Catalog, Topic, TopicSummary};
use quizdeck_core::parser::{parse_catalog_str, parse_topic_str};
use quizdeck_core::traits::QuizSource;

/// File name of the catalog inside the data directory.
pub const CATALOG_FILE: &str = "index.json";

/// Serves `index.json` and the topic files it references from one directory.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, relative: &str) -> Result<String, LoadError> {
        let path = self.root.join(relative);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadError::Io {
                resource: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl QuizSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        let content = self.read(CATALOG_FILE).await?;
        let catalog = parse_catalog_str(&content, CATALOG_FILE)?;
        tracing::debug!("catalog lists {} topic(s)", catalog.topics.len());
        Ok(catalog)
    }

    #[instrument(skip(self, summary), fields(slug = %summary.slug))]
    async fn load_topic(&self, summary: &TopicSummary) -> Result<Topic, LoadError> {
        let relative = Path::new(&summary.file);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(LoadError::Io {
                resource: summary.file.clone(),
                message: "topic file must stay inside the data directory".into(),
            });
        }

        let content = self.read(&summary.file).await?;
        parse_topic_str(summary, &content, &summary.file)
    }
}
