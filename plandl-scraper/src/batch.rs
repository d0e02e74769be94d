use anyhow::{Context, Result};
use plandl_game::{Aircraft, Catalog};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::commons::{ImageSource, ScrapeError};
use crate::retry::BackoffPolicy;
use crate::targets::ScrapeTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Downloaded,
    AlreadyPresent,
    NoImage,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub label: String,
    pub filename: String,
    pub status: ItemStatus,
}

/// Results of one pass over the target list.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
    /// Catalog entries for every target that now has an image on disk.
    pub entries: Vec<Aircraft>,
}

impl BatchReport {
    fn count(&self, wanted: fn(&ItemStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| wanted(&o.status)).count()
    }

    pub fn downloaded(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Downloaded))
    }

    pub fn already_present(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::AlreadyPresent))
    }

    pub fn missing(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::NoImage))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Failed(_)))
    }
}

/// Sequential, paced scraper over an [`ImageSource`].
pub struct BatchRunner<S> {
    source: S,
    images_dir: PathBuf,
    pause: Duration,
    backoff: BackoffPolicy,
}

impl<S: ImageSource + Sync> BatchRunner<S> {
    pub const fn new(
        source: S,
        images_dir: PathBuf,
        pause: Duration,
        backoff: BackoffPolicy,
    ) -> Self {
        Self {
            source,
            images_dir,
            pause,
            backoff,
        }
    }

    pub async fn run(&self, targets: &[ScrapeTarget]) -> Result<BatchReport> {
        tokio::fs::create_dir_all(&self.images_dir)
            .await
            .with_context(|| format!("creating {}", self.images_dir.display()))?;

        let mut report = BatchReport::default();
        let total = targets.len();
        for (i, target) in targets.iter().enumerate() {
            log::info!("[{}/{total}] {}", i + 1, target.label());
            let filename = target.filename();
            let dest = self.images_dir.join(&filename);

            let status = if tokio::fs::try_exists(&dest).await.unwrap_or(false) {
                report.entries.push(target.to_aircraft(None));
                ItemStatus::AlreadyPresent
            } else {
                match self.fetch(target, &dest).await {
                    Ok(Some(attribution)) => {
                        report.entries.push(target.to_aircraft(attribution));
                        ItemStatus::Downloaded
                    }
                    Ok(None) => ItemStatus::NoImage,
                    Err(err) => {
                        log::warn!("{}: {err}", target.label());
                        ItemStatus::Failed(err.to_string())
                    }
                }
            };
            log::debug!("{filename}: {status:?}");
            report.outcomes.push(ItemOutcome {
                label: target.label(),
                filename,
                status,
            });

            if i + 1 < total && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }
        Ok(report)
    }

    /// `Ok(None)` when the search is empty; otherwise the image's credit line.
    async fn fetch(
        &self,
        target: &ScrapeTarget,
        dest: &Path,
    ) -> Result<Option<Option<String>>, ScrapeError> {
        let source = &self.source;
        let search = target.search.as_str();
        self.backoff
            .run(&target.label(), move |_| async move {
                let Some(found) = source.find_image(search).await? else {
                    return Ok(None);
                };
                source.download(&found.url, dest).await?;
                Ok(Some(found.attribution))
            })
            .await
    }
}

/// Append new entries to the catalog at `path` (absent file means empty).
///
/// Returns `(added, total)`.
pub fn merge_into_catalog(path: &Path, entries: Vec<Aircraft>) -> Result<(usize, usize)> {
    let mut catalog = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Catalog::from_json(&text).with_context(|| format!("parsing catalog {}", path.display()))?
    } else {
        Catalog::empty()
    };
    let added = catalog.merge(entries);
    let json = catalog.to_json_pretty().context("serializing catalog")?;
    std::fs::write(path, json).with_context(|| format!("writing catalog {}", path.display()))?;
    Ok((added, catalog.len()))
}
