//! Pipeline driver
//!
//! A [`Pipeline`] owns the configuration for one invocation. Each call to
//! [`Pipeline::run`] opens its own network session, loads the catalog once
//! and dispatches to the exporter or the enum renderer. The session is
//! dropped when `run` returns, whatever the outcome.

use std::path::PathBuf;
use tracing::info;

use crate::catalog::CountryCatalog;
use crate::client::HolidayApi;
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::HolidayFetcher;
use crate::render;
use crate::types::{HolidayKind, RunMode, YearRange};
use crate::writer::{self, WriteSummary};

/// What a run produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunReport {
    /// Dates mode: one summary per exported kind, in export order
    Dates {
        /// Exported kinds with their destination and counters
        exports: Vec<(HolidayKind, PathBuf, WriteSummary)>,
    },
    /// Enum mode
    Enum {
        /// Rendered file
        path: PathBuf,
        /// Number of countries in the enumeration
        countries: usize,
    },
}

/// Orchestrates one run of the generator
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Execute the run selected by `mode`
    ///
    /// # Errors
    /// Fails when the catalog cannot be loaded, the template cannot be
    /// rendered, or an output file cannot be written. Years without data are
    /// skipped, not reported as errors.
    pub async fn run(&self, mode: RunMode) -> Result<RunReport> {
        self.config.validate_for(&mode)?;

        let api = HolidayApi::new(&self.config.api)?;
        info!(base_url = %api.base_url(), "starting run");

        let catalog = CountryCatalog::load(&api).await?;

        match mode {
            RunMode::Dates(range) => self.export_dates(&api, &catalog, range).await,
            RunMode::Enum => self.render_enum(&catalog).await,
        }
    }

    async fn export_dates(
        &self,
        api: &HolidayApi,
        catalog: &CountryCatalog,
        range: YearRange,
    ) -> Result<RunReport> {
        let selected;
        let catalog = match &self.config.regions {
            Some(regions) => {
                selected = catalog.retain_regions(regions.as_slice());
                info!(
                    countries = selected.len(),
                    "restricted catalog to requested regions"
                );
                &selected
            }
            None => catalog,
        };

        let fetcher = HolidayFetcher::new(api);
        let mut exports = Vec::with_capacity(self.config.kinds.len());

        for &kind in &self.config.kinds {
            let path = self.config.output.path_for(kind).to_path_buf();
            let summary = writer::export_holidays(fetcher, catalog, range, kind, &path).await?;
            exports.push((kind, path, summary));
        }

        Ok(RunReport::Dates { exports })
    }

    async fn render_enum(&self, catalog: &CountryCatalog) -> Result<RunReport> {
        let template = render::load_template(self.config.output.template_path.as_deref()).await?;
        let path = self.config.output.enum_path.clone();

        render::write_enum(catalog, &template, &path).await?;

        Ok(RunReport::Enum {
            path,
            countries: catalog.len(),
        })
    }
}
