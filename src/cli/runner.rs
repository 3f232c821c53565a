// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Input discovery and batch quoting

use crate::pricing::RateOverrides;
use crate::quote::{estimate, Quote};
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;
use walkdir::WalkDir;

/// Outcome of quoting one input file
pub struct QuoteOutcome {
    pub path: PathBuf,
    pub result: Result<Quote>,
    pub duration: Duration,
}

/// Runner that quotes files under a size limit and a fixed set of overrides
pub struct Runner {
    overrides: RateOverrides,
    max_file_bytes: u64,
}

impl Runner {
    pub fn new(overrides: RateOverrides, max_file_bytes: u64) -> Self {
        Self {
            overrides,
            max_file_bytes,
        }
    }

    /// Expand inputs: files are kept as given, directories are walked for `*.stl`
    pub fn discover(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(input)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file() && is_stl(e.path()))
                    .map(|e| e.into_path())
                    .collect();
                found.sort();
                debug!(dir = %input.display(), count = found.len(), "discovered STL files");
                files.extend(found);
            } else if input.exists() {
                files.push(input.clone());
            } else {
                bail!("Input file not found: {}", input.display());
            }
        }

        Ok(files)
    }

    /// Quote a single file
    pub fn quote_file(&self, path: &Path) -> Result<Quote> {
        let size = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        if size > self.max_file_bytes {
            bail!(
                "{} is {} bytes, above the {} byte limit",
                path.display(),
                size,
                self.max_file_bytes
            );
        }

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let quote = estimate(&bytes, &self.overrides)
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(quote.with_file_name(name))
    }

    /// Quote many files in parallel, preserving input order
    pub fn quote_all(
        &self,
        paths: &[PathBuf],
        on_done: impl Fn(&QuoteOutcome) + Sync,
    ) -> Vec<QuoteOutcome> {
        paths
            .par_iter()
            .map(|path| {
                let start = Instant::now();
                let result = self.quote_file(path);
                let outcome = QuoteOutcome {
                    path: path.clone(),
                    result,
                    duration: start.elapsed(),
                };
                on_done(&outcome);
                outcome
            })
            .collect()
    }
}

fn is_stl(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("stl"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::io::export_stl;
    use nalgebra::Vector3;

    fn write_cube(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        export_stl(&mesh, &path).unwrap();
        path
    }

    #[test]
    fn test_discover_walks_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("nested"))?;
        write_cube(dir.path(), "b.stl");
        write_cube(&dir.path().join("nested"), "a.STL");
        std::fs::write(dir.path().join("notes.txt"), "not a mesh")?;

        let files = Runner::discover(&[dir.path().to_path_buf()])?;
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_stl(f)));

        Ok(())
    }

    #[test]
    fn test_discover_missing_input() {
        assert!(Runner::discover(&[PathBuf::from("/nonexistent/part.stl")]).is_err());
    }

    #[test]
    fn test_size_limit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_cube(dir.path(), "cube.stl");

        let strict = Runner::new(RateOverrides::none(), 100);
        let err = strict.quote_file(&path).unwrap_err();
        assert!(err.to_string().contains("byte limit"));

        let relaxed = Runner::new(RateOverrides::none(), 10_000);
        let quote = relaxed.quote_file(&path)?;
        assert_eq!(quote.file_name.as_deref(), Some("cube.stl"));

        Ok(())
    }

    #[test]
    fn test_quote_all_preserves_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let good = write_cube(dir.path(), "good.stl");
        let bad = dir.path().join("bad.stl");
        // Header declares five triangles but carries none
        let mut truncated = vec![0u8; 80];
        truncated.extend_from_slice(&5u32.to_le_bytes());
        std::fs::write(&bad, truncated)?;

        let runner = Runner::new(RateOverrides::none(), u64::MAX);
        let outcomes = runner.quote_all(&[good.clone(), bad.clone()], |_| {});

        assert_eq!(outcomes[0].path, good);
        assert!(outcomes[0].result.is_ok());
        assert_eq!(outcomes[1].path, bad);
        assert!(outcomes[1].result.is_err());

        Ok(())
    }
}
