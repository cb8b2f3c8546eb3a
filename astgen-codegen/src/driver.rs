//! Generation driver that renders grammar groups to disk.

use std::fs;
use std::path::PathBuf;

use astgen_schema::{GrammarGroup, builtin};

use crate::error::CodegenError;

/// Drives generation for a set of grammar groups, writing one file per
/// group into the output directory.
#[derive(Debug, Clone)]
pub struct Driver {
    /// Directory the generated modules are written into.
    pub output_dir: PathBuf,
    /// Grammar groups to generate, in output order.
    pub groups: Vec<GrammarGroup>,
}

impl Driver {
    /// Creates a driver over the built-in grammar.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_groups(output_dir, builtin::grammar())
    }

    /// Creates a driver over explicit grammar groups.
    #[must_use]
    pub fn with_groups(output_dir: impl Into<PathBuf>, groups: Vec<GrammarGroup>) -> Self {
        Self {
            output_dir: output_dir.into(),
            groups,
        }
    }

    /// Generates every group, returning the paths written.
    ///
    /// Groups fail independently: a malformed descriptor in one group does
    /// not stop the remaining groups from being generated. The first error
    /// encountered is returned after all groups have been attempted.
    ///
    /// # Errors
    /// Returns `CodegenError` if the output directory cannot be created, or
    /// if any group fails to parse or write.
    pub fn run(&self) -> Result<Vec<PathBuf>, CodegenError> {
        fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(self.groups.len());
        let mut first_error = None;

        for group in &self.groups {
            match self.run_group(group) {
                Ok(path) => {
                    tracing::info!(
                        "Generated {} ({} types)",
                        path.display(),
                        group.types.len()
                    );
                    written.push(path);
                }
                Err(e) => {
                    tracing::error!("Group '{}' failed: {}", group.name, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }

    /// Renders one group and writes its module file.
    ///
    /// The group is parsed and rendered in full before the file is opened,
    /// so a malformed descriptor leaves any previous output untouched.
    fn run_group(&self, group: &GrammarGroup) -> Result<PathBuf, CodegenError> {
        let source = crate::generate_group(group)?;
        let path = self.output_dir.join(group.file_name());
        fs::write(&path, source)?;
        Ok(path)
    }
}
