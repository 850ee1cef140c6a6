use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::domain::entities::session::{FileInput, LoadedFile, SessionFileList};
use crate::domain::entities::sheet::HeaderExtraction;
use crate::domain::error::MergeError;
use crate::usecase::ports::codec::WorkbookCodec;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub display_name: String,
    pub error: MergeError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub files: SessionFileList,
    pub added: usize,
    pub failures: Vec<BatchFailure>,
}

pub struct ExtractService {
    codec: Arc<dyn WorkbookCodec>,
}

impl ExtractService {
    pub fn new(codec: Arc<dyn WorkbookCodec>) -> Self {
        Self { codec }
    }

    pub fn extract(&self, input: &FileInput) -> Result<HeaderExtraction, MergeError> {
        self.codec
            .decode(&input.display_name, &input.bytes)
            .map(|sheet| sheet.header_extraction())
    }

    /// Extracts headers for every new input of one upload batch and returns
    /// the next list. Files that fail are reported and left out; the rest
    /// are added in a single step.
    pub fn load_batch(
        &self,
        list: SessionFileList,
        inputs: Vec<FileInput>,
    ) -> Result<BatchOutcome, MergeError> {
        let fresh = list.filter_new(inputs)?;

        let results: Vec<(String, Result<LoadedFile, MergeError>)> = thread::scope(|scope| {
            let handles: Vec<_> = fresh
                .into_iter()
                .map(|input| {
                    let name = input.display_name.clone();
                    let handle = scope.spawn(move || {
                        self.extract(&input)
                            .map(|extraction| LoadedFile::new(input, extraction))
                    });
                    (name, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(name, handle)| {
                    let result = handle.join().unwrap_or_else(|_| {
                        Err(MergeError::Decode {
                            file: name.clone(),
                            reason: "header extraction panicked".to_string(),
                        })
                    });
                    (name, result)
                })
                .collect()
        });

        let mut loaded = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (display_name, result) in results {
            match result {
                Ok(file) => {
                    debug!(
                        file = %display_name,
                        sheet = %file.sheet_name,
                        headers = file.headers.len(),
                        "extracted headers"
                    );
                    loaded.push(file);
                }
                Err(error) => {
                    warn!(file = %display_name, %error, "failed to extract headers");
                    failures.push(BatchFailure {
                        display_name,
                        error,
                    });
                }
            }
        }

        let added = loaded.len();
        let files = list.add_files(loaded);
        info!(
            added,
            failed = failures.len(),
            total = files.len(),
            "loaded upload batch"
        );
        Ok(BatchOutcome {
            files,
            added,
            failures,
        })
    }
}
