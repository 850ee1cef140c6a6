use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::compatibility::is_compatible;
use crate::domain::entities::sheet::HeaderExtraction;
use crate::domain::error::MergeError;

/// Logical identity of an input file: the last component of its path or
/// name. Both `/` and `\` count as separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity(String);

impl FileIdentity {
    pub fn from_name(name: &str) -> Self {
        let last = name
            .rsplit(|c: char| c == '/' || c == '\\')
            .find(|part| !part.is_empty())
            .unwrap_or(name);
        FileIdentity(last.to_string())
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub display_name: String,
    pub bytes: Arc<[u8]>,
}

impl FileInput {
    pub fn new(display_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            display_name: display_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn identity(&self) -> FileIdentity {
        FileIdentity::from_name(&self.display_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub identity: FileIdentity,
    pub display_name: String,
    pub bytes: Arc<[u8]>,
    pub headers: Vec<String>,
    pub sheet_name: String,
    compatible: bool,
}

impl LoadedFile {
    pub fn new(input: FileInput, extraction: HeaderExtraction) -> Self {
        Self {
            identity: input.identity(),
            display_name: input.display_name,
            bytes: input.bytes,
            headers: extraction.headers,
            sheet_name: extraction.sheet_name,
            compatible: true,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.compatible
    }
}

/// Files loaded in the current session, in upload order. Index 0 is the
/// reference every other file is compared against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFileList {
    files: Vec<LoadedFile>,
}

impl SessionFileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[LoadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn compatible_files(&self) -> Vec<&LoadedFile> {
        self.files.iter().filter(|file| file.compatible).collect()
    }

    pub fn has_compatible(&self) -> bool {
        self.files.iter().any(|file| file.compatible)
    }

    /// Drops inputs whose identity is already loaded or repeated earlier in
    /// the same batch. Fails when nothing new is left.
    pub fn filter_new(&self, inputs: Vec<FileInput>) -> Result<Vec<FileInput>, MergeError> {
        let mut seen: HashSet<FileIdentity> =
            self.files.iter().map(|file| file.identity.clone()).collect();
        let mut first_duplicate = None;
        let mut fresh = Vec::with_capacity(inputs.len());

        for input in inputs {
            let identity = input.identity();
            if seen.insert(identity.clone()) {
                fresh.push(input);
            } else if first_duplicate.is_none() {
                first_duplicate = Some(identity);
            }
        }

        match (fresh.is_empty(), first_duplicate) {
            (true, Some(identity)) => Err(MergeError::DuplicateFile(identity)),
            _ => Ok(fresh),
        }
    }

    /// Appends a batch. Existing flags are left alone unless the list was
    /// empty, in which case the first new entry becomes the reference.
    pub fn add_files(mut self, entries: Vec<LoadedFile>) -> Self {
        if entries.is_empty() {
            return self;
        }
        let start = self.files.len();
        self.files.extend(entries);

        if let Some((reference, rest)) = self.files.split_first_mut() {
            reference.compatible = true;
            for file in rest.iter_mut().skip(start.saturating_sub(1)) {
                file.compatible = is_compatible(&reference.headers, &file.headers);
            }
        }
        self
    }

    /// Removes one entry. Removing the reference re-checks everything against
    /// the promoted entry. Out-of-range indices leave the list unchanged.
    pub fn remove_file(mut self, index: usize) -> Self {
        if index >= self.files.len() {
            return self;
        }
        self.files.remove(index);
        if index == 0 {
            self.recompute_all();
        }
        self
    }

    fn recompute_all(&mut self) {
        if let Some((reference, rest)) = self.files.split_first_mut() {
            reference.compatible = true;
            for file in rest {
                file.compatible = is_compatible(&reference.headers, &file.headers);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Empty,
    Loading,
    Populated,
    Merging,
}

impl SessionPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, SessionPhase::Loading | SessionPhase::Merging)
    }

    pub fn begin_load(self) -> Result<Self, MergeError> {
        match self {
            SessionPhase::Empty | SessionPhase::Populated => Ok(SessionPhase::Loading),
            SessionPhase::Loading | SessionPhase::Merging => Err(MergeError::Busy),
        }
    }

    pub fn begin_merge(self) -> Result<Self, MergeError> {
        match self {
            SessionPhase::Populated => Ok(SessionPhase::Merging),
            SessionPhase::Empty => Err(MergeError::NoCompatibleFiles),
            SessionPhase::Loading | SessionPhase::Merging => Err(MergeError::Busy),
        }
    }

    pub fn settle(list: &SessionFileList) -> Self {
        if list.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Populated
        }
    }
}
