//! Size-adaptive content search.
//!
//! Matching is a case-sensitive literal substring test. There is no notion of
//! identifier boundaries: the key `user.name` is found inside
//! `t("user.name.first")` as well. Keys that are prefixes of other keys are
//! therefore reported as used whenever the longer key is.
//!
//! Both strategies run the same substring test over the whole buffer, so they
//! always agree on whether a key is present. They differ only in whether the
//! line of the first occurrence is computed.

/// How a file's content is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// One substring test over the whole buffer. No line attribution.
    WholeFile,
    /// Reports the line where the first occurrence starts.
    LineScoped,
}

/// Where a key was found inside one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMatch {
    /// 1-based line number; `None` under [`SearchStrategy::WholeFile`].
    pub line: Option<usize>,
}

impl SearchStrategy {
    /// Files strictly larger than the threshold are searched whole.
    pub fn classify(file_size_bytes: u64, size_threshold_bytes: u64) -> Self {
        if file_size_bytes > size_threshold_bytes {
            SearchStrategy::WholeFile
        } else {
            SearchStrategy::LineScoped
        }
    }

    pub fn find(&self, content: &str, key: &str) -> Option<ContentMatch> {
        match self {
            SearchStrategy::WholeFile => content
                .contains(key)
                .then_some(ContentMatch { line: None }),
            SearchStrategy::LineScoped => content.find(key).map(|offset| ContentMatch {
                line: Some(content[..offset].matches('\n').count() + 1),
            }),
        }
    }
}
