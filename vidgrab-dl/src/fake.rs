//! In-memory [`Extractor`] for offline tests.

use crate::dl::{DownloadOptions, Extractor, ExtractorError, InfoDict};
use std::cell::RefCell;

/// One recorded `extract_info` call.
#[derive(Clone, Debug)]
pub struct Call {
    pub url: String,
    pub params: serde_json::Value,
    pub download: bool,
}

/// Answers every call with the same info dict JSON or error message.
pub struct FakeExtractor {
    reply: Result<&'static str, &'static str>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeExtractor {
    pub fn info(json: &'static str) -> Self {
        Self {
            reply: Ok(json),
            calls: RefCell::default(),
        }
    }

    pub fn raising(message: &'static str) -> Self {
        Self {
            reply: Err(message),
            calls: RefCell::default(),
        }
    }

    pub fn last_call(&self) -> Call {
        self.calls.borrow().last().cloned().expect("no calls recorded")
    }
}

impl Extractor for FakeExtractor {
    fn extract_info(
        &self,
        url: &str,
        opts: &DownloadOptions,
        download: bool,
    ) -> Result<InfoDict, ExtractorError> {
        self.calls.borrow_mut().push(Call {
            url: url.to_string(),
            params: serde_json::to_value(opts)?,
            download,
        });

        match self.reply {
            Ok(json) => Ok(serde_json::from_str(json)?),
            Err(message) => Err(ExtractorError::Raised(message.to_string())),
        }
    }
}
