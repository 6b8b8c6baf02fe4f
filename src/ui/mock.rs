//! Recording host for testing.
//!
//! `MockHost` implements all three host traits and captures every
//! interaction for later assertion. Clones share one log, so the same host
//! can be installed as dialog, launcher and exit at once.
//!
//! # Example
//!
//! ```
//! use gpu_gate::ui::{DialogChoice, MessageBox, MockHost, UrlLauncher};
//!
//! let host = MockHost::answering(DialogChoice::Yes);
//! let mut dialog = host.clone();
//! let mut launcher = host.clone();
//!
//! if dialog.prompt_yes_no("Missing Features:", "Incompatible Hardware").is_yes() {
//!     launcher.open_url("https://example.com/?missing=vrs");
//! }
//!
//! assert_eq!(host.prompts().len(), 1);
//! assert_eq!(host.opened_urls(), vec!["https://example.com/?missing=vrs".to_string()]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{DialogChoice, MessageBox, ProcessExit, UrlLauncher};

/// A dialog shown through [`MockHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPrompt {
    pub body: String,
    pub title: String,
}

#[derive(Debug)]
struct HostLog {
    answer: DialogChoice,
    prompts: Vec<RecordedPrompt>,
    urls: Vec<String>,
    exits: Vec<(bool, String)>,
}

/// Mock host for testing. Answers every dialog with a fixed choice.
#[derive(Debug, Clone)]
pub struct MockHost {
    log: Rc<RefCell<HostLog>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// Host answering No.
    pub fn new() -> Self {
        Self::answering(DialogChoice::No)
    }

    pub fn answering(answer: DialogChoice) -> Self {
        Self {
            log: Rc::new(RefCell::new(HostLog {
                answer,
                prompts: Vec::new(),
                urls: Vec::new(),
                exits: Vec::new(),
            })),
        }
    }

    /// Change the answer for later dialogs.
    pub fn set_answer(&self, answer: DialogChoice) {
        self.log.borrow_mut().answer = answer;
    }

    pub fn prompts(&self) -> Vec<RecordedPrompt> {
        self.log.borrow().prompts.clone()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.log.borrow().urls.clone()
    }

    /// Exit requests as `(immediate, reason)`.
    pub fn exits(&self) -> Vec<(bool, String)> {
        self.log.borrow().exits.clone()
    }

    /// True when nothing at all was shown, opened or requested.
    pub fn is_untouched(&self) -> bool {
        let log = self.log.borrow();
        log.prompts.is_empty() && log.urls.is_empty() && log.exits.is_empty()
    }
}

impl MessageBox for MockHost {
    fn prompt_yes_no(&mut self, body: &str, title: &str) -> DialogChoice {
        let mut log = self.log.borrow_mut();
        log.prompts.push(RecordedPrompt {
            body: body.to_string(),
            title: title.to_string(),
        });
        log.answer
    }
}

impl UrlLauncher for MockHost {
    fn open_url(&mut self, url: &str) {
        self.log.borrow_mut().urls.push(url.to_string());
    }
}

impl ProcessExit for MockHost {
    fn request_exit(&mut self, immediate: bool, reason: &str) {
        self.log
            .borrow_mut()
            .exits
            .push((immediate, reason.to_string()));
    }
}
