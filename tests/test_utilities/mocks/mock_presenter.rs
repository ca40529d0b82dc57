use course_planner::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that captures presented content for assertions
#[derive(Clone, Default)]
pub struct MockPresenter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every presented chunk, in presentation order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// The full captured transcript
    pub fn transcript(&self) -> String {
        self.messages().concat()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.messages.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
