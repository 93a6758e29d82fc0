//! Framework teardown request

use serde::{Deserialize, Serialize};

/// Form body of `POST /teardown`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardownForm {
    #[serde(rename = "frameworkId")]
    pub framework_id: String,
}

impl TeardownForm {
    pub fn new(framework_id: impl Into<String>) -> Self {
        Self {
            framework_id: framework_id.into(),
        }
    }
}
