use serde::{Deserialize, Serialize};

/// Deployment facts served by `/api/systemInfo`, shown in the footer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    #[serde(default)]
    pub spring_h2_console_enabled: bool,
    #[serde(default, rename = "showSwaggerUILink")]
    pub show_swagger_ui_link: bool,
    #[serde(default, rename = "startQtrYYYYQ")]
    pub start_qtr: Option<String>,
    #[serde(default, rename = "endQtrYYYYQ")]
    pub end_qtr: Option<String>,
    #[serde(default)]
    pub source_repo: Option<String>,
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}
