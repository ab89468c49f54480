pub const APP_NAME: &str = "Multi-Team Trade Analyzer";
pub const APP_REPO_URL: &str = "https://github.com/rajrai/multi-team-trade-analyzer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}
