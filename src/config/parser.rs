use std::path::Path;

use tracing::warn;

use super::types::LexiaConfig;
use crate::errors::LexiaError;

pub async fn parse_config(path: &Path) -> Result<LexiaConfig, LexiaError> {
    if !path.exists() {
        return Err(LexiaError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(LexiaError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: LexiaConfig = serde_yaml::from_str(&content)?;

    if let Some(fetch) = &config.fetch {
        if fetch.timeout_secs == Some(0) {
            return Err(LexiaError::Config(
                "fetch.timeout_secs must be greater than zero".into(),
            ));
        }
        if fetch
            .user_agent
            .as_ref()
            .is_some_and(|ua| ua.trim().is_empty())
        {
            warn!("Empty fetch.user_agent configured, the default will be used at fetch time");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn parse_str(yaml: &str) -> Result<LexiaConfig, LexiaError> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        parse_config(file.path()).await
    }

    #[tokio::test]
    async fn test_parse_full_config() {
        let config = parse_str(
            "fetch:\n  user_agent: test-agent\n  timeout_secs: 10\noutput:\n  format: json\n",
        )
        .await
        .unwrap();
        assert_eq!(config.fetch.unwrap().timeout_secs, Some(10));
        assert_eq!(
            config.output.unwrap().format,
            Some(crate::config::OutputFormat::Json)
        );
    }

    #[tokio::test]
    async fn test_zero_timeout_rejected() {
        let err = parse_str("fetch:\n  timeout_secs: 0\n").await.unwrap_err();
        assert!(matches!(err, LexiaError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let err = parse_config(Path::new("/nonexistent/lexia.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, LexiaError::Config(_)));
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let err = parse_str("fetch: [not a map").await.unwrap_err();
        assert!(matches!(err, LexiaError::Yaml(_)));
    }
}
