//! Data loaded once before the page renders.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::LoadError;
use crate::features::Features;
use crate::fetch::Fetch;

pub const FEATURES_PATH: &str = "/api/v1/features";

pub const TITLE: &str = "Hammie tracker";
pub const GITHUB: &str = "runeharlyk/hamster-pedometer";
pub const COPYRIGHT: &str = "2024 runeharlyk";
pub const APP_NAME: &str = "Hamster Tracker";

/// Rendering flags declared to the host.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub prerender: bool,
    pub ssr: bool,
}

pub const PAGE_OPTIONS: PageOptions = PageOptions {
    prerender: false,
    ssr: false,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub features: Value,
    pub title: String,
    pub github: String,
    pub copyright: String,
    pub app_name: String,
}

impl PageData {
    fn with_features(features: Value) -> Self {
        Self {
            features,
            title: TITLE.to_string(),
            github: GITHUB.to_string(),
            copyright: COPYRIGHT.to_string(),
            app_name: APP_NAME.to_string(),
        }
    }

    /// Typed view over the feature list. The raw value stays untouched.
    pub fn feature_flags(&self) -> Result<Features, serde_json::Error> {
        Features::from_value(&self.features)
    }
}

/// Fetches the feature list and merges it with the static page metadata.
///
/// Fetch and parse failures are returned as-is; there is no retry or fallback.
pub async fn load<F: Fetch>(fetch: &F) -> Result<PageData, LoadError> {
    let features = fetch.get_json(FEATURES_PATH).await?;
    info!("Loaded feature list");

    Ok(PageData::with_features(features))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::errors::FetchError;

    enum Reply {
        Body(Value),
        RequestFailure,
        InvalidJson,
    }

    struct MockFetch {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl MockFetch {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Fetch for MockFetch {
        async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
            assert_eq!(path, FEATURES_PATH);
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.reply {
                Reply::Body(body) => Ok(body.clone()),
                Reply::RequestFailure => {
                    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
                    Err(FetchError::Request(err))
                }
                Reply::InvalidJson => {
                    let err = serde_json::from_str::<Value>("<html>").unwrap_err();
                    Err(FetchError::Json(err))
                }
            }
        }
    }

    #[tokio::test]
    async fn should_merge_features_with_page_metadata() {
        let fetch = MockFetch::new(Reply::Body(json!({"foo": true})));

        let data = load(&fetch).await.unwrap();

        assert_eq!(fetch.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "features": {"foo": true},
                "title": "Hammie tracker",
                "github": "runeharlyk/hamster-pedometer",
                "copyright": "2024 runeharlyk",
                "appName": "Hamster Tracker"
            })
        );
    }

    #[tokio::test]
    async fn should_propagate_fetch_rejection() {
        let fetch = MockFetch::new(Reply::RequestFailure);

        let result = load(&fetch).await;

        assert_eq!(fetch.calls.load(Ordering::SeqCst), 1);
        match result {
            Err(LoadError::Fetch(FetchError::Request(err))) => assert!(err.is_builder()),
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_propagate_invalid_json() {
        let fetch = MockFetch::new(Reply::InvalidJson);

        let result = load(&fetch).await;

        assert_eq!(fetch.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(LoadError::Fetch(FetchError::Json(_)))));
    }

    #[tokio::test]
    async fn should_pass_features_through_untouched() {
        let features = json!([1, "two", {"three": null}]);
        let fetch = MockFetch::new(Reply::Body(features.clone()));

        let data = load(&fetch).await.unwrap();

        assert_eq!(data.features, features);
    }

    #[tokio::test]
    async fn should_expose_typed_feature_flags() {
        let fetch = MockFetch::new(Reply::Body(json!({"mqtt": true, "firmware_version": "1.2.0"})));

        let flags = load(&fetch).await.unwrap().feature_flags().unwrap();

        assert!(flags.mqtt);
        assert!(!flags.ntp);
        assert_eq!(flags.firmware_version, "1.2.0");
    }

    #[test]
    fn should_disable_prerender_and_ssr() {
        assert_eq!(
            serde_json::to_value(PAGE_OPTIONS).unwrap(),
            json!({"prerender": false, "ssr": false})
        );
    }
}
