use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::sync::Notify;

mod common {
    use super::*;

    pub(super) const PAYLOAD: &str = r#"[
        {"year": 2009, "id": "1", "title": "Up", "rating": 0},
        {"year": 2017, "id": "2", "title": "It", "rating": 3}
    ]"#;

    /// Counts fetches and holds each one until the gate is opened.
    pub(super) struct GatedSource {
        pub(super) fetches: AtomicUsize,
        pub(super) gate: Notify,
        pub(super) fail: bool,
    }

    impl GatedSource {
        pub(super) fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fetches: AtomicUsize::new(0),
                gate: Notify::new(),
                fail,
            })
        }

        pub(super) fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatasetSource for GatedSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.fail {
                Err(LoadError::Request {
                    message: "connection reset".to_string(),
                })
            } else {
                Ok(PAYLOAD.as_bytes().to_vec())
            }
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    /// Fails the first `failures` fetches, then serves the payload.
    pub(super) struct FlakySource {
        pub(super) fetches: AtomicUsize,
        pub(super) failures: usize,
    }

    #[async_trait]
    impl DatasetSource for FlakySource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                Err(LoadError::Status {
                    url: "flaky".to_string(),
                    status: 503,
                })
            } else {
                Ok(PAYLOAD.as_bytes().to_vec())
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    pub(super) struct StalledSource;

    #[async_trait]
    impl DatasetSource for StalledSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(PAYLOAD.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "stalled".to_string()
        }
    }

    pub(super) struct StaticSource(pub(super) &'static str);

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            Ok(self.0.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }
}

mod load {
    use super::common::*;
    use super::*;

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let source = GatedSource::new(false);
        let loader = DatasetLoader::new(source.clone());

        let (first, second, ()) = tokio::join!(loader.load(), loader.load(), async {
            tokio::task::yield_now().await;
            source.gate.notify_one();
        });

        let first = first.unwrap();
        let second = second.unwrap();
        assert_eq!(source.fetches(), 1);
        assert!(std::ptr::eq(first.records(), second.records()));
        assert!(loader.is_loaded());
    }

    #[tokio::test]
    async fn test_later_loads_use_cache() {
        let source = GatedSource::new(false);
        source.gate.notify_one();
        let loader = DatasetLoader::new(source.clone());

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert_eq!(source.fetches(), 1);
        assert_eq!(first.len(), 2);
        assert!(std::ptr::eq(first.records(), second.records()));
    }

    #[tokio::test]
    async fn test_concurrent_waiters_share_failure() {
        let source = GatedSource::new(true);
        let loader = DatasetLoader::new(source.clone());

        let (first, second, ()) = tokio::join!(loader.load(), loader.load(), async {
            tokio::task::yield_now().await;
            source.gate.notify_one();
        });

        assert_eq!(source.fetches(), 1);
        assert_eq!(first.unwrap_err(), second.unwrap_err());
        assert!(!loader.is_loaded());
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = Arc::new(FlakySource {
            fetches: AtomicUsize::new(0),
            failures: 1,
        });
        let loader = DatasetLoader::new(source.clone());

        let first = loader.load().await;
        assert!(matches!(first, Err(LoadError::Status { status: 503, .. })));
        assert!(!loader.is_loaded());

        let second = loader.load().await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);

        loader.load().await.unwrap();
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let loader =
            DatasetLoader::new(Arc::new(StalledSource)).with_timeout(Duration::from_millis(20));

        let result = loader.load().await;

        assert_eq!(result.unwrap_err(), LoadError::TimedOut { after_ms: 20 });
    }

    #[tokio::test]
    async fn test_malformed_payload_is_error() {
        let loader = DatasetLoader::new(Arc::new(StaticSource("<html>oops</html>")));

        let result = loader.load().await;

        assert!(matches!(result, Err(LoadError::Malformed { .. })));
        assert!(!loader.is_loaded());
    }
}

mod file_source {
    use super::common::PAYLOAD;
    use super::*;

    #[tokio::test]
    async fn test_loads_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        std::fs::write(&path, PAYLOAD).unwrap();

        let loader = DatasetLoader::new(Arc::new(FileSource::new(&path)));
        let dataset = loader.load().await.unwrap();

        assert_eq!(dataset.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let loader = DatasetLoader::new(Arc::new(FileSource::new(&path)));
        let result = loader.load().await;

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_from_config_reads_configured_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        std::fs::write(&path, PAYLOAD).unwrap();
        let config = DatasetConfig {
            source: path.display().to_string(),
            timeout_secs: 5,
        };

        let loader = DatasetLoader::from_config(&config).unwrap();

        assert_eq!(loader.load().await.unwrap().len(), 2);
    }
}

mod location {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_urls() {
        assert_eq!(
            DatasetLocation::parse("https://example.org/movies.json"),
            DatasetLocation::Url("https://example.org/movies.json".to_string())
        );
        assert_eq!(
            DatasetLocation::parse("HTTP://example.org/movies.json"),
            DatasetLocation::Url("HTTP://example.org/movies.json".to_string())
        );
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            DatasetLocation::parse(" data/movies.json "),
            DatasetLocation::File(PathBuf::from("data/movies.json"))
        );
        assert_eq!(
            DatasetLocation::parse("../movies.json"),
            DatasetLocation::File(PathBuf::from("../movies.json"))
        );
    }
}
