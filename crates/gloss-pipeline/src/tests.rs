//! Integration tests for the Pipeline

#[cfg(test)]
mod tests {
    use crate::{
        parse_csv, to_csv, AnnotationFailurePolicy, Pipeline, PipelineConfig, PipelineError,
        StopWords,
    };
    use async_trait::async_trait;
    use gloss_article::{ArticleError, StaticArticleSource};
    use gloss_domain::traits::{ArticleSource, LlmProvider};
    use gloss_domain::{AnnotationMode, CompletionOptions, Prompt};
    use gloss_llm::{LlmConfig, LlmError, MockProvider, OpenAiProvider};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const ARTICLE: &str = "Cats are popular pets. Dogs are loyal companions.";
    const SUMMARY: &str = "Cats are popular pets.\nDogs are loyal companions.";

    fn scripted_llm() -> MockProvider {
        let mut llm = MockProvider::new("some annotation");
        llm.add_response("learning material", SUMMARY);
        llm.add_response("'cats'", "Feline, Kitty");
        llm
    }

    /// Article source that fails with a fixed error
    struct FailingSource;

    #[async_trait]
    impl ArticleSource for FailingSource {
        type Error = ArticleError;

        async fn fetch_text(&self, _url: &str) -> Result<String, Self::Error> {
            Err(ArticleError::Network("dns error".to_string()))
        }
    }

    /// Provider whose reply time shrinks with each call, so later calls finish first
    struct StaggeredProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for StaggeredProvider {
        type Error = LlmError;

        async fn complete(&self, prompt: &Prompt, _options: &CompletionOptions) -> Result<String, Self::Error> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) as u64;
            tokio::time::sleep(Duration::from_millis(200u64.saturating_sub(n * 40))).await;
            Ok(prompt.user().to_string())
        }
    }

    /// Provider that never answers in time
    struct StalledProvider;

    #[async_trait]
    impl LlmProvider for StalledProvider {
        type Error = LlmError;

        async fn complete(&self, _prompt: &Prompt, _options: &CompletionOptions) -> Result<String, Self::Error> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_end_to_end_synonyms() {
        let llm = scripted_llm();
        let pipeline = Pipeline::new(llm.clone(), StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap()
            .with_stop_words(StopWords::from_words(["are"]));

        let output = pipeline.run("  https://example.com/pets  ", AnnotationMode::Synonym).await.unwrap();

        assert_eq!(output.url, "https://example.com/pets");
        assert_eq!(output.summary.as_str(), SUMMARY);
        let words: Vec<&str> = output.keywords.iter().map(|k| k.as_str()).collect();
        assert_eq!(words, vec!["cats", "popular", "pets", "dogs", "loyal", "companions"]);

        let first = &output.table.rows()[0];
        assert_eq!(first.keyword.as_str(), "cats");
        assert_eq!(first.annotation.to_string(), "feline, kitty");
        assert_eq!(output.table.len(), 6);

        // One summary call plus one call per keyword
        assert_eq!(llm.call_count(), 7);
        let prompts = llm.prompts();
        assert!(prompts[0].user().contains(ARTICLE));
        assert!(prompts[1].user().contains("synonyms for the word 'cats'"));
    }

    #[tokio::test]
    async fn test_end_to_end_csv_export() {
        let pipeline = Pipeline::new(scripted_llm(), StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap();

        let output = pipeline.run("https://example.com/pets", AnnotationMode::Synonym).await.unwrap();
        let parsed = parse_csv(&to_csv(&output.table).unwrap()).unwrap();

        assert_eq!(parsed.header, vec!["Word", "Synonym"]);
        assert_eq!(parsed.rows[0], ("cats".to_string(), "feline, kitty".to_string()));
        assert_eq!(parsed.rows.len(), output.keywords.len());
    }

    #[tokio::test]
    async fn test_empty_extraction_skips_summarizer() {
        let llm = scripted_llm();
        let pipeline = Pipeline::new(llm.clone(), StaticArticleSource::new(""), PipelineConfig::default())
            .unwrap();

        let result = pipeline.run("https://example.com/empty", AnnotationMode::Explanation).await;

        assert!(matches!(result, Err(PipelineError::EmptyExtraction)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_article_is_empty() {
        let pipeline = Pipeline::new(scripted_llm(), StaticArticleSource::new(" \n\t "), PipelineConfig::default())
            .unwrap();
        let result = pipeline.run("https://example.com", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::EmptyExtraction)));
    }

    #[tokio::test]
    async fn test_blank_url_rejected() {
        let llm = scripted_llm();
        let pipeline = Pipeline::new(llm.clone(), StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap();

        let result = pipeline.run("   ", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::InvalidInput(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_network_failure() {
        let llm = scripted_llm();
        let pipeline = Pipeline::new(llm.clone(), FailingSource, PipelineConfig::default()).unwrap();

        let result = pipeline.run("https://example.invalid", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::NetworkFailure(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_stops_run() {
        let provider = OpenAiProvider::new(LlmConfig::default()).unwrap();
        let pipeline = Pipeline::new(provider, StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap();

        let result = pipeline.run("https://example.com", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_summary_without_keywords() {
        let llm = MockProvider::new("1. 2. 3.");
        let pipeline = Pipeline::new(llm.clone(), StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap();

        let result = pipeline.run("https://example.com", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::NoKeywordsFound)));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_annotation_failure_aborts_by_default() {
        let mut llm = scripted_llm();
        llm.add_error("'dogs'");
        let pipeline = Pipeline::new(llm, StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap();

        let result = pipeline.run("https://example.com", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::ApiFailure(_))));
    }

    #[tokio::test]
    async fn test_annotation_failure_marked_when_configured() {
        let mut llm = scripted_llm();
        llm.add_error("'dogs'");
        let config = PipelineConfig {
            annotation_failure: AnnotationFailurePolicy::MarkRow,
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(llm, StaticArticleSource::new(ARTICLE), config).unwrap();

        let output = pipeline.run("https://example.com", AnnotationMode::Synonym).await.unwrap();
        let dogs = output
            .table
            .rows()
            .iter()
            .find(|r| r.keyword.as_str() == "dogs")
            .unwrap();
        assert!(dogs.annotation.is_failed());
        assert_eq!(output.table.failed_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_annotation_preserves_order() {
        for mode in [AnnotationMode::Explanation, AnnotationMode::Synonym] {
            let provider = StaggeredProvider {
                calls: AtomicUsize::new(0),
            };
            let config = PipelineConfig {
                annotation_concurrency: 4,
                ..PipelineConfig::default()
            };
            let pipeline = Pipeline::new(provider, StaticArticleSource::new(ARTICLE), config).unwrap();

            let summary = gloss_domain::Summary::from_response("alpha bravo charlie delta echo");
            let keywords = pipeline.extract_keywords(&summary).unwrap();
            let table = pipeline.build_table(&keywords, mode).await.unwrap();

            assert_eq!(table.len(), keywords.len());
            assert_eq!(table.header()[1], mode.as_str());
            for (row, keyword) in table.rows().iter().zip(&keywords) {
                assert_eq!(&row.keyword, keyword);
                assert!(row.annotation.to_string().contains(&format!("'{}'", keyword)));
            }
        }
    }

    #[tokio::test]
    async fn test_end_to_end_explanations() {
        let mut llm = MockProvider::new("a word");
        llm.add_response("learning material", SUMMARY);
        llm.add_response("'cats'", "Small domesticated Felines.");
        let pipeline = Pipeline::new(llm.clone(), StaticArticleSource::new(ARTICLE), PipelineConfig::default())
            .unwrap()
            .with_stop_words(StopWords::from_words(["are"]));

        let output = pipeline.run("https://example.com/pets", AnnotationMode::Explanation).await.unwrap();

        assert_eq!(output.table.header(), ["Word", "Explanation"]);
        let words: Vec<&str> = output.table.rows().iter().map(|r| r.keyword.as_str()).collect();
        let expected: Vec<&str> = output.keywords.iter().map(|k| k.as_str()).collect();
        assert_eq!(words, expected);
        assert_eq!(output.table.rows()[0].annotation.to_string(), "small domesticated felines.");
        assert!(llm.prompts()[1].user().contains("explanation for the word 'cats'"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_timeout() {
        let config = PipelineConfig {
            stage_timeout_secs: 5,
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(StalledProvider, StaticArticleSource::new(ARTICLE), config).unwrap();

        let result = pipeline.run("https://example.com", AnnotationMode::Synonym).await;
        assert!(matches!(result, Err(PipelineError::Timeout("Summarization", 5))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            keyword_limit: 0,
            ..PipelineConfig::default()
        };
        let result = Pipeline::new(MockProvider::default(), StaticArticleSource::default(), config);
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
