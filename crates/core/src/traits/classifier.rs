//! Classification trait

use async_trait::async_trait;

use crate::{ClassificationResult, ClassifyRequest, Result};

/// Maps a free-text problem description to a classification result
///
/// Implementations:
/// - `RuleBasedClassifier` - deterministic keyword engine
/// - `RemoteClassifier` - LLM-backed classification with a hard timeout
/// - `FallbackClassifier` - remote first, rules on any remote failure
///
/// # Example
///
/// ```ignore
/// let classifier: Arc<dyn Classifier> = Arc::new(RuleBasedClassifier::default());
/// let result = classifier.classify(&ClassifyRequest::new("fire in my building")).await?;
/// assert!(result.has_number("101"));
/// ```
#[async_trait]
pub trait Classifier: Send + Sync + 'static {
    /// Classify one request
    ///
    /// Callers validate the request first; implementations may assume the
    /// text is non-empty.
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassificationResult>;

    /// Name for logging
    fn name(&self) -> &str;
}
