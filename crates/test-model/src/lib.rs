//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::future::ready;
use std::sync::{Arc, Mutex};

use chatbot_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

enum ScriptStep {
    Reply(ModelReply),
    Failure(String),
}

#[derive(Default)]
struct Inner {
    script: Mutex<VecDeque<ScriptStep>>,
    requests: Mutex<Vec<ModelRequest>>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how
/// the model should respond to requests, one step per request in order.
/// When the script runs out, further requests fail. The provider records
/// every request it receives, so tests can assert on the exact payloads
/// and on how many calls were made.
///
/// Clones share the same script and records.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    inner: Arc<Inner>,
}

impl TestModelProvider {
    /// Creates a provider with an empty script.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scripted reply step.
    pub fn add_reply(&self, reply: PresetReply) {
        self.inner
            .script
            .lock()
            .expect("script lock poisoned")
            .push_back(ScriptStep::Reply(reply.into_reply()));
    }

    /// Appends a scripted failure step.
    pub fn add_failure<S: Into<String>>(&self, message: S) {
        self.inner
            .script
            .lock()
            .expect("script lock poisoned")
            .push_back(ScriptStep::Failure(message.into()));
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.inner
            .requests
            .lock()
            .expect("requests lock poisoned")
            .len()
    }

    /// Returns the requests received so far, in order.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.inner
            .requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        self.inner
            .requests
            .lock()
            .expect("requests lock poisoned")
            .push(req.clone());

        let step = self
            .inner
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front();
        let result = match step {
            Some(ScriptStep::Reply(reply)) => Ok(reply),
            Some(ScriptStep::Failure(message)) => Err(Error {
                message,
                kind: ErrorKind::Other,
            }),
            None => Err(Error {
                message: "no more scripted replies".to_owned(),
                kind: ErrorKind::RateLimitExceeded,
            }),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use chatbot_model::ModelMessage;

    use super::*;

    fn request(input: &str) -> ModelRequest {
        ModelRequest {
            model: None,
            messages: vec![ModelMessage::User(input.to_owned())],
            tools: vec![],
        }
    }

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let provider = TestModelProvider::new();
        provider.add_reply(PresetReply::with_content("first"));
        provider.add_reply(
            PresetReply::with_content("second").with_tool_call(
                "call:1",
                "read_file",
                r#"{"filename":"todo.txt"}"#,
            ),
        );

        let reply = provider.send_request(&request("Hi")).await.unwrap();
        assert_eq!(reply.content, "first");
        assert!(reply.tool_calls.is_empty());

        let reply = provider
            .send_request(&request("Check my todo"))
            .await
            .unwrap();
        assert_eq!(reply.content, "second");
        assert_eq!(reply.tool_calls.len(), 1);
        assert_eq!(reply.tool_calls[0].name, "read_file");

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let provider = TestModelProvider::new();
        provider.add_failure("boom");
        let err = provider.send_request(&request("Hi")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(format!("{err}"), "boom");
    }

    #[tokio::test]
    async fn test_exhausted_script() {
        let provider = TestModelProvider::new();
        let err = provider.send_request(&request("Hi")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
    }
}
