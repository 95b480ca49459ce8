use crate::foundation::error::ViewfinderResult;

/// Event name carried by preview notifications on the host push channel.
pub const PREVIEW_EVENT: &str = "viewfinder.preview";

/// Destination for rendered preview notifications.
///
/// One `send` per pipeline invocation, fire-and-forget: the pipeline logs and
/// swallows errors from the sink, so a slow or broken transport can never fail
/// the node's primary outputs. Implementations wrap whatever push channel the
/// host provides.
pub trait PreviewSink: Send {
    /// Deliver one preview for the node identified by `node_id`.
    ///
    /// `png_base64` is a base64-encoded PNG of the composited preview buffer.
    fn send(&mut self, node_id: &str, png_base64: &str) -> ViewfinderResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Captured `(node_id, png_base64)` payloads in delivery order.
    pub(crate) sent: Vec<(String, String)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured payloads.
    pub fn sent(&self) -> &[(String, String)] {
        &self.sent
    }
}

impl PreviewSink for InMemorySink {
    fn send(&mut self, node_id: &str, png_base64: &str) -> ViewfinderResult<()> {
        self.sent.push((node_id.to_string(), png_base64.to_string()));
        Ok(())
    }
}
