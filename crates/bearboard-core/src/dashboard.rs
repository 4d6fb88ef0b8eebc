//! Dashboard payloads and frame preparation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BoardError, BoardResult};

/// Marker the generator emits where the expand toggle belongs.
pub const EXPAND_BUTTON_MARKER: &str = r#"<button id="expand-button">"#;

/// Sandbox flags for the dashboard iframe.
pub const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-modals allow-downloads";

const EXPAND_ICON_URL: &str =
    "https://ad-vise.ai/static/media/preview.8100a3e892e484e16cfbe8dfc4506719.svg";

/// Outer envelope returned by the dashboard API.
#[derive(Debug, Clone, Default, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    body: Option<Value>,
}

/// Generated dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOutput {
    #[serde(default)]
    pub dashboard_html: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    /// Error text some upstream failures put in the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DashboardOutput {
    /// Neither HTML nor a URL came back.
    pub fn is_empty(&self) -> bool {
        self.html().is_none() && self.url().is_none()
    }

    pub fn html(&self) -> Option<&str> {
        self.dashboard_html.as_deref().filter(|s| !s.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.dashboard_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Parse the API response text.
    ///
    /// The envelope's `body` is normally a JSON-encoded string; an inline
    /// object is accepted too. A missing body is [`BoardError::NoData`].
    pub fn from_response(text: &str) -> BoardResult<Self> {
        let envelope: ApiEnvelope =
            serde_json::from_str(text).map_err(|e| BoardError::Payload(e.to_string()))?;

        match envelope.body {
            None | Some(Value::Null) => Err(BoardError::NoData),
            Some(Value::String(inner)) if inner.is_empty() => Err(BoardError::NoData),
            Some(Value::String(inner)) => {
                serde_json::from_str(&inner).map_err(|e| BoardError::Payload(e.to_string()))
            }
            Some(object @ Value::Object(_)) => {
                serde_json::from_value(object).map_err(|e| BoardError::Payload(e.to_string()))
            }
            Some(other) => Err(BoardError::Payload(format!(
                "unexpected body type: {}",
                other
            ))),
        }
    }
}

/// Messages the embedded dashboard posts to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMessage {
    Expand,
    Collapse,
}

impl FrameMessage {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "expandClicked" => Some(FrameMessage::Expand),
            "collapseClicked" => Some(FrameMessage::Collapse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameMessage::Expand => "expandClicked",
            FrameMessage::Collapse => "collapseClicked",
        }
    }

    /// Expanded state after this message.
    pub fn expanded(&self) -> bool {
        matches!(self, FrameMessage::Expand)
    }
}

/// Replace the expand marker with a toggle that posts [`FrameMessage`]s to
/// the parent window. HTML without the marker is returned unchanged.
pub fn inject_expand_toggle(html: &str, expanded: bool) -> String {
    if !html.contains(EXPAND_BUTTON_MARKER) {
        return html.to_string();
    }

    let toggle = format!(
        r#"
      <button id="expand-button" onclick="toggleExpand()">
        <img src="{icon}"/>
      </button>
      <script>
        let isExpanded = {expanded};
        function toggleExpand() {{
          isExpanded = !isExpanded;
          window.parent.postMessage(isExpanded ? '{expand}' : '{collapse}', '*');
        }}
      </script>"#,
        icon = EXPAND_ICON_URL,
        expanded = expanded,
        expand = FrameMessage::Expand.as_str(),
        collapse = FrameMessage::Collapse.as_str(),
    );
    html.replacen(EXPAND_BUTTON_MARKER, &toggle, 1)
}

/// Frame width for the expanded state.
pub fn frame_width(expanded: bool) -> &'static str {
    if expanded {
        "100%"
    } else {
        "80%"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_body() {
        let text = r#"{"body": "{\"dashboard_html\": \"<h1>hi</h1>\"}"}"#;
        let out = DashboardOutput::from_response(text).unwrap();
        assert_eq!(out.html(), Some("<h1>hi</h1>"));
        assert_eq!(out.url(), None);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_object_body() {
        let text = r#"{"statusCode": 200, "body": {"dashboard_url": "https://x/y.html"}}"#;
        let out = DashboardOutput::from_response(text).unwrap();
        assert_eq!(out.url(), Some("https://x/y.html"));
    }

    #[test]
    fn test_missing_body_is_no_data() {
        assert!(matches!(
            DashboardOutput::from_response(r#"{"message": "Forbidden"}"#),
            Err(BoardError::NoData)
        ));
    }

    #[test]
    fn test_error_body_is_empty_output() {
        let text = r#"{"body": "{\"error\": \"Dashboard URL not returned.\"}"}"#;
        let out = DashboardOutput::from_response(text).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.error.as_deref(), Some("Dashboard URL not returned."));
    }

    #[test]
    fn test_garbage_is_payload_error() {
        assert!(matches!(
            DashboardOutput::from_response("<html>"),
            Err(BoardError::Payload(_))
        ));
    }

    #[test]
    fn test_inject_expand_toggle() {
        let html = r#"<div><button id="expand-button"></button></div>"#;
        let out = inject_expand_toggle(html, true);
        assert!(out.contains("onclick=\"toggleExpand()\""));
        assert!(out.contains("let isExpanded = true;"));
        assert!(out.contains("'expandClicked' : 'collapseClicked'"));
    }

    #[test]
    fn test_inject_without_marker_is_identity() {
        let html = "<p>plain</p>";
        assert_eq!(inject_expand_toggle(html, false), html);
    }

    #[test]
    fn test_frame_message() {
        assert_eq!(FrameMessage::parse("expandClicked"), Some(FrameMessage::Expand));
        assert_eq!(FrameMessage::parse("collapseClicked"), Some(FrameMessage::Collapse));
        assert_eq!(FrameMessage::parse("resize"), None);
        assert!(FrameMessage::Expand.expanded());
        assert_eq!(frame_width(false), "80%");
    }
}
