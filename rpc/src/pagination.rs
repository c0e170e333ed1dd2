//! Cursor-based pagination for history endpoints.
//!
//! The node hands back an opaque `fingerprint` with each page; passing it on the
//! next request continues where the previous page ended.

use serde::Serialize;

/// Default page size for history requests.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Largest page the node accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Parameters of one history page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub limit: u32,
    #[serde(rename = "fingerprint", skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl PageRequest {
    /// A request for `limit` items, clamped to [1, MAX_PAGE_SIZE].
    pub fn new(limit: u32, cursor: Option<String>) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            cursor,
        }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(limit, None)
    }
}

/// Whether another page may follow: true iff this page came back full.
pub fn has_more(returned: usize, page_size: u32) -> bool {
    returned == page_size as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_limit() {
        assert_eq!(PageRequest::first(0).limit, 1);
        assert_eq!(PageRequest::first(10_000).limit, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::first(5).limit, 5);
    }

    #[test]
    fn full_page_has_more() {
        assert!(has_more(5, 5));
        assert!(!has_more(4, 5));
        assert!(!has_more(0, 5));
    }

    #[test]
    fn cursor_serializes_as_fingerprint() {
        let req = PageRequest::new(5, Some("abc".into()));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fingerprint"], "abc");
        let first = serde_json::to_value(PageRequest::first(5)).unwrap();
        assert!(first.get("fingerprint").is_none());
    }
}
