use serde::{Deserialize, Serialize};

/// A hyperlink to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Media type of the target (e.g., "application/hal+json")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// Links attached to a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl PaginationLinks {
    pub fn is_empty(&self) -> bool {
        self.self_link.is_none()
            && self.previous.is_none()
            && self.next.is_none()
            && self.documentation.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_pagination_links_with_nulls() {
        let json = r#"{
            "self": { "href": "https://api.mollie.com/v2/chargebacks", "type": "application/hal+json" },
            "previous": null,
            "next": null,
            "documentation": { "href": "https://docs.mollie.com/reference/v2/chargebacks-api/list-chargebacks", "type": "text/html" }
        }"#;
        let links: PaginationLinks = serde_json::from_str(json).unwrap();
        assert_eq!(
            links.self_link.unwrap().media_type.as_deref(),
            Some("application/hal+json")
        );
        assert!(links.previous.is_none());
        assert!(links.next.is_none());
        assert!(links.documentation.is_some());
    }

    #[test]
    fn link_without_href_round_trips() {
        let link: Link = serde_json::from_str(r#"{"type":"text/html"}"#).unwrap();
        assert!(link.href.is_none());
        assert_eq!(link.media_type.as_deref(), Some("text/html"));

        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"type":"text/html"}"#);
        assert_eq!(serde_json::from_str::<Link>(&json).unwrap(), link);
    }

    #[test]
    fn empty_links_serialize_to_empty_object() {
        let json = serde_json::to_string(&PaginationLinks::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
