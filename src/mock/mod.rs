//! Deterministic stand-in for the Reqres user listing.
//!
//! [`page_payload`] maps a raw `page` query value to the body the demo
//! API would return. It is a literal lookup, not pagination arithmetic:
//! only `"2"`, `"3"` and `"999"` are distinguished and every other value,
//! numeric or not, is served as page 1. Integration tests mount it behind
//! a mock HTTP server; the CLI exposes it as `mock-page`.

use crate::models::{PagePayload, Support, UserRecord};

/// Records per page advertised by the listing.
pub const PER_PAGE: u32 = 6;

/// Total users advertised by the listing.
pub const TOTAL: u32 = 12;

/// Total pages advertised by the listing.
pub const TOTAL_PAGES: u32 = 2;

/// Value assumed when the request carries no `page` parameter.
pub const DEFAULT_PAGE: &str = "1";

const SUPPORT_URL: &str = "https://reqres.in/#support-heading";
const SUPPORT_TEXT: &str = "Support us";

/// Build the listing payload for a raw `page` parameter.
///
/// Never fails: malformed values (`"abc"`, `"-1"`, `"0"`, `"null"`) are
/// treated as page 1, mirroring the lenient behaviour of the demo API.
pub fn page_payload(page: Option<&str>) -> PagePayload {
    let page = page.unwrap_or(DEFAULT_PAGE);
    match page {
        "3" => listing(3, Vec::new()),
        "999" => listing(999, Vec::new()),
        "2" => listing(2, page_two_users()),
        _ => listing(1, page_one_users()),
    }
}

/// Build the payload for a raw URL query string such as `page=2&extra=dummy`.
///
/// The first `page` pair wins; unrelated parameters are ignored.
pub fn page_payload_from_query(query: Option<&str>) -> PagePayload {
    let page = query.and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
    });
    page_payload(page.as_deref())
}

fn listing(page: i64, data: Vec<UserRecord>) -> PagePayload {
    let payload = PagePayload {
        page,
        per_page: PER_PAGE,
        total: TOTAL,
        total_pages: TOTAL_PAGES,
        data,
        support: Support {
            url: SUPPORT_URL.to_string(),
            text: SUPPORT_TEXT.to_string(),
        },
    };
    debug_assert!(payload.within_page_size(), "page {page} exceeds per_page");
    payload
}

fn page_one_users() -> Vec<UserRecord> {
    vec![reqres_user(1, "George", "Bluth")]
}

fn page_two_users() -> Vec<UserRecord> {
    vec![
        reqres_user(7, "Michael", "Lawson"),
        reqres_user(8, "Lindsay", "Ferguson"),
    ]
}

fn reqres_user(id: i64, first_name: &str, last_name: &str) -> UserRecord {
    UserRecord {
        id: Some(id),
        email: Some(format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        avatar: Some(format!("https://reqres.in/img/faces/{id}-image.jpg")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn out_of_range_pages_are_empty() {
        for (raw, expected) in [("3", 3), ("999", 999)] {
            let payload = page_payload(Some(raw));
            assert!(payload.data.is_empty(), "page {raw} should be empty");
            assert_eq!(payload.page, expected);
        }
    }

    #[test]
    fn page_two_has_two_records() {
        let payload = page_payload(Some("2"));
        assert_eq!(payload.page, 2);
        assert_eq!(payload.data.len(), 2);
        let first = &payload.data[0];
        assert_eq!(first.id, Some(7));
        assert_eq!(first.first_name.as_deref(), Some("Michael"));
        assert_eq!(first.last_name.as_deref(), Some("Lawson"));
        assert_eq!(first.email.as_deref(), Some("michael.lawson@reqres.in"));
        assert_eq!(
            payload.data[1].email.as_deref(),
            Some("lindsay.ferguson@reqres.in")
        );
    }

    #[test]
    fn anything_else_is_page_one() {
        for raw in [None, Some("1"), Some("abc"), Some("!@#"), Some("-1"), Some("0"), Some("null")] {
            let payload = page_payload(raw);
            assert_eq!(payload.page, 1, "input {raw:?}");
            assert_eq!(payload.data.len(), 1);
            let user = &payload.data[0];
            assert_eq!(user.id, Some(1));
            assert_eq!(user.first_name.as_deref(), Some("George"));
            assert_eq!(user.last_name.as_deref(), Some("Bluth"));
            assert_eq!(user.email.as_deref(), Some("george.bluth@reqres.in"));
        }
    }

    #[test]
    fn unlisted_numeric_pages_fall_through_to_page_one() {
        // No "page > total_pages" arithmetic: 4 is not 3 or 999.
        for raw in ["4", "10", "03", " 3"] {
            let payload = page_payload(Some(raw));
            assert_eq!(payload.page, 1, "input {raw:?}");
            assert_eq!(payload.data.len(), 1);
        }
    }

    #[test]
    fn metadata_is_fixed() {
        for raw in [None, Some("1"), Some("2"), Some("3"), Some("999"), Some("abc")] {
            let payload = page_payload(raw);
            assert_eq!(payload.per_page, 6);
            assert_eq!(payload.total, 12);
            assert_eq!(payload.total_pages, 2);
            assert_eq!(payload.support.text, "Support us");
            assert!(payload.within_page_size());
        }
    }

    #[test]
    fn identical_input_serializes_identically() {
        for raw in [None, Some("2"), Some("999"), Some("abc")] {
            let a = serde_json::to_vec(&page_payload(raw)).unwrap();
            let b = serde_json::to_vec(&page_payload(raw)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn avatars_are_absolute_urls() {
        let payload = page_payload(Some("2"));
        for user in &payload.data {
            assert!(user.avatar.as_deref().unwrap().starts_with("http"));
        }
    }

    #[test]
    fn query_string_extraction() {
        assert_eq!(page_payload_from_query(Some("page=2&extra=dummy")).page, 2);
        assert_eq!(page_payload_from_query(Some("extra=dummy&page=999")).page, 999);
        assert_eq!(page_payload_from_query(Some("page=3&page=2")).page, 3);
        assert_eq!(page_payload_from_query(Some("extra=dummy")).page, 1);
        assert_eq!(page_payload_from_query(None).page, 1);
    }
}
