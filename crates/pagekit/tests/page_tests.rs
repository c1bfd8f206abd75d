//! Integration tests for page result constructors.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use pagekit::page::{Page, PageError};
use pretty_assertions::assert_eq;
use rstest::rstest;

struct TestPage;
impl Page for TestPage {}

#[rstest]
#[case(false, false, StatusCode::FOUND)]
#[case(true, false, StatusCode::MOVED_PERMANENTLY)]
#[case(false, true, StatusCode::TEMPORARY_REDIRECT)]
#[case(true, true, StatusCode::PERMANENT_REDIRECT)]
fn redirect_variants_map_to_status(
    #[case] permanent: bool,
    #[case] preserve_method: bool,
    #[case] expected: StatusCode,
) {
    let page = TestPage;
    let url = "/test/url";

    let result = match (permanent, preserve_method) {
        (false, false) => page.redirect(url),
        (true, false) => page.redirect_permanent(url),
        (false, true) => page.redirect_preserve_method(url),
        (true, true) => page.redirect_permanent_preserve_method(url),
    }
    .unwrap();

    assert_eq!(result.url(), url);
    assert_eq!(result.permanent(), permanent);
    assert_eq!(result.preserve_method(), preserve_method);
    assert_eq!(result.status(), expected);
}

#[rstest]
#[case(false, false, StatusCode::FOUND)]
#[case(true, false, StatusCode::MOVED_PERMANENTLY)]
#[case(false, true, StatusCode::TEMPORARY_REDIRECT)]
#[case(true, true, StatusCode::PERMANENT_REDIRECT)]
fn local_redirect_variants_map_to_status(
    #[case] permanent: bool,
    #[case] preserve_method: bool,
    #[case] expected: StatusCode,
) {
    let page = TestPage;
    let url = "/test/url";

    let result = match (permanent, preserve_method) {
        (false, false) => page.local_redirect(url),
        (true, false) => page.local_redirect_permanent(url),
        (false, true) => page.local_redirect_preserve_method(url),
        (true, true) => page.local_redirect_permanent_preserve_method(url),
    }
    .unwrap();

    assert_eq!(result.url(), url);
    assert_eq!(result.status(), expected);
}

#[test]
fn redirect_rejects_empty_url() {
    let page = TestPage;
    assert_eq!(page.redirect(""), Err(PageError::EmptyRedirectUrl));
    assert_eq!(page.local_redirect(""), Err(PageError::EmptyRedirectUrl));
}

#[rstest]
#[case("//evil.example")]
#[case("/\\evil.example")]
#[case("https://evil.example")]
#[case("evil")]
fn local_redirect_rejects_non_local_urls(#[case] url: &str) {
    let page = TestPage;
    assert_eq!(
        page.local_redirect(url),
        Err(PageError::NonLocalUrl(url.to_string()))
    );
}

#[test]
fn redirect_response_carries_location() {
    let page = TestPage;
    let resp = page.redirect_permanent("/new-home").unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/new-home"
    );
}

#[test]
fn content_response_carries_body_and_type() {
    let page = TestPage;
    let result = page.content_with_type("<p>hi</p>", "text/html; charset=utf-8");
    assert_eq!(result.body(), "<p>hi</p>");

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap(),
        "text/html; charset=utf-8"
    );
}

#[test]
fn file_response_without_name_has_no_disposition() {
    let page = TestPage;
    let resp = page.file(vec![0u8; 4], "image/png").into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::CONTENT_DISPOSITION).is_none());
}

#[rstest]
#[case(StatusCode::NOT_FOUND)]
#[case(StatusCode::BAD_REQUEST)]
#[case(StatusCode::UNAUTHORIZED)]
fn status_code_results_round_trip(#[case] status: StatusCode) {
    let page = TestPage;
    let resp = page.status_code(status).into_response();
    assert_eq!(resp.status(), status);
}
