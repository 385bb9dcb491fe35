use trillium::Conn;
use trillium_cookie_cutter::{CookieCutterExt, CookiePrinter, Target};
use trillium_testing::prelude::*;

const COOKIES: &str = "sessionId=xyz789; _csrf=edc456tgh; __Secure-UserToken=bc9m7tyG4VgXsabcA; trackingId=123abc456def; rememberMe=true";

#[test]
fn reads_request_cookies() {
    let conn = get("/").with_request_header("cookie", COOKIES).on(&());

    assert_eq!(conn.cookie_header(), COOKIES);
    assert_eq!(conn.cookie_value("sessionId"), "xyz789");
    assert_eq!(conn.cookie_value("testCookieName"), "");
    assert_eq!(conn.cookie_map().len(), 5);
    assert!(conn.has_cookie("trackingId"));
    assert!(conn.cookie_has_value("_csrf", "edc456tgh"));
    assert!(!conn.cookie_has_value("_csrf", "test"));
    assert!(!conn.cookie_has_value("csrf", "edc456tgh"));
}

#[test]
fn no_cookie_header() {
    let conn = get("/").on(&());
    assert_eq!(conn.cookie_header(), "");
    assert!(conn.cookie_map().is_empty());
    assert!(conn.request_cookies().is_empty());
    assert!(!conn.has_cookie("sessionId"));
}

#[test]
fn handlers_can_rewrite_request_cookies() {
    let handler = |mut conn: Conn| async move {
        conn.add_cookie("testCookieName", "testCookieValue");
        conn.remove_cookie("_csrf");
        let header = conn.cookie_header();
        conn.ok(header)
    };

    assert_ok!(
        get("/").with_request_header("cookie", "sessionId=xyz789; _csrf=edc456tgh").on(&handler),
        "sessionId=xyz789; testCookieName=testCookieValue"
    );

    assert_ok!(get("/").on(&handler), "testCookieName=testCookieValue");
}

#[test]
fn rewritten_cookies_are_seen_downstream() {
    let handler = (
        |mut conn: Conn| async move {
            conn.remove_cookie("rememberMe");
            conn
        },
        |conn: Conn| async move {
            let remembered = conn.has_cookie("rememberMe");
            conn.ok(format!("remembered: {remembered}"))
        },
    );

    assert_ok!(
        get("/").with_request_header("cookie", COOKIES).on(&handler),
        "remembered: false"
    );
}

#[test]
fn printer_passes_conn_through() {
    let handler = (CookiePrinter::new().with_target(Target::Stdout), "ok");
    assert_ok!(
        get("/").with_request_header("cookie", COOKIES).on(&handler),
        "ok"
    );

    let handler = (CookiePrinter::new(), "ok");
    assert_ok!(get("/").on(&handler), "ok");
}

#[test]
fn printing_a_conn_does_not_fail() {
    let conn = get("/").with_request_header("cookie", COOKIES).on(&());
    conn.print_cookies();

    let mut out = Vec::new();
    conn.write_cookies(&mut out);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sessionId: xyz789\n_csrf: edc456tgh\n__Secure-UserToken: bc9m7tyG4VgXsabcA\ntrackingId: 123abc456def\nrememberMe: true\n"
    );
}

#[test]
fn printer_logs_each_cookie() {
    let handler = (
        CookiePrinter::new().with_target(Target::Logger(log::Level::Debug)),
        |conn: Conn| async move {
            let value = conn.cookie_value("quoted");
            conn.ok(value)
        },
    );

    assert_ok!(
        get("/")
            .with_request_header("cookie", "quoted=\"two words\"; plain=1")
            .on(&handler),
        "two words"
    );
}
