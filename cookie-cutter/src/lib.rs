#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# request cookie header helpers for trillium

Reads and rewrites the `Cookie` request header of a conn (or of bare
[`trillium::Headers`]) without a cookie jar. Nothing here fails: absent
cookies read as empty strings, and absent headers read as no cookies.

```
use trillium::Conn;
use trillium_cookie_cutter::CookieCutterExt;

async fn handler(mut conn: Conn) -> Conn {
    if !conn.cookie_has_value("rememberMe", "true") {
        conn.remove_cookie("sessionId");
    }

    let body = format!("session: {:?}", conn.cookie_value("sessionId"));
    conn.ok(body)
}

use trillium_testing::prelude::*;

assert_ok!(
    get("/")
        .with_request_header("cookie", "sessionId=xyz789; rememberMe=true")
        .on(&handler),
    "session: \"xyz789\""
);

assert_ok!(
    get("/")
        .with_request_header("cookie", "sessionId=xyz789")
        .on(&handler),
    "session: \"\""
);
```

## features

* `http-compat-1`: implements [`CookieHeader`] for `http::HeaderMap` and
  `http::Request` from version 1 of the [`http`](https://docs.rs/http) crate
*/

mod cookie_header;
pub use cookie_header::CookieHeader;

mod cookie_cutter_ext;
pub use cookie_cutter_ext::CookieCutterExt;

mod cookie_printer;
pub use cookie_printer::{CookiePrinter, Target};

#[cfg(feature = "http-compat-1")]
mod http_compat;

pub use cookie;
