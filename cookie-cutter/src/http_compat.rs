//! # [`CookieHeader`] for [`http`](http1) request types
use crate::{cookie_header::join_header_lines, CookieHeader};
use http1::{header::COOKIE, HeaderMap, HeaderValue, Request};
use std::borrow::Cow;

impl CookieHeader for HeaderMap {
    fn raw_cookie_header(&self) -> Option<Cow<'_, str>> {
        join_header_lines(
            self.get_all(COOKIE)
                .iter()
                .filter_map(|value| match value.to_str() {
                    Ok(line) => Some(line),
                    Err(e) => {
                        log::trace!("ignoring cookie header line: {e}");
                        None
                    }
                }),
        )
    }

    fn replace_cookie_header(&mut self, value: String) {
        match HeaderValue::try_from(value) {
            Ok(value) => {
                self.insert(COOKIE, value);
            }

            Err(e) => log::warn!("refusing to write invalid cookie header: {e}"),
        }
    }

    fn clear_cookie_header(&mut self) {
        self.remove(COOKIE);
    }
}

impl<B> CookieHeader for Request<B> {
    fn raw_cookie_header(&self) -> Option<Cow<'_, str>> {
        self.headers().raw_cookie_header()
    }

    fn replace_cookie_header(&mut self, value: String) {
        self.headers_mut().replace_cookie_header(value);
    }

    fn clear_cookie_header(&mut self) {
        self.headers_mut().clear_cookie_header();
    }
}
