use std::borrow::Cow;
use trillium::{Conn, Headers, KnownHeaderName};

/**
The request-side capabilities that [`CookieCutterExt`](crate::CookieCutterExt)
is built on.

Implementors expose the raw `Cookie` request header and allow it to be
replaced or cleared. Everything else (parsing, lookup, appending and
removing individual cookies) is derived from these three operations, so the
raw header and the parsed cookie list can never disagree.
*/
pub trait CookieHeader {
    /// the literal value of the `Cookie` request header, if present.
    ///
    /// when the request carries more than one `Cookie` header line,
    /// they are joined with `"; "` in header order.
    fn raw_cookie_header(&self) -> Option<Cow<'_, str>>;

    /// replaces every `Cookie` request header with `value`
    fn replace_cookie_header(&mut self, value: String);

    /// removes the `Cookie` request header entirely
    fn clear_cookie_header(&mut self);
}

impl CookieHeader for Headers {
    fn raw_cookie_header(&self) -> Option<Cow<'_, str>> {
        let values = self.get_values(KnownHeaderName::Cookie)?;
        join_header_lines(values.iter().filter_map(|value| {
            let line = value.as_str();
            if line.is_none() {
                log::trace!("ignoring cookie header line that is not utf-8");
            }
            line
        }))
    }

    fn replace_cookie_header(&mut self, value: String) {
        self.insert(KnownHeaderName::Cookie, value);
    }

    fn clear_cookie_header(&mut self) {
        self.remove(KnownHeaderName::Cookie);
    }
}

/// operates on the request headers of the conn
impl CookieHeader for Conn {
    fn raw_cookie_header(&self) -> Option<Cow<'_, str>> {
        self.inner().request_headers().raw_cookie_header()
    }

    fn replace_cookie_header(&mut self, value: String) {
        self.inner_mut()
            .request_headers_mut()
            .replace_cookie_header(value);
    }

    fn clear_cookie_header(&mut self) {
        self.inner_mut().request_headers_mut().clear_cookie_header();
    }
}

pub(crate) fn join_header_lines<'a>(
    mut lines: impl Iterator<Item = &'a str>,
) -> Option<Cow<'a, str>> {
    let first = lines.next()?;
    let Some(second) = lines.next() else {
        return Some(Cow::Borrowed(first));
    };

    let mut joined = format!("{first}; {second}");
    for line in lines {
        joined.push_str("; ");
        joined.push_str(line);
    }
    Some(Cow::Owned(joined))
}
