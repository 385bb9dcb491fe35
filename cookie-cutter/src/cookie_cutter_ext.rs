use crate::CookieHeader;
use cookie::Cookie;
use std::{
    collections::HashMap,
    io::{self, Write},
};

/**
Extension trait adding request cookie accessors to anything that
implements [`CookieHeader`], including [`trillium::Conn`] and
[`trillium::Headers`].

None of these functions fail. A missing cookie reads as an empty
string, a missing header reads as no cookies, and header segments that
cannot be parsed are skipped.

```
use trillium::{Headers, KnownHeaderName};
use trillium_cookie_cutter::CookieCutterExt;

let mut headers = Headers::new();
headers.insert(KnownHeaderName::Cookie, "a=1; b=2");

assert_eq!(headers.cookie_value("b"), "2");
assert_eq!(headers.cookie_value("z"), "");

headers.add_cookie("c", "3");
headers.remove_cookie("a");
assert_eq!(headers.cookie_header(), "b=2; c=3");
```
*/
pub trait CookieCutterExt: CookieHeader {
    /// the unparsed `Cookie` request header, or an empty string if
    /// there is none
    fn cookie_header(&self) -> String {
        self.raw_cookie_header()
            .map(|header| header.into_owned())
            .unwrap_or_default()
    }

    /// every cookie in the `Cookie` request header, in header order
    fn request_cookies(&self) -> Vec<Cookie<'static>> {
        let Some(header) = self.raw_cookie_header() else {
            return vec![];
        };

        Cookie::split_parse(&*header)
            .filter_map(|cookie| match cookie {
                Ok(cookie) => Some(cookie.into_owned()),
                Err(e) => {
                    log::trace!("skipping unparseable cookie: {e}");
                    None
                }
            })
            .collect()
    }

    /// the cookie named `name`. if the name occurs more than once, the
    /// last occurrence is returned.
    fn find_cookie(&self, name: &str) -> Option<Cookie<'static>> {
        self.request_cookies()
            .into_iter()
            .rev()
            .find(|cookie| cookie.name() == name)
    }

    /// the value of the cookie named `name` with any surrounding
    /// double quotes removed, or an empty string
    fn cookie_value(&self, name: &str) -> String {
        self.find_cookie(name)
            .map(|cookie| cookie.value_trimmed().to_string())
            .unwrap_or_default()
    }

    /// a snapshot of all cookies as a name-to-value map. later
    /// occurrences of a name replace earlier ones.
    fn cookie_map(&self) -> HashMap<String, String> {
        self.request_cookies()
            .into_iter()
            .map(|cookie| {
                (
                    cookie.name().to_string(),
                    cookie.value_trimmed().to_string(),
                )
            })
            .collect()
    }

    /**
    appends `cookie` to the `Cookie` request header.

    Only the name and value are serialized; attributes have no meaning
    in a request header. Existing cookies with the same name are left
    in place.

    Carriage returns and line feeds in the name become `-`, and any
    other byte that would end the pair early (separators, whitespace,
    controls) is dropped from it. The value keeps only valid cookie
    octets and is quoted when it contains a space or a comma. A cookie
    whose name is empty after this is not appended.
    */
    fn append_cookie(&mut self, cookie: Cookie<'_>) {
        let name = sanitize_name(cookie.name());
        if name.is_empty() {
            log::warn!(
                "not appending cookie with unusable name {:?}",
                cookie.name()
            );
            return;
        }

        let pair = format!("{name}={}", sanitize_value(cookie.value()));
        let header = match self.raw_cookie_header() {
            Some(existing) if !existing.is_empty() => format!("{existing}; {pair}"),
            _ => pair,
        };
        self.replace_cookie_header(header);
    }

    /// appends a cookie named `name` with `value`. see
    /// [`CookieCutterExt::append_cookie`]
    fn add_cookie(&mut self, name: &str, value: &str) {
        self.append_cookie(Cookie::new(name.to_string(), value.to_string()));
    }

    /**
    removes every cookie named `name`, keeping the remaining cookies in
    their original order.

    The header is rebuilt from the surviving cookies, so unparseable
    segments are dropped along the way, as are any `Cookie` header
    lines that are not valid utf-8. If no cookie is named `name`, the
    header is left untouched.
    */
    fn remove_cookie(&mut self, name: &str) {
        let cookies = self.request_cookies();
        if !cookies.iter().any(|cookie| cookie.name() == name) {
            return;
        }

        self.clear_cookie_header();
        for cookie in cookies.into_iter().filter(|cookie| cookie.name() != name) {
            self.append_cookie(cookie);
        }
    }

    /**
    whether a cookie named `name` has a non-empty value.

    A cookie that is present with an empty value is indistinguishable
    from one that is absent. Use [`CookieCutterExt::find_cookie`] to
    tell them apart.
    */
    fn has_cookie(&self, name: &str) -> bool {
        !self.cookie_value(name).is_empty()
    }

    /// whether the cookie named `name` is present (see
    /// [`CookieCutterExt::has_cookie`]) with exactly `value`
    fn cookie_has_value(&self, name: &str, value: &str) -> bool {
        let current = self.cookie_value(name);
        !current.is_empty() && current == value
    }

    /// writes one `name: value` line per cookie to `out`, in header
    /// order. a failed write is logged and ends the output.
    fn write_cookies(&self, out: &mut impl Write) {
        for cookie in self.request_cookies() {
            if let Err(e) = writeln!(out, "{}: {}", cookie.name(), cookie.value_trimmed()) {
                log::warn!("could not write cookie {}: {e}", cookie.name());
                return;
            }
        }
    }

    /// prints one `name: value` line per cookie to stdout
    fn print_cookies(&self) {
        self.write_cookies(&mut io::stdout().lock());
    }
}

impl<T: CookieHeader + ?Sized> CookieCutterExt for T {}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '\r' | '\n' => Some('-'),
            c if c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c) => Some(c),
            _ => None,
        })
        .collect()
}

fn sanitize_value(value: &str) -> String {
    let value: String = value
        .chars()
        .filter(|&c| (' '..='~').contains(&c) && !matches!(c, '"' | ';' | '\\'))
        .collect();

    if value.contains([' ', ',']) {
        format!("\"{value}\"")
    } else {
        value
    }
}
