use crate::CookieCutterExt;
use trillium::{async_trait, Conn, Handler};

/// where [`CookiePrinter`] sends its output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Target {
    /// one log record per cookie, at the given level
    Logger(log::Level),

    /// one line per cookie on stdout
    Stdout,
}

impl Default for Target {
    fn default() -> Self {
        Self::Logger(log::Level::Info)
    }
}

/**
A handler that prints every request cookie as `name: value`, in header
order, and passes the conn along unchanged.

```
use trillium_cookie_cutter::{CookiePrinter, Target};
let printer = CookiePrinter::new().with_target(Target::Stdout);
```
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct CookiePrinter {
    target: Target,
}

impl CookiePrinter {
    /// constructs a new cookie printer that logs at info level
    pub fn new() -> Self {
        Self::default()
    }

    /// chainable setter for the output [`Target`]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// the currently configured [`Target`]
    pub fn target(&self) -> Target {
        self.target
    }
}

#[async_trait]
impl Handler for CookiePrinter {
    async fn run(&self, conn: Conn) -> Conn {
        match self.target {
            Target::Stdout => conn.print_cookies(),
            Target::Logger(level) => {
                for cookie in conn.request_cookies() {
                    log::log!(level, "{}: {}", cookie.name(), cookie.value_trimmed());
                }
            }
        }

        conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration() {
        assert_eq!(CookiePrinter::new().target(), Target::Logger(log::Level::Info));

        let printer = CookiePrinter::new().with_target(Target::Stdout);
        assert_eq!(printer.target(), Target::Stdout);

        let printer = printer.with_target(Target::Logger(log::Level::Debug));
        assert_eq!(printer.target(), Target::Logger(log::Level::Debug));
    }
}
