use trillium::Conn;
use trillium_cookie_cutter::{CookieCutterExt, CookiePrinter};

pub fn main() {
    env_logger::init();

    trillium_smol::run((CookiePrinter::new(), |mut conn: Conn| async move {
        if !conn.has_cookie("visited") {
            conn.add_cookie("visited", "true");
        }

        let cookies = conn.cookie_map();
        conn.ok(format!("{cookies:?}"))
    }));
}
