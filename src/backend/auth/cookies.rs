/*!
 * Session Cookie
 *
 * The session token travels to the browser as an HttpOnly cookie named
 * `token`. Its lifetime matches the token's (24 hours). `Secure` is only set
 * in production so the cookie still works over plain HTTP in development.
 */

use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::Cookie;

use crate::backend::auth::sessions::SESSION_TTL_SECS;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Build the cookie that carries a freshly issued token
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
        .build()
}

/// Build a cookie that makes the browser drop the session cookie
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}
