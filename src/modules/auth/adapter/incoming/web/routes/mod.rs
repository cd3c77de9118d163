mod login;
mod logout;
mod session;
mod verify_path;

pub use login::{__path_login_admin_handler, login_admin_handler, LoginRequestDto, LoginResponseBody};
pub use logout::{__path_logout_admin_handler, logout_admin_handler, LogoutResponseBody};
pub use session::{__path_session_handler, session_handler, SessionResponseBody};
pub use verify_path::{__path_verify_path_handler, verify_path_handler, VerifyPathRequestDto, VerifyPathResponseBody};
