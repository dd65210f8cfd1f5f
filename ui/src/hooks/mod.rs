pub mod use_authentication;
pub mod use_logout;
pub mod use_page_data;
pub mod use_require_auth;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_logout::use_logout;
pub use use_page_data::{PageDataHookReturn, use_page_data};
pub use use_require_auth::{SignedOutFallback, use_require_auth};
pub use use_title::use_title;
