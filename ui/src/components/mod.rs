pub mod layout;
pub mod login_form;

pub use layout::MainLayout;
pub use login_form::LoginForm;
