pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod resource;

pub use home::HomeRedirect;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use resource::ResourcePage;
