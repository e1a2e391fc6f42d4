mod admin;
mod change_password;
mod create_user;
mod landing;
mod not_found;
mod one_step_login;
mod two_step_login;

pub(crate) use admin::AdminPage;
pub(crate) use change_password::ChangePasswordPage;
pub(crate) use create_user::CreateUserPage;
pub(crate) use landing::LandingPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use one_step_login::OneStepLoginPage;
pub(crate) use two_step_login::TwoStepLoginPage;
