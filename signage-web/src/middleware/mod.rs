pub(crate) mod auth;

pub(crate) use auth::RequireLogin;
