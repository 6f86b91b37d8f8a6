mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod projects;
pub use projects::Projects;
