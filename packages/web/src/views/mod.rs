mod public_shell;
pub use public_shell::PublicShell;

mod admin_shell;
pub use admin_shell::AdminShell;

mod home;
pub use home::Home;

mod services;
pub use services::Services;

mod projects;
pub use projects::Projects;

mod articles;
pub use articles::Articles;

mod events;
pub use events::Events;

mod gallery;
pub use gallery::Gallery;

mod feedback;
pub use feedback::FeedbackPage;

mod contact;
pub use contact::Contact;

pub mod admin;
