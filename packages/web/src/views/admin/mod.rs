mod login;
pub use login::AdminLogin;

mod dashboard;
pub use dashboard::AdminDashboard;

mod events;
pub use events::AdminEvents;

mod projects;
pub use projects::AdminProjects;

mod articles;
pub use articles::AdminArticles;

mod services;
pub use services::AdminServices;

mod feedback;
pub use feedback::AdminFeedback;

mod gallery;
pub use gallery::AdminGallery;

mod contacts;
pub use contacts::AdminContacts;
