use dioxus::prelude::*;

use ui::SessionProvider;

use views::admin::{
    AdminArticles, AdminContacts, AdminDashboard, AdminEvents, AdminFeedback, AdminGallery,
    AdminLogin, AdminProjects, AdminServices,
};
use views::{
    AdminShell, Articles, Contact, Events, FeedbackPage, Gallery, Home, Projects, PublicShell,
    Services,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicShell)]
        #[route("/")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/projects")]
        Projects {},
        #[route("/articles")]
        Articles {},
        #[route("/feedback")]
        FeedbackPage {},
        #[route("/gallery")]
        Gallery {},
        #[route("/events")]
        Events {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(AdminShell)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/events")]
        AdminEvents {},
        #[route("/admin/projects")]
        AdminProjects {},
        #[route("/admin/articles")]
        AdminArticles {},
        #[route("/admin/services")]
        AdminServices {},
        #[route("/admin/feedback")]
        AdminFeedback {},
        #[route("/admin/gallery")]
        AdminGallery {},
        #[route("/admin/contacts")]
        AdminContacts {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
