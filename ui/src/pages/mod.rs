//! Site pages and the route table that binds them together.

use dioxus::prelude::*;

pub mod blog;
pub mod home;
pub mod projects;
pub mod resume;
pub mod story;

pub use blog::Blog;
pub use home::Home;
pub use projects::Projects;
pub use resume::Resume;
pub use story::Story;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/story")]
    Story {},
    #[route("/resume")]
    Resume {},
    #[route("/blog")]
    Blog {},
    #[route("/projects")]
    Projects {},
}
