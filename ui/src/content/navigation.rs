//! Navigation entries: home page cards and the top navbar links, each in
//! display order.

use dioxus::prelude::*;

use crate::components::icons::{BookOpenTextIcon, CodeXmlIcon, FilePenIcon, FileTextIcon};
use crate::pages::Route;

pub struct NavCardEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
    pub icon: fn() -> Element,
}

/// Cards rendered on the home page nav grid, already ordered.
pub fn nav_cards() -> [NavCardEntry; 4] {
    [
        NavCardEntry {
            title: "Story",
            description: "Learn more about my story and experiences.",
            route: Route::Story {},
            icon: || rsx! { BookOpenTextIcon {} },
        },
        NavCardEntry {
            title: "Resume",
            description: "View my professional experience and skills.",
            route: Route::Resume {},
            icon: || rsx! { FileTextIcon {} },
        },
        NavCardEntry {
            title: "Blog",
            description: "Read my latest blog posts and technical articles.",
            route: Route::Blog {},
            icon: || rsx! { FilePenIcon {} },
        },
        NavCardEntry {
            title: "Projects",
            description: "Explore my latest projects and portfolio.",
            route: Route::Projects {},
            icon: || rsx! { CodeXmlIcon {} },
        },
    ]
}

pub struct NavLink {
    pub name: &'static str,
    pub route: Route,
}

/// Links shown in the fixed top navbar, already ordered.
pub fn nav_links() -> [NavLink; 5] {
    [
        NavLink {
            name: "Home",
            route: Route::Home {},
        },
        NavLink {
            name: "Resume",
            route: Route::Resume {},
        },
        NavLink {
            name: "Story",
            route: Route::Story {},
        },
        NavLink {
            name: "Blog",
            route: Route::Blog {},
        },
        NavLink {
            name: "Projects",
            route: Route::Projects {},
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_keep_their_display_order() {
        let titles: Vec<_> = nav_cards().iter().map(|card| card.title).collect();
        assert_eq!(titles, ["Story", "Resume", "Blog", "Projects"]);
    }

    #[test]
    fn navbar_links_cover_every_page_in_order() {
        let names: Vec<_> = nav_links().iter().map(|link| link.name).collect();
        assert_eq!(names, ["Home", "Resume", "Story", "Blog", "Projects"]);
    }

    #[test]
    fn navbar_links_route_to_distinct_pages() {
        let links = nav_links();
        for (i, a) in links.iter().enumerate() {
            for b in links.iter().skip(i + 1) {
                assert_ne!(a.route, b.route);
            }
        }
    }

    #[test]
    fn each_card_routes_to_a_distinct_page() {
        let cards = nav_cards();
        for (i, a) in cards.iter().enumerate() {
            for b in cards.iter().skip(i + 1) {
                assert_ne!(a.route, b.route);
            }
        }
    }
}
