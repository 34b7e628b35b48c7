use dioxus::prelude::*;

use crate::components::NavBar;
use crate::content::resume::{EducationEntry, ExperienceEntry};
use crate::content::RESUME;
use crate::pages::Route;

fn detail_list(details: &'static [&'static str]) -> Element {
    rsx! {
        ul {
            class: "entry-details",
            for detail in details {
                li { key: "{detail}", "{detail}" }
            }
        }
    }
}

fn education_card(entry: &EducationEntry) -> Element {
    rsx! {
        div {
            class: "resume-card",
            div {
                class: "entry-heading",
                div {
                    h3 { "{entry.degree}" }
                    p { "{entry.school} - {entry.location}" }
                }
                span { class: "entry-period", "{entry.period}" }
            }
            {detail_list(entry.details)}
        }
    }
}

fn experience_card(entry: &ExperienceEntry) -> Element {
    rsx! {
        div {
            class: "resume-card",
            div {
                class: "entry-heading",
                div {
                    h3 { "{entry.title}" }
                    p { "{entry.company} - {entry.location}" }
                }
                span { class: "entry-period", "{entry.period}" }
            }
            {detail_list(entry.details)}
        }
    }
}

#[component]
pub fn Resume() -> Element {
    rsx! {
        NavBar { active: Route::Resume {} }

        section {
            class: "content-center below-nav-bar",

            header {
                class: "page-header",
                h1 { "Resume" }
                p { class: "tagline", "Last Updated: {RESUME.last_updated}" }
            }

            section {
                class: "resume-section",
                h2 { "Education" }
                for entry in RESUME.education {
                    {education_card(entry)}
                }
            }

            section {
                class: "resume-section",
                h2 { "Experience" }
                for entry in RESUME.experience {
                    {experience_card(entry)}
                }
            }

            section {
                class: "resume-section",
                h2 { "Projects" }
                for project in RESUME.projects {
                    div {
                        key: "{project.name}",
                        class: "resume-card",
                        h3 { "{project.name}" }
                        p { "{project.description}" }
                        div {
                            class: "tag-row",
                            for tech in project.technologies {
                                span { key: "{tech}", class: "tag", "{tech}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "resume-section",
                h2 { "Skills" }
                div {
                    class: "resume-card skills-grid",
                    for category in RESUME.skills {
                        div {
                            key: "{category.title}",
                            h3 { "{category.title}" }
                            div {
                                class: "tag-row",
                                for skill in category.skills {
                                    span { key: "{skill}", class: "tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
