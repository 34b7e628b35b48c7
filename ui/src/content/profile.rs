//! Profile constants: who the site is about and where else to find them.

pub struct ExternalLink {
    pub url: &'static str,
    pub aria_label: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub resume_label: &'static str,
    pub github: ExternalLink,
    pub linkedin: ExternalLink,
}

pub const PROFILE: Profile = Profile {
    name: "Alfredo Mejia",
    tagline: "Software Engineer",
    email: "hello@alfredomejia.dev",
    resume_label: "Download Resume",
    github: ExternalLink {
        url: "https://github.com/alfredo-mejia",
        aria_label: "Go to Github profile",
    },
    linkedin: ExternalLink {
        url: "https://www.linkedin.com/in/alfredo-mejia/",
        aria_label: "Go to LinkedIn profile",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_are_external_and_labelled() {
        for link in [&PROFILE.github, &PROFILE.linkedin] {
            assert!(link.url.starts_with("https://"));
            assert!(!link.aria_label.is_empty());
        }
    }

    #[test]
    fn email_looks_like_an_address() {
        assert!(PROFILE.email.contains('@'));
    }
}
