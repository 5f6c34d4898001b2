//! Hand-authored portfolio content.
//!
//! Everything here is fixed at compile time and never mutated. Skill lists
//! keep their authored order and duplicates.

/// `rel` carried by every outbound link: the destination gets neither the
/// opener handle nor a referrer.
pub const OUTBOUND_REL: &str = "noopener noreferrer";

/// Browsing context outbound links open in.
pub const OUTBOUND_TARGET: &str = "_blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub display_name: &'static str,
    pub greeting: &'static str,
    pub first_name: &'static str,
    pub headline: [&'static str; 2],
    pub about: &'static str,
    pub portrait_path: &'static str,
    pub portrait_alt: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Display string only; never parsed.
    pub date: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub employment_type: &'static str,
    pub location: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    display_name: "Nitesh C Balusu",
    greeting: "Hi, I'm",
    first_name: "Nitesh",
    headline: ["ServiceNow Architect", "& Full Stack Engineer"],
    about: "Passionate about building scalable solutions with modern technologies. \
            Specializing in ServiceNow architecture, Bitcoin/Lightning Network development, \
            and enterprise integrations.",
    portrait_path: "/nitesh.jpeg",
    portrait_alt: "Nitesh C Balusu",
    skills: &[
        "ServiceNow",
        "TypeScript",
        "Rust",
        "Bitcoin",
        "Lightning Network",
        "AWS",
        "DevOps",
    ],
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: "gh",
        href: "https://github.com/niteshbalusu11/",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "in",
        href: "https://www.linkedin.com/in/niteshbalusu/",
    },
    SocialLink {
        label: "Twitter",
        icon: "x",
        href: "https://x.com/nitesh_btc",
    },
    SocialLink {
        label: "Resume",
        icon: "cv",
        href: "https://drive.google.com/file/d/1KqLueNHbSabJ0SqKgsTwE7QnGYk414CS/view",
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Open Source Contributions",
        description: "Significant contributor to the Bitcoin & Lightning Network ecosystem. \
                      Major contributor to Balance of Satoshis, actively maintaining and improving \
                      the codebase. Created RustDress, a Lightning Address server, and contributed \
                      to Blixt Wallet. Passionate about teaching and mentoring others in running \
                      Lightning nodes.",
        skills: &["Bitcoin", "Lightning", "Rust", "Node.js", "TypeScript"],
    },
    ExperienceEntry {
        title: "ServiceNow Platform Architect",
        description: "Led enterprise-wide ServiceNow implementations, specializing in ITSM, HRSD, \
                      and CSM modules. Architected and delivered high-impact solutions for Fortune \
                      500 companies. Spearheaded the complete rebuild of OTIS's ESC portal, \
                      modernizing user experience and streamlining service delivery. Maintained \
                      mission-critical integrations with enterprise systems including Workday, \
                      ProntoForms, and Snowflake.",
        skills: &[
            "ITSM",
            "HRSD",
            "CSM",
            "CMDB",
            "ITOM",
            "Solution Architecture",
        ],
    },
    ExperienceEntry {
        title: "DevOps & Full Stack Engineering",
        description: "Extensive experience in DevOps practices and full-stack development. \
                      Implemented CI/CD pipelines, infrastructure as code, and cloud solutions. \
                      Built and maintained scalable applications using modern technologies. \
                      Strong focus on code quality, performance optimization, and best practices.",
        skills: &["AWS", "CI/CD", "Docker", "TypeScript", "React", "Node.js"],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        name: "Balance of Satoshis",
        href: "https://github.com/alexbosworth/balanceofsatoshis",
        description: "Major contributor to this command line utility for working with Lightning \
                      Network nodes. Implemented key features and improvements.",
        skills: &["Node.js", "Lightning", "Bitcoin"],
    },
    ProjectEntry {
        name: "Blixt Wallet",
        href: "https://github.com/hsjoberg/blixt-wallet",
        description: "A non-custodial Lightning Network wallet focused on providing a seamless \
                      user experience while maintaining security and privacy.",
        skills: &["React Native", "Lightning", "Bitcoin"],
    },
    ProjectEntry {
        name: "RustDress",
        href: "https://github.com/niteshbalusu11/rustdress",
        description: "Self-hosted Lightning Address Server and NIP-05 Verification Server built \
                      with Rust. Enables custom Lightning addresses and Nostr verification.",
        skills: &["Rust", "Lightning", "Nostr"],
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        date: "May 2024 - Present",
        role: "DevOps Engineer",
        company: "ZBD",
        employment_type: "Contract",
        location: "Remote",
        skills: &["TypeScript", "Node.js", "DevOps", "Solution Architecture"],
    },
    TimelineEntry {
        date: "Feb 2021 - Present",
        role: "ServiceNow Architect",
        company: "Otis Elevator Co.",
        employment_type: "Full-time",
        location: "Atlanta Metropolitan Area",
        skills: &[
            "ITOM",
            "HRSD",
            "ServiceNow Administration",
            "Solution Architecture",
        ],
    },
    TimelineEntry {
        date: "Aug 2022 - Oct 2023",
        role: "Bitcoin Lightning Network Engineer",
        company: "Foundry",
        employment_type: "Full-time",
        location: "Atlanta, Georgia (Remote)",
        skills: &["Rust", "TypeScript", "Node.js", "DevOps"],
    },
    TimelineEntry {
        date: "Jun 2019 - Dec 2020",
        role: "Sr. ServiceNow Developer",
        company: "Equifax",
        employment_type: "Contract",
        location: "Alpharetta, Georgia",
        skills: &["ITOM", "HRSD", "CSM", "ServiceNow Administration"],
    },
    TimelineEntry {
        date: "Jan 2019 - Jun 2019",
        role: "Sr. ServiceNow Consultant",
        company: "Northside Hospital",
        employment_type: "Contract",
        location: "Atlanta, Georgia",
        skills: &["ITOM", "HRSD", "CSM", "ServiceNow Administration"],
    },
    TimelineEntry {
        date: "Apr 2018 - Dec 2018",
        role: "Sr. Enterprise Configuration Manager",
        company: "Sabre Corporation",
        employment_type: "Full-time",
        location: "Southlake, Texas",
        skills: &["HRSD", "CSM", "ServiceNow Administration"],
    },
];

/// Every outbound URL on the page, in page order.
pub fn outbound_links() -> impl Iterator<Item = &'static str> {
    SOCIAL_LINKS
        .iter()
        .map(|link| link.href)
        .chain(PROJECTS.iter().map(|project| project.href))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_timeline_is_in_authored_order() {
        let companies: Vec<&str> = TIMELINE.iter().map(|entry| entry.company).collect();
        assert_eq!(
            companies,
            vec![
                "ZBD",
                "Otis Elevator Co.",
                "Foundry",
                "Equifax",
                "Northside Hospital",
                "Sabre Corporation",
            ]
        );
    }

    #[test]
    fn test_outbound_links() {
        assert_eq!(
            outbound_links().collect::<Vec<_>>(),
            vec![
                "https://github.com/niteshbalusu11/",
                "https://www.linkedin.com/in/niteshbalusu/",
                "https://x.com/nitesh_btc",
                "https://drive.google.com/file/d/1KqLueNHbSabJ0SqKgsTwE7QnGYk414CS/view",
                "https://github.com/alexbosworth/balanceofsatoshis",
                "https://github.com/hsjoberg/blixt-wallet",
                "https://github.com/niteshbalusu11/rustdress",
            ]
        );
    }

    #[test]
    fn test_descriptions_have_no_doubled_spaces() {
        let texts = EXPERIENCES
            .iter()
            .map(|e| e.description)
            .chain(PROJECTS.iter().map(|p| p.description))
            .chain(std::iter::once(PROFILE.about));
        for text in texts {
            assert!(!text.contains("  "), "{text}");
        }
    }
}
