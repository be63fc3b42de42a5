//! Portfolio content.
//!
//! The defaults describe a fictional developer; real content comes from the
//! `[profile]` table of the config file.

use serde::{Deserialize, Serialize};

/// Everything shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name, shown in the hero.
    pub name: String,
    /// Small caps line above the name.
    pub kicker: String,
    /// Role line under the name.
    pub headline: String,
    /// One-paragraph pitch in the hero.
    pub summary: String,
    /// Optional resume URL.
    pub resume: Option<String>,
    /// "About Me" paragraphs.
    pub about: Vec<String>,
    pub education: Education,
    /// Tech stack, one card per group.
    pub tech_stack: Vec<TechGroup>,
    pub projects: Vec<Project>,
    pub interests: Vec<Interest>,
    pub contact: Contact,
    /// Social profile links.
    pub socials: Vec<Link>,
}

/// Education block inside "About Me".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    /// Grade or GPA, shown highlighted.
    pub grade: String,
}

/// A titled group in the tech stack grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Status badge, e.g. "Live on Play Store".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// An interest card in "Beyond Code".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,
    pub description: String,
}

/// Direct contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// `mailto:` URI for the email address.
    pub fn email_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with whitespace stripped from the number.
    pub fn phone_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// A labelled outbound link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Ada Calloway".to_string(),
            kicker: "FULL-STACK DEVELOPER".to_string(),
            headline: "Mobile App Developer • Founder @ Orbitlink".to_string(),
            summary: "Building mobile and web experiences that bridge technology and \
                      user needs, with a focus on scalable apps built on modern \
                      full-stack tooling."
                .to_string(),
            resume: Some("https://example.com/ada-calloway-resume.pdf".to_string()),
            about: strings(&[
                "I'm a full-stack developer and the founder of Orbitlink, a mobile \
                 platform that helps students connect, collaborate and find their way \
                 around campus life.",
                "My work spans cross-platform mobile apps, backend services and \
                 interface design. I like turning rough ideas into small, reliable \
                 tools that people actually use.",
            ]),
            education: Education {
                degree: "B.Tech in Computer Science & Engineering".to_string(),
                school: "Example Institute of Technology".to_string(),
                grade: "CGPA: 8.8".to_string(),
            },
            tech_stack: vec![
                TechGroup {
                    title: "Languages".to_string(),
                    items: strings(&["JavaScript", "Python", "C++", "SQL"]),
                },
                TechGroup {
                    title: "Frameworks".to_string(),
                    items: strings(&["React", "React Native", "Node.js", "Express.js"]),
                },
                TechGroup {
                    title: "Databases".to_string(),
                    items: strings(&["Firebase", "MongoDB", "PostgreSQL"]),
                },
                TechGroup {
                    title: "Styling".to_string(),
                    items: strings(&["Tailwind CSS"]),
                },
            ],
            projects: vec![
                Project {
                    name: "Orbitlink".to_string(),
                    description: "A campus platform with real-time messaging, event \
                                  discovery, resource sharing and community tools."
                        .to_string(),
                    status: Some("Live on Play Store".to_string()),
                    tech: strings(&["React Native", "Firebase", "Real-time Database"]),
                },
                Project {
                    name: "Relay".to_string(),
                    description: "Browser voice and video calling over low-latency \
                                  peer-to-peer connections."
                        .to_string(),
                    status: None,
                    tech: strings(&["React", "Node.js", "WebRTC"]),
                },
                Project {
                    name: "Pip Journal".to_string(),
                    description: "A trading journal for logging trades, tracking \
                                  profit and loss, and reviewing performance metrics."
                        .to_string(),
                    status: None,
                    tech: strings(&["React Native", "Firebase", "Analytics"]),
                },
                Project {
                    name: "Marginalia".to_string(),
                    description: "Capture and organize favourite quotes with custom \
                                  categories and search."
                        .to_string(),
                    status: None,
                    tech: strings(&["React Native", "SQLite"]),
                },
            ],
            interests: vec![
                Interest {
                    title: "Technical Community Leadership".to_string(),
                    description: "Organizing workshops and mentoring newer developers \
                                  in campus tech clubs."
                        .to_string(),
                },
                Interest {
                    title: "Competitive Programming & Events".to_string(),
                    description: "Hackathons, coding contests and the occasional \
                                  all-nighter chasing an algorithm."
                        .to_string(),
                },
                Interest {
                    title: "Fitness & Athletics".to_string(),
                    description: "Swimming and cycling to keep a clear head.".to_string(),
                },
                Interest {
                    title: "E-commerce & Digital Marketing".to_string(),
                    description: "Ran a small online store: customer acquisition, \
                                  inventory and sales."
                        .to_string(),
                },
            ],
            contact: Contact {
                blurb: "Open to collaborations, interesting projects and good \
                        conversations. Let's build something together!"
                    .to_string(),
                email: "ada@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
            },
            socials: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/example".to_string(),
                },
                Link {
                    label: "Instagram".to_string(),
                    url: "https://www.instagram.com/example".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_uris() {
        let contact = Contact {
            blurb: String::new(),
            email: "me@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
        };
        assert_eq!(contact.email_uri(), "mailto:me@example.com");
        assert_eq!(contact.phone_uri(), "tel:+15550100");
    }

    #[test]
    fn test_profile_table_overrides_name_only() {
        let profile: Profile = toml::from_str("name = \"Rey Skywalker\"").unwrap();
        assert_eq!(profile.name, "Rey Skywalker");
        assert_eq!(profile.projects, Profile::default().projects);
    }

    #[test]
    fn test_project_without_status() {
        let project: Project = toml::from_str(
            r#"
            name = "Holocron"
            description = "Knowledge base"
            "#,
        )
        .unwrap();
        assert!(project.status.is_none());
        assert!(project.tech.is_empty());
    }
}
