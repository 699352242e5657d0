//! Content written by the one-time initialization path.

use crate::document::model::{Document, Expertise, Footer, Hero, SiteInfo};

fn expertise(icon: &str, title: &str, description: &str) -> Expertise {
    Expertise {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn default_footer() -> Footer {
    Footer {
        text: "© Jane Doe. Built for speed and security.".to_string(),
        tagline: "root@portfolio:~$ whoami".to_string(),
    }
}

/// The starter document for a fresh installation
pub fn default_document() -> Document {
    Document {
        site_info: SiteInfo {
            name: "Jane Doe".to_string(),
            title: "Security Engineer & Developer".to_string(),
            description: "Penetration tester and developer who breaks systems to build them better.".to_string(),
            email: "hello@example.com".to_string(),
            twitter: "@janedoe".to_string(),
            domain: "example.com".to_string(),
        },
        hero: Hero {
            tag: "🛡️ Security · Development · Research".to_string(),
            title: "Jane Doe".to_string(),
            description: "I find vulnerabilities, write code, and help teams ship software that holds up under attack.".to_string(),
        },
        footer: default_footer(),
        expertise: vec![
            expertise("🔒", "Penetration Testing", "Security assessments, vulnerability research and exploit development."),
            expertise("💻", "Full-Stack Development", "Secure, scalable applications from frontend to backend."),
            expertise("🔍", "Security Research", "Analyzing attack vectors and disclosing findings responsibly."),
            expertise("⚡", "DevSecOps", "Security tooling and automation wired into every stage of delivery."),
        ],
        skills: [
            "Python", "Rust", "Go", "Bash", "Burp Suite", "Metasploit", "Nmap",
            "Wireshark", "Docker", "Kubernetes", "Linux", "OWASP",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        posts: Vec::new(),
    }
}
