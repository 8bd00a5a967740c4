//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use urbanswift_core::Notice;

use crate::filters;
use crate::middleware::Notices;
use crate::routes::home::Stat;

#[derive(Clone, Copy)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Our Mission",
        description: "To provide seamless, fast, and reliable logistics solutions that connect businesses and customers across urban landscapes.",
    },
    Pillar {
        title: "Our Vision",
        description: "To become the most trusted logistics platform, setting the standard for speed, transparency, and customer satisfaction.",
    },
    Pillar {
        title: "Our Values",
        description: "Integrity, innovation, and customer-centricity drive everything we do. We believe in building lasting partnerships.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "15K+", label: "Active Partners" },
    Stat { value: "2M+", label: "Deliveries" },
    Stat { value: "50+", label: "Cities" },
    Stat { value: "98.5%", label: "Satisfaction" },
];

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2019",
        title: "Founded",
        description: "UrbanSwift started with a mission to revolutionize urban logistics",
    },
    Milestone {
        year: "2020",
        title: "10K Deliveries",
        description: "Reached our first major milestone during challenging times",
    },
    Milestone {
        year: "2021",
        title: "Expanded to 20 Cities",
        description: "Rapid growth across major metropolitan areas",
    },
    Milestone {
        year: "2023",
        title: "2M+ Deliveries",
        description: "Trusted by thousands of businesses nationwide",
    },
];

pub const TEAM: [TeamMember; 5] = [
    TeamMember { name: "Bhavya Singhal", role: "CEO & Founder" },
    TeamMember { name: "Krishiv Sharma", role: "COO" },
    TeamMember { name: "Navay Gupta", role: "CTO" },
    TeamMember { name: "Vikhyat Wadhwa", role: "Head of Operations" },
    TeamMember { name: "Rudra Manhas", role: "Head of Technology" },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub notices: Vec<Notice>,
    pub pillars: &'static [Pillar],
    pub stats: &'static [Stat],
    pub milestones: &'static [Milestone],
    pub team: &'static [TeamMember],
}

/// Display the about page.
#[instrument(skip(notices))]
pub async fn about(Notices(notices): Notices) -> impl IntoResponse {
    AboutTemplate {
        notices,
        pillars: &PILLARS,
        stats: &STATS,
        milestones: &MILESTONES,
        team: &TEAM,
    }
}
