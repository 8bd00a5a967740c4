//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use urbanswift_core::Notice;

use crate::filters;
use crate::middleware::Notices;

/// A headline number.
#[derive(Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A service card with its bullet points.
#[derive(Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

/// A "why choose us" point.
#[derive(Clone, Copy)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
}

/// A customer quote.
#[derive(Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// A shortcut tile into one of the site's entry points.
#[derive(Clone, Copy)]
pub struct PortalLink {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "50K+", label: "Deliveries" },
    Stat { value: "500+", label: "Partners" },
    Stat { value: "99%", label: "On-Time" },
];

pub const PORTAL_LINKS: [PortalLink; 4] = [
    PortalLink {
        title: "Producer Portal",
        description: "Ship directly to retailers",
        href: "/producer",
    },
    PortalLink {
        title: "Wholesaler Portal",
        description: "Bulk delivery solutions",
        href: "/wholesaler",
    },
    PortalLink {
        title: "Retailer Portal",
        description: "Order from suppliers",
        href: "/retailer",
    },
    PortalLink {
        title: "Quick Order",
        description: "Customer deliveries",
        href: "/order",
    },
];

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Producer to Retailer",
        description: "Direct delivery from manufacturing facilities to retail stores. Skip the middleman and reduce costs.",
        features: ["Same-day pickup", "Temperature controlled", "Bulk handling"],
    },
    Service {
        title: "Wholesaler to Retailer",
        description: "Efficient distribution from wholesale centers to retail locations across the city.",
        features: ["Scheduled routes", "Inventory sync", "Priority handling"],
    },
    Service {
        title: "Retailer to Consumer",
        description: "Last-mile delivery from stores to customers' doorsteps with real-time tracking.",
        features: ["Express delivery", "Live tracking", "Contactless drop"],
    },
    Service {
        title: "Hyperlocal Delivery",
        description: "Neighborhood-level delivery for urgent needs. Get anything delivered within hours.",
        features: ["1-hour delivery", "Local experts", "24/7 service"],
    },
];

pub const REASONS: [Reason; 4] = [
    Reason {
        title: "Lightning Fast",
        description: "Same-day and express delivery options to meet your urgent needs. Average delivery time under 2 hours for local orders.",
    },
    Reason {
        title: "Verified Partners",
        description: "All our delivery partners are thoroughly vetted, trained, and insured. Your packages are in safe hands.",
    },
    Reason {
        title: "Real-time Tracking",
        description: "Know exactly where your delivery is with live GPS tracking. Get instant notifications at every step.",
    },
    Reason {
        title: "Affordable Rates",
        description: "Competitive pricing with no hidden fees. Volume discounts available for businesses.",
    },
];

pub const REACH_STATS: [Stat; 4] = [
    Stat { value: "2M+", label: "Packages Delivered" },
    Stat { value: "15K+", label: "Active Partners" },
    Stat { value: "98.5%", label: "Customer Satisfaction" },
    Stat { value: "50+", label: "Cities Covered" },
];

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Owner, Fresh Produce Co.",
        quote: "UrbanSwift has transformed how we deliver to our retail partners. Same-day delivery has become our competitive advantage.",
    },
    Testimonial {
        name: "Michael Roberts",
        role: "Operations Manager, Metro Wholesale",
        quote: "The bulk delivery options and scheduled routes have cut our logistics costs by 30%. Highly recommended for wholesalers.",
    },
    Testimonial {
        name: "Emily Thompson",
        role: "Retail Store Manager",
        quote: "Our customers love the real-time tracking. UrbanSwift's reliability has boosted our customer satisfaction scores significantly.",
    },
    Testimonial {
        name: "David Park",
        role: "E-commerce Entrepreneur",
        quote: "The hyperlocal delivery feature is a game-changer. My customers receive orders within hours, not days!",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub notices: Vec<Notice>,
    pub hero_stats: &'static [Stat],
    pub portal_links: &'static [PortalLink],
    pub services: &'static [Service],
    pub reasons: &'static [Reason],
    pub reach_stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
}

/// Display the home page.
#[instrument(skip(notices))]
pub async fn home(Notices(notices): Notices) -> impl IntoResponse {
    HomeTemplate {
        notices,
        hero_stats: &HERO_STATS,
        portal_links: &PORTAL_LINKS,
        services: &SERVICES,
        reasons: &REASONS,
        reach_stats: &REACH_STATS,
        testimonials: &TESTIMONIALS,
    }
}
