//! Contact page route handlers.
//!
//! Messages are validated and logged; nothing is sent anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use urbanswift_core::{ContactForm, Notice};

use crate::error::Result;
use crate::filters;
use crate::middleware::{Notices, push_notice};

#[derive(Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "How do I track my delivery?",
        answer: "Once your order is confirmed, you'll receive a tracking link via SMS and email. You can also track all orders from your dashboard.",
    },
    Faq {
        question: "What areas do you service?",
        answer: "We currently operate in 50+ cities across the country. Enter your postal code on our order page to check if we deliver to your area.",
    },
    Faq {
        question: "How do I become a delivery partner?",
        answer: "Visit our Careers page and apply as a delivery partner. We'll guide you through the onboarding process.",
    },
    Faq {
        question: "What are your delivery hours?",
        answer: "Our standard delivery hours are 8 AM to 10 PM. For hyperlocal delivery, we offer 24/7 service in select areas.",
    },
    Faq {
        question: "How do I report an issue with my delivery?",
        answer: "You can report issues directly from the tracking page, through our mobile app, or by contacting our 24/7 support line.",
    },
];

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub notices: Vec<Notice>,
    pub faqs: &'static [Faq],
}

/// GET /contact
#[instrument(skip(notices))]
pub async fn show(Notices(notices): Notices) -> ContactTemplate {
    ContactTemplate {
        notices,
        faqs: &FAQS,
    }
}

/// POST /contact
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<ContactForm>) -> Result<Redirect> {
    let notice = match form.validate() {
        Ok(message) => {
            tracing::info!(
                email = %message.email,
                has_phone = message.phone.is_some(),
                "Contact message received"
            );
            message.sent_notice()
        }
        Err(err) => {
            tracing::debug!(field = err.field(), "Contact form incomplete");
            err.notice()
        }
    };

    push_notice(&session, notice).await?;
    Ok(Redirect::to("/contact"))
}
