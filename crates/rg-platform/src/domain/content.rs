//! Landing Page Content
//!
//! The static marketing payload served to the frontend. No storage
//! behind this; the data changes with releases, not at runtime.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub city: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialProofStats {
    pub interested_students: u32,
    pub universities: u32,
    pub cities: u32,
    pub growth_rate: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Benefit {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProblemPoint {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SocialLink {
    pub platform: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Everything the landing page renders besides the waitlist itself.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketingContent {
    pub testimonials: Vec<Testimonial>,
    pub stats: SocialProofStats,
    pub benefits: Vec<Benefit>,
    pub problem_points: Vec<ProblemPoint>,
    pub social_links: Vec<SocialLink>,
    pub contact: ContactInfo,
}

impl MarketingContent {
    /// The current launch-campaign payload.
    pub fn current() -> Self {
        Self {
            testimonials: vec![
                Testimonial {
                    id: 1,
                    name: "Arjun Sharma".to_string(),
                    role: "Engineering Student, IIT Delhi".to_string(),
                    city: "Delhi".to_string(),
                    quote: "Finally, energy without the sugar crash! Perfect for those late-night study sessions.".to_string(),
                    rating: 5,
                },
                Testimonial {
                    id: 2,
                    name: "Priya Patel".to_string(),
                    role: "Medical Student".to_string(),
                    city: "Mumbai".to_string(),
                    quote: "As a med student, I need clean energy. Rise Gum is a game-changer!".to_string(),
                    rating: 5,
                },
                Testimonial {
                    id: 3,
                    name: "Rohan Gupta".to_string(),
                    role: "Software Developer".to_string(),
                    city: "Bangalore".to_string(),
                    quote: "Convenient and effective. No more coffee stains on my laptop!".to_string(),
                    rating: 5,
                },
            ],
            stats: SocialProofStats {
                interested_students: 1247,
                universities: 15,
                cities: 8,
                growth_rate: "+12% weekly".to_string(),
            },
            benefits: vec![
                Benefit {
                    id: 1,
                    title: "Sugar-Free & Healthy".to_string(),
                    description: "Zero sugar, zero calories. All the energy, none of the crash.".to_string(),
                    icon: "Heart".to_string(),
                },
                Benefit {
                    id: 2,
                    title: "Pocket-Sized Convenience".to_string(),
                    description: "Fits anywhere. Perfect for exams, meetings, or long commutes.".to_string(),
                    icon: "Zap".to_string(),
                },
                Benefit {
                    id: 3,
                    title: "Fast-Acting Energy".to_string(),
                    description: "Energy in seconds, not minutes. Powered by natural caffeine.".to_string(),
                    icon: "Clock".to_string(),
                },
            ],
            problem_points: vec![
                ProblemPoint {
                    id: 1,
                    title: "Sugary Energy Drinks".to_string(),
                    description: "High sugar, crashes, unhealthy".to_string(),
                    icon: "X".to_string(),
                    kind: "problem".to_string(),
                },
                ProblemPoint {
                    id: 2,
                    title: "Regular Gum".to_string(),
                    description: "No energy boost, just flavor".to_string(),
                    icon: "Minus".to_string(),
                    kind: "neutral".to_string(),
                },
                ProblemPoint {
                    id: 3,
                    title: "Rise Gum".to_string(),
                    description: "Clean energy, sugar-free, convenient".to_string(),
                    icon: "CheckCircle".to_string(),
                    kind: "solution".to_string(),
                },
            ],
            social_links: vec![
                SocialLink {
                    platform: "Instagram".to_string(),
                    icon: "Instagram".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    platform: "Twitter".to_string(),
                    icon: "Twitter".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    icon: "Linkedin".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    platform: "WhatsApp".to_string(),
                    icon: "MessageCircle".to_string(),
                    url: "#".to_string(),
                },
            ],
            contact: ContactInfo {
                email: "hello@risegum.in".to_string(),
                phone: "+91-9999-RISE-GUM".to_string(),
                address: "Coming to campuses near you".to_string(),
            },
        }
    }
}
