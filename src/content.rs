//! Static marketing content for the landing page. Feature entries are fixed
//! at build time and render in declaration order; testimonials come from the
//! demo provider below in the order it returns them.
//!
//! All strings here are opaque marketing copy, not verified claims.

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        icon: Icon::Heart,
        title: "Gentle Voice Assistant",
        description: "A caring AI companion that helps with daily reminders and family recognition using simple voice commands.",
    },
    FeatureDescriptor {
        icon: Icon::Users,
        title: "Family Connection",
        description: "Keep your loved ones connected with photo-based family member identification and contact management.",
    },
    FeatureDescriptor {
        icon: Icon::Shield,
        title: "Emergency Support",
        description: "Immediate access to emergency contacts and professional help when needed most.",
    },
    FeatureDescriptor {
        icon: Icon::Clock,
        title: "24/7 Availability",
        description: "Round-the-clock support for memory assistance, medication reminders, and daily guidance.",
    },
];

pub fn features() -> &'static [FeatureDescriptor] {
    &FEATURES
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestimonialRecord {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

const TESTIMONIALS: [TestimonialRecord; 3] = [
    TestimonialRecord {
        id: 1,
        name: "Margaret Chen",
        role: "Living with early-stage dementia",
        quote: "The gentle voice reminds me of my granddaughter. It never makes me feel bad when I forget things.",
        image: "https://images.pexels.com/photos/3768114/pexels-photo-3768114.jpeg?w=160",
    },
    TestimonialRecord {
        id: 2,
        name: "David Rodriguez",
        role: "Caregiver for his mother",
        quote: "Mom actually uses it every day. The photo recognition helps her remember who's calling before she picks up.",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?w=160",
    },
    TestimonialRecord {
        id: 3,
        name: "Susan Walsh",
        role: "Daughter and long-distance caregiver",
        quote: "Being three states away was terrifying before. Now I know she has a companion checking in, and I get a call if anything seems off.",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?w=160",
    },
];

/// Demo testimonial provider. A production build would fetch these; the
/// landing page only depends on getting a finite sequence back.
pub fn testimonials() -> &'static [TestimonialRecord] {
    &TESTIMONIALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_features_in_declared_order() {
        let features = features();
        assert_eq!(features.len(), 4);
        let titles: Vec<&str> = features.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Gentle Voice Assistant",
                "Family Connection",
                "Emergency Support",
                "24/7 Availability",
            ]
        );
    }

    #[test]
    fn features_have_copy() {
        for feature in features() {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let records = testimonials();
        assert!(!records.is_empty());
        for (i, a) in records.iter().enumerate() {
            assert!(!a.name.is_empty());
            assert!(!a.quote.is_empty());
            for b in &records[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
