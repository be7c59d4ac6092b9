//! Canned demo profiles, substituted whenever a real fetch fails.
//!
//! The pick is deterministic for a given URL so repeated requests for the
//! same reference resolve to the same person (and therefore the same derived
//! profile id).

use crate::fetch::RawProfile;
use crate::util::stable_hash;

/// Returns the demo profile for a URL. Same URL, same profile.
pub fn fallback_profile(url: &str) -> RawProfile {
    let mut profiles = demo_profiles();
    let index = (stable_hash(url) % profiles.len() as u64) as usize;
    profiles.swap_remove(index)
}

/// All canned demo profiles.
pub fn demo_profiles() -> Vec<RawProfile> {
    vec![
        RawProfile {
            name: "John Doe".into(),
            email: "john.doe@techcorp.com".into(),
            role: "Senior Product Manager".into(),
            company: "TechCorp Inc".into(),
            industry: "Technology".into(),
            location: "San Francisco, CA".into(),
            bio: "Building AI products | Coffee enthusiast | Always learning".into(),
            about: "10+ years in product management. Passionate about user-centric design \
                    and data-driven decisions. Love leading cross-functional teams."
                .into(),
            skills: strings(&[
                "Product Management",
                "AI/ML",
                "Data Analysis",
                "Team Leadership",
                "Strategy",
            ]),
            interests: strings(&["AI", "Startups", "Product Design", "Coffee", "Travel"]),
            education: "MIT - Computer Science".into(),
            years_experience: 10,
            profile_url: "https://linkedin.com/in/johndoe".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
        RawProfile {
            name: "Sarah Sharma".into(),
            email: "sarah@startupxyz.com".into(),
            role: "Founder & CEO".into(),
            company: "StartupXYZ".into(),
            industry: "SaaS".into(),
            location: "New York, NY".into(),
            bio: "CEO @StartupXYZ | Building the future of collaboration 🚀".into(),
            about: "Founded StartupXYZ to help teams collaborate better. Experienced in \
                    fundraising, growth hacking, and scaling teams from 0 to 50+."
                .into(),
            skills: strings(&[
                "Fundraising",
                "Business Strategy",
                "Growth Hacking",
                "Leadership",
                "Sales",
            ]),
            interests: strings(&[
                "Startups",
                "Venture Capital",
                "Entrepreneurship",
                "Networking",
            ]),
            education: "Stanford - MBA".into(),
            years_experience: 8,
            profile_url: "https://linkedin.com/in/sarah-sharma".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
        RawProfile {
            name: "Alex Kumar".into(),
            email: "alex.kumar@devstudio.com".into(),
            role: "Senior Software Engineer".into(),
            company: "DevStudio".into(),
            industry: "Technology".into(),
            location: "Bangalore, India".into(),
            bio: "Senior Eng @DevStudio | Python/Go enthusiast | Open source lover".into(),
            about: "8+ years building scalable systems. Love clean code, good architecture, \
                    and mentoring junior engineers. Active open source contributor."
                .into(),
            skills: strings(&["Python", "Go", "Kubernetes", "System Design", "DevOps", "AWS"]),
            interests: strings(&[
                "Open Source",
                "System Design",
                "Cloud Architecture",
                "Performance Optimization",
            ]),
            education: "IIT Delhi - Computer Science".into(),
            years_experience: 8,
            profile_url: "https://github.com/alexkumar".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
        RawProfile {
            name: "Emma Wilson".into(),
            email: "emma.wilson@designstudio.io".into(),
            role: "Design Lead".into(),
            company: "Design Studio".into(),
            industry: "Design".into(),
            location: "London, UK".into(),
            bio: "Design Lead | UX/UI Enthusiast | User-centric design advocate".into(),
            about: "Passionate about creating beautiful and intuitive user experiences. Led \
                    design teams at multiple startups. Love collaborating with product and \
                    engineering."
                .into(),
            skills: strings(&[
                "UX/UI Design",
                "Figma",
                "User Research",
                "Design Systems",
                "Team Leadership",
            ]),
            interests: strings(&[
                "Design Thinking",
                "User Experience",
                "Accessibility",
                "Design Tools",
            ]),
            education: "Royal College of Art - Interaction Design".into(),
            years_experience: 6,
            profile_url: "https://linkedin.com/in/emmawilson".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
        RawProfile {
            name: "Michael Chen".into(),
            email: "michael@marketingpro.com".into(),
            role: "Marketing Director".into(),
            company: "Marketing Pro".into(),
            industry: "Marketing".into(),
            location: "Toronto, Canada".into(),
            bio: "Marketing Director | Growth Hacker | Data-driven marketer".into(),
            about: "15+ years in marketing and growth. Helped scale 5 companies from startup \
                    to Series B. Expert in product marketing and go-to-market strategy."
                .into(),
            skills: strings(&[
                "Marketing Strategy",
                "Growth Hacking",
                "Product Marketing",
                "Analytics",
                "Team Leadership",
            ]),
            interests: strings(&[
                "Growth Marketing",
                "SaaS",
                "Content Marketing",
                "Community Building",
            ]),
            education: "University of Toronto - Commerce".into(),
            years_experience: 15,
            profile_url: "https://linkedin.com/in/michaelchen".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
        RawProfile {
            name: "Lisa Patel".into(),
            email: "lisa@venturesfund.com".into(),
            role: "Venture Capitalist".into(),
            company: "Ventures Fund".into(),
            industry: "Finance".into(),
            location: "Boston, MA".into(),
            bio: "VC at Ventures Fund | Investing in AI and Climate Tech".into(),
            about: "Invested in 50+ startups. Focus on early-stage AI, climate tech, and \
                    fintech. Former entrepreneur with 2 successful exits."
                .into(),
            skills: strings(&[
                "Venture Capital",
                "Investment Analysis",
                "Networking",
                "Startup Strategy",
                "Due Diligence",
            ]),
            interests: strings(&["AI", "Climate Tech", "Fintech", "Entrepreneurship"]),
            education: "Harvard Business School - MBA".into(),
            years_experience: 12,
            profile_url: "https://linkedin.com/in/lisapatel".into(),
            language: "english".into(),
            ..RawProfile::default()
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_demo_profiles() {
        assert_eq!(demo_profiles().len(), 6);
    }

    #[test]
    fn test_fallback_is_deterministic_per_url() {
        let a = fallback_profile("https://instagram.com/someone");
        let b = fallback_profile("https://instagram.com/someone");
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_demo_profiles_have_required_fields() {
        for profile in demo_profiles() {
            assert!(!profile.name.is_empty());
            assert!(!profile.role.is_empty());
            assert!(!profile.company.is_empty());
            assert!(!profile.email.is_empty());
            assert!(!profile.profile_url.is_empty());
        }
    }
}
