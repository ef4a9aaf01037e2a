//! Literal page content: who, what, where to find them.

use crate::types::{Glyph, ProjectCard, SocialProfile};

pub const OWNER: &str = "Anton Osika";

pub const HERO_TITLE: &str = "Building AGI in Europe";
pub const HERO_SUBTITLE: &str = "Prev. CERN, Sana Labs, YC (2x top company)";

pub const PROJECTS_HEADING: &str = "Notable Projects";
pub const PROJECT_CTA: &str = "Learn More";

pub const ABOUT_HEADING: &str = "About Me";
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm passionate about building AGI (Artificial General Intelligence) in Europe. With a background in prestigious institutions and successful startups, I'm dedicated to pushing the boundaries of AI and making it accessible to everyone.",
    "My journey includes work at CERN, Sana Labs, and founding two top YC companies. Now, I'm focused on projects like GPT Engineer, which aims to revolutionize how we build software.",
    "I believe in reducing barriers to build and empowering people to create amazing things with technology.",
];

pub const CONTACT_HEADING: &str = "Get in Touch";
pub const CONTACT_BLURB: &str =
    "Interested in collaborating or just want to say hi? Feel free to reach out!";

// Lucide outline icons (ISC license) - https://lucide.dev/

pub const GLYPH_GITHUB: Glyph = Glyph {
    paths: &[
        "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
        "M9 18c-4.51 2-5-2-7-2",
    ],
};

pub const GLYPH_TWITTER: Glyph = Glyph {
    paths: &[
        "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
    ],
};

pub const GLYPH_LINKEDIN: Glyph = Glyph {
    paths: &[
        "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
        "M2 9h4v12H2z",
        "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
    ],
};

/// Profiles linked from the hero and the contact section, in display order.
pub const PROFILES: [SocialProfile; 3] = [
    SocialProfile {
        name: "GitHub",
        url: "https://github.com/AntonOsika",
        glyph: GLYPH_GITHUB,
    },
    SocialProfile {
        name: "Twitter",
        url: "https://twitter.com/antonosika",
        glyph: GLYPH_TWITTER,
    },
    SocialProfile {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/antonosika/",
        glyph: GLYPH_LINKEDIN,
    },
];

pub const PROJECTS: [ProjectCard; 2] = [
    ProjectCard {
        title: "GPT Engineer",
        description: "One prompt generates a codebase. Asks clarifying questions, generates technical specs, and writes all necessary code.",
        url: "https://github.com/AntonOsika/gpt-engineer",
    },
    ProjectCard {
        title: "GPT Engineer App",
        description: "A platform that allows anyone to build and deploy web apps using plain English, reducing barriers to build.",
        url: "https://gptengineer.app/",
    },
];
