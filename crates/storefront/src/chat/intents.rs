//! Static intent table for the Flaggy support chat.
//!
//! Keywords and aliases are lower-case substrings. Matching is plain
//! containment, so short triggers match inside longer words ("track" matches
//! "tracking"); keep entries specific enough that this stays useful.

use flagpole_core::{Intent, IntentLink, IntentResponse};

/// Phrases that route the conversation to a human regardless of score.
pub const HUMAN_HANDOFF_TRIGGERS: &[&str] = &[
    "human",
    "agent",
    "representative",
    "real person",
    "talk to someone",
    "speak to someone",
    "customer service",
    "call me",
];

/// Reply shown when the customer asks for a person.
pub const HANDOFF_MESSAGE: &str = "No problem, let's get you to our support team. \
     Reach us by phone or email below and a flagpole specialist will take it from here.";

/// Contact options shown alongside the hand-off reply.
pub const CONTACT_LINKS: &[IntentLink] = &[
    IntentLink {
        label: "Call (800) 555-0142",
        url: "tel:+18005550142",
    },
    IntentLink {
        label: "Email support",
        url: "mailto:support@flagpolestore.com",
    },
    IntentLink {
        label: "Contact form",
        url: "/contact",
    },
];

/// Reply shown when nothing in the table matches.
pub const FALLBACK_MESSAGE: &str = "I'm not sure I caught that. \
     Here are a few things I can help with, or ask to talk to someone.";

/// Quick-reply topics offered with the fallback reply.
pub const DEFAULT_TOPICS: &[&str] = &[
    "Where is my order?",
    "How do I install my flagpole?",
    "My pole is stuck",
    "What size flag do I need?",
    "Returns and warranty",
];

/// The intent table, in tie-break order.
pub static INTENTS: &[Intent] = &[
    Intent {
        name: "greeting",
        topic: "Say hello",
        keywords: &[
            "hello",
            "hey there",
            "good morning",
            "good afternoon",
            "good evening",
            "howdy",
        ],
        aliases: &["hiya", "greetings"],
        priority: Some(10),
        response: IntentResponse::Variants(&[
            "Hi! I'm Flaggy. Ask me about orders, installation, sizing, or anything flagpole.",
            "Hello there! I'm Flaggy, your flagpole helper. What can I do for you today?",
            "Hey! Flaggy here. Need help with an order, a stuck pole, or picking a flag size?",
        ]),
        follow_up: &["Where is my order?", "How do I install my flagpole?"],
        links: &[],
    },
    Intent {
        name: "thanks",
        topic: "Thanks",
        keywords: &["thank you", "thanks", "appreciate it"],
        aliases: &["thx", "cheers"],
        priority: Some(5),
        response: IntentResponse::Variants(&[
            "You're welcome! Fly it proudly.",
            "Happy to help. Anything else I can do?",
        ]),
        follow_up: &[],
        links: &[],
    },
    Intent {
        name: "order_status",
        topic: "Order status",
        keywords: &[
            "order status",
            "where is my order",
            "track",
            "tracking",
            "order number",
        ],
        aliases: &["order", "package", "delivery"],
        priority: Some(10),
        response: IntentResponse::Single(
            "You can follow your order from your account. Tracking numbers are emailed as soon \
             as your flagpole leaves our warehouse, usually within 1-2 business days.",
        ),
        follow_up: &["How long does shipping take?", "Can I change my order?"],
        links: &[IntentLink {
            label: "View my orders",
            url: "/account/orders",
        }],
    },
    Intent {
        name: "shipping",
        topic: "Shipping",
        keywords: &["shipping", "ship to", "how long to arrive", "free shipping"],
        aliases: &["freight", "arrive", "transit"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Shipping is free in the contiguous US. Most orders arrive in 3-7 business days; \
             flagpoles ship in a reinforced tube by ground freight.",
        ),
        follow_up: &["Where is my order?", "Do you ship to Canada?"],
        links: &[IntentLink {
            label: "Shipping policy",
            url: "/pages/shipping",
        }],
    },
    Intent {
        name: "returns",
        topic: "Returns",
        keywords: &["return", "refund", "exchange", "money back"],
        aliases: &["send it back", "cancel"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Not happy? Return any unused flagpole within 60 days for a full refund. \
             Start a return from your order page and we'll email a prepaid label.",
        ),
        follow_up: &["What does the warranty cover?"],
        links: &[IntentLink {
            label: "Start a return",
            url: "/pages/returns",
        }],
    },
    Intent {
        name: "warranty",
        topic: "Warranty",
        keywords: &["warranty", "guarantee", "lifetime"],
        aliases: &["broken", "defect", "replace"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Every telescoping flagpole carries a lifetime warranty against manufacturing \
             defects, including wind damage to the pole sections.",
        ),
        follow_up: &["How do I file a warranty claim?"],
        links: &[IntentLink {
            label: "Warranty details",
            url: "/pages/warranty",
        }],
    },
    Intent {
        name: "installation",
        topic: "Installation",
        keywords: &[
            "install",
            "installation",
            "set up",
            "ground sleeve",
            "how to mount",
        ],
        aliases: &["concrete", "dig", "hole"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Installation takes about an hour: dig a hole about 2 ft deep, set the ground sleeve \
             in concrete, let it cure for 24 hours, then drop the pole in.",
        ),
        follow_up: &["What size flag do I need?", "Do I need concrete?"],
        links: &[IntentLink {
            label: "Installation video",
            url: "/pages/installation",
        }],
    },
    Intent {
        name: "troubleshooting_stuck_joint",
        topic: "Stuck pole section",
        keywords: &[
            "stuck",
            "won't twist",
            "jammed",
            "won't extend",
            "won't collapse",
        ],
        aliases: &["seized", "can't twist", "hard to turn", "frozen"],
        priority: Some(10),
        response: IntentResponse::Single(
            "A stuck section is usually grit in the twist lock. Hold the lower section firmly, \
             twist the upper one clockwise a quarter turn to release, then rinse the joint with \
             warm water and let it dry before extending again.",
        ),
        follow_up: &["It still won't move", "What does the warranty cover?"],
        links: &[IntentLink {
            label: "Troubleshooting guide",
            url: "/pages/troubleshooting",
        }],
    },
    Intent {
        name: "troubleshooting_flag_wrap",
        topic: "Flag wrapping",
        keywords: &["wrap", "wrapping", "tangled", "flag wraps"],
        aliases: &["tangle", "twisted around"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Our rotating anti-wrap rings let the flag swivel with the wind. If it still wraps, \
             check that both rings spin freely and aren't overtightened.",
        ),
        follow_up: &["Do you sell replacement rings?"],
        links: &[],
    },
    Intent {
        name: "wind_rating",
        topic: "Wind rating",
        keywords: &["wind", "storm", "hurricane", "mph"],
        aliases: &["weather", "gust"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Our 20 ft pole is rated for sustained winds up to 90 mph with the flag lowered. \
             We recommend taking the flag down ahead of major storms.",
        ),
        follow_up: &["What is the pole made of?"],
        links: &[],
    },
    Intent {
        name: "flag_sizing",
        topic: "Flag sizing",
        keywords: &[
            "what size flag",
            "flag size",
            "which flag fits",
            "3x5",
            "4x6",
        ],
        aliases: &["size", "dimensions"],
        priority: Some(10),
        response: IntentResponse::Single(
            "A 3x5 flag suits poles from 15 to 20 ft; go with 4x6 on a 25 ft pole.",
        ),
        follow_up: &["How tall should my flagpole be?"],
        links: &[IntentLink {
            label: "Shop flags",
            url: "/collections/flags",
        }],
    },
    Intent {
        name: "pole_height",
        topic: "Pole height",
        keywords: &["how tall", "height", "15 foot", "20 foot", "25 foot"],
        aliases: &["feet", "foot", "tall"],
        priority: Some(10),
        response: IntentResponse::Single(
            "For a single-story home a 20 ft pole is the classic choice; pick 25 ft for two \
             stories or open yards.",
        ),
        follow_up: &["What size flag do I need?"],
        links: &[IntentLink {
            label: "Compare poles",
            url: "/collections/flagpoles",
        }],
    },
    Intent {
        name: "lighting",
        topic: "Solar lighting",
        keywords: &["light", "solar", "illuminate", "night"],
        aliases: &["lamp", "dark", "bulb"],
        priority: Some(10),
        response: IntentResponse::Single(
            "Our solar top light mounts in place of the ball topper and keeps your flag lit \
             all night after a sunny day.",
        ),
        follow_up: &["Do you sell toppers?"],
        links: &[IntentLink {
            label: "Solar light",
            url: "/products/solar-flagpole-light",
        }],
    },
    Intent {
        name: "discounts",
        topic: "Discounts",
        keywords: &["military", "veteran", "first responder", "discount"],
        aliases: &["coupon", "promo", "sale"],
        priority: Some(10),
        response: IntentResponse::Single(
            "We offer 15% off for active military, veterans, and first responders. \
             Verify once and the discount applies at checkout.",
        ),
        follow_up: &["How do I verify?"],
        links: &[IntentLink {
            label: "Verify eligibility",
            url: "/pages/heroes-discount",
        }],
    },
    Intent {
        name: "payment",
        topic: "Payment options",
        keywords: &["payment", "pay with", "financing", "affirm", "credit card"],
        aliases: &["paypal", "klarna", "split pay"],
        priority: Some(10),
        response: IntentResponse::Single(
            "We accept all major cards, PayPal, and Shop Pay. Financing through Shop Pay \
             Installments is available on orders over $50.",
        ),
        follow_up: &[],
        links: &[],
    },
    Intent {
        name: "materials",
        topic: "Materials",
        keywords: &["aluminum", "material", "made of", "rust"],
        aliases: &["metal", "anodized", "quality"],
        priority: Some(8),
        response: IntentResponse::Single(
            "Poles are aircraft-grade anodized aluminum, so they won't rust, with UV-stable \
             nylon hardware.",
        ),
        follow_up: &["How strong is it in the wind?"],
        links: &[],
    },
    Intent {
        name: "accessories",
        topic: "Accessories",
        keywords: &["accessor", "topper", "eagle", "flash collar", "extra flag"],
        aliases: &["ball", "add-on"],
        priority: Some(8),
        response: IntentResponse::Single(
            "We carry gold ball and eagle toppers, flash collars, solar lights, and spare \
             anti-wrap rings.",
        ),
        follow_up: &["Do you have a solar light?"],
        links: &[IntentLink {
            label: "Shop accessories",
            url: "/collections/accessories",
        }],
    },
    Intent {
        name: "comparison",
        topic: "Compare poles",
        keywords: &["compare", "difference between", "versus", " vs "],
        aliases: &["better", "which one"],
        priority: Some(8),
        response: IntentResponse::Single(
            "Our telescoping poles need no rope and install in an hour; sectional poles cost \
             less but use a halyard. The comparison chart lays out both side by side.",
        ),
        follow_up: &["How tall should my flagpole be?"],
        links: &[IntentLink {
            label: "Comparison chart",
            url: "/pages/compare",
        }],
    },
];
