//! Built-in support vocabulary
//!
//! Category tables are listed in matching priority order. Sub-category
//! tables are in declaration order, which is also their match order.

use crate::classify::Category;

type SubCategoryTable = &'static [(&'static str, &'static [&'static str])];

pub(crate) const CATEGORY_TABLE: &[(Category, &[&str], SubCategoryTable)] = &[
    (
        Category::PaymentAndBilling,
        &[
            "refund", "payment", "billing", "invoice", "price", "cost", "charged",
        ],
        &[
            ("Refund Request", &["refund", "return", "money back"]),
            ("Payment Failed", &["payment failed", "charge", "declined"]),
            ("Invoice", &["invoice", "receipt", "bill"]),
            ("Subscription", &["subscription", "renew", "cancel"]),
            ("Course Pricing", &["price", "cost", "expensive"]),
        ],
    ),
    (
        Category::TechnicalIssues,
        &[
            "cannot access",
            "login",
            "error",
            "broken",
            "not working",
            "video",
            "playback",
            "platform",
        ],
        &[
            ("Platform Access", &["cannot access", "access denied", "login"]),
            ("Video Playback", &["video", "playback", "cannot play"]),
            ("Course Materials", &["materials", "content", "download"]),
            ("Account Login", &["login", "password", "sign in"]),
            (
                "Browser Compatibility",
                &["browser", "chrome", "firefox", "safari"],
            ),
        ],
    ),
    (
        Category::CourseContent,
        &[
            "certificate",
            "completion",
            "course",
            "material",
            "content",
            "curriculum",
        ],
        &[
            ("Course Completion", &["completion", "finished", "done"]),
            ("Certificate", &["certificate", "proof", "credential"]),
            ("Curriculum", &["curriculum", "course structure"]),
            ("Course Duration", &["duration", "long", "hours"]),
            ("Content Quality", &["quality", "content", "material"]),
        ],
    ),
    (
        Category::AccountManagement,
        &[
            "password",
            "account",
            "profile",
            "email",
            "delete",
            "two factor",
            "verification",
        ],
        &[
            ("Profile Update", &["profile", "update", "change"]),
            ("Password Reset", &["password", "reset", "forgot"]),
            ("Account Deletion", &["delete", "remove", "cancel account"]),
            ("Email Change", &["email", "change email"]),
            ("Two Factor Auth", &["2fa", "two factor", "authentication"]),
        ],
    ),
    (
        Category::GeneralQueries,
        &[],
        &[
            ("Inquiry", &[]),
            ("Suggestion", &[]),
            ("Feedback", &[]),
            ("Other", &[]),
        ],
    ),
];

pub(crate) const LEGAL_KEYWORDS: &[&str] = &[
    "legal",
    "lawsuit",
    "attorney",
    "lawyer",
    "compliance",
    "court",
    "dispute",
    "contract",
];

pub(crate) const REFUND_KEYWORDS: &[&str] = &[
    "refund",
    "money back",
    "reimbursement",
    "return",
    "charge back",
    "refund request",
    "cancel subscription",
    "get my money back",
    "refund my payment",
];

pub(crate) const HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "critical",
    "emergency",
    "cannot access",
    "broken",
    "not working",
    "error",
    "failed",
];

pub(crate) const MEDIUM_URGENCY_KEYWORDS: &[&str] =
    &["important", "soon", "need", "issue", "problem", "help"];

pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "excellent",
    "amazing",
    "love",
    "perfect",
    "wonderful",
    "thank you",
    "thanks",
    "appreciate",
    "satisfied",
];

pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "problem",
    "issue",
    "broken",
    "error",
    "frustrated",
    "angry",
];

pub(crate) const REPEATED_CONTACT_COUNT: u32 = 2;
pub(crate) const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.90;
pub(crate) const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.85;
pub(crate) const LOW_CONFIDENCE_THRESHOLD: f64 = 0.75;
