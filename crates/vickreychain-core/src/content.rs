//! Static page copy.
//!
//! All text the landing page shows lives here so the desktop shell and the
//! CLI render exactly the same content.

use serde::Serialize;

/// A card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Short glyph shown above the title
    pub icon: &'static str,
}

/// A question/answer pair in the FAQ list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A numbered card in the "How It Works" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Header block shared by the titled sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    /// Small uppercase label above the heading
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub lede: &'static str,
}

pub const BRAND: &str = "VickreyChain";

pub const HERO_TITLE: &str = "Transparent";
pub const HERO_TITLE_ACCENT: &str = "Vickrey Auctions";
pub const HERO_LEDE: &str = "The first fully decentralized Vickrey auction platform built on the Internet Computer blockchain. Experience the fairest auction mechanism with complete transparency and zero gas fees.";

pub const EMAIL_LABEL: &str = "Email address";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const SUBMIT_LABEL: &str = "Get Early Access";
pub const SUCCESS_MESSAGE: &str = "Thanks for signing up! We'll notify you when we launch.";

pub const ART_BADGE: &str = "Secure Blockchain";
pub const ART_TITLE: &str = "Internet Computer Auctions";
pub const ART_SUBTITLE: &str = "Transparent, efficient, and secure bidding";
pub const ART_CAPTION_TITLE: &str = "Complete Auction Transparency";
pub const ART_CAPTION: &str =
    "Our platform provides real-time insights and verifiable outcomes for all auction participants";

pub const CTA_HEADLINE: &str = "Ready to experience the future of auctions?";
pub const CTA_SUBLINE: &str = "Join our platform today.";
pub const CTA_BUTTON: &str = "Get early access";

pub const HOW_IT_WORKS: SectionCopy = SectionCopy {
    eyebrow: "How It Works",
    heading: "Understanding Vickrey Auctions",
    lede: "The optimal auction format that encourages honest bidding and maximizes value for both buyers and sellers.",
};

pub const FEATURES_COPY: SectionCopy = SectionCopy {
    eyebrow: "Features",
    heading: "Why Choose Our Platform",
    lede: "Combining the efficiency of Vickrey auctions with the power of the Internet Computer blockchain.",
};

pub const FAQ_COPY: SectionCopy = SectionCopy {
    eyebrow: "FAQ",
    heading: "Frequently Asked Questions",
    lede: "Everything you need to know about our Vickrey auction platform.",
};

static FEATURES: [Feature; 6] = [
    Feature {
        title: "Second-Price Mechanism",
        description: "Our Vickrey auctions ensure the winner pays the second-highest bid, promoting truthful bidding and optimal price discovery.",
        icon: "\u{1F3C6}",
    },
    Feature {
        title: "Internet Computer Powered",
        description: "Built on the Internet Computer blockchain for true decentralization, transparency, and immutable auction records.",
        icon: "\u{26D3}\u{FE0F}",
    },
    Feature {
        title: "Gas-Free Transactions",
        description: "No transaction fees for bidding or creating auctions, making it accessible to all participants.",
        icon: "\u{1F4B8}",
    },
    Feature {
        title: "Private Sealed Bids",
        description: "Your bids remain confidential until the auction ends, preventing price manipulation.",
        icon: "\u{1F512}",
    },
    Feature {
        title: "Smart Contract Escrow",
        description: "Funds are securely held in smart contracts until auction completion, ensuring fair settlements.",
        icon: "\u{1F4DD}",
    },
    Feature {
        title: "Real-time Analytics",
        description: "Access detailed auction analytics and historical data to inform your bidding strategy.",
        icon: "\u{1F4CA}",
    },
];

static FAQS: [Faq; 6] = [
    Faq {
        question: "What is a Vickrey auction?",
        answer: "A Vickrey auction is a type of sealed-bid auction where bidders submit bids without knowing others' bids. The highest bidder wins but pays the second-highest bid price. This encourages honest bidding as your bid only determines if you win, not what you pay.",
    },
    Faq {
        question: "How does the Internet Computer blockchain enhance Vickrey auctions?",
        answer: "The Internet Computer provides a decentralized, transparent infrastructure that ensures auction integrity. Smart contracts automatically execute auction rules, bid sealing is cryptographically secure, and the transaction history is immutable and verifiable.",
    },
    Faq {
        question: "Are there any fees to participate in auctions?",
        answer: "Unlike traditional blockchain platforms, our solution on the Internet Computer doesn't require gas fees for transactions. We charge a small percentage fee (3%) only on successful auction completions.",
    },
    Faq {
        question: "How do I know the auction is fair?",
        answer: "All auction logic is implemented in open-source smart contracts that can be verified. Bids remain sealed until the auction ends, and the entire process is automated without human intervention. The blockchain ensures transparency while maintaining bid privacy during the auction.",
    },
    Faq {
        question: "What types of items can be auctioned?",
        answer: "Our platform supports digital assets like NFTs, domain names, and digital collectibles. We're also developing support for physical item auctions with integrated escrow and verification systems.",
    },
    Faq {
        question: "How do I get started?",
        answer: "Sign up for early access using the form on this page. Once launched, you'll need to create an Internet Computer wallet (we recommend Plug Wallet) and connect it to our platform to start participating in auctions.",
    },
];

static STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Submit Sealed Bids",
        description: "All participants submit their bids privately. No one, including the auctioneer, knows what others have bid during this phase.",
    },
    Step {
        number: 2,
        title: "Auction Closes",
        description: "When the auction period ends, all bids are cryptographically revealed and verified by the blockchain.",
    },
    Step {
        number: 3,
        title: "Second-Price Settlement",
        description: "The highest bidder wins but pays only the amount of the second-highest bid, promoting honest valuation.",
    },
];

/// The feature grid, in display order.
pub fn features() -> &'static [Feature] {
    &FEATURES
}

/// The FAQ list, in display order.
pub fn faqs() -> &'static [Faq] {
    &FAQS
}

/// The "How It Works" steps, numbered from 1.
pub fn steps() -> &'static [Step] {
    &STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_features_with_text() {
        assert_eq!(features().len(), 6);
        for feature in features() {
            assert!(!feature.title.trim().is_empty());
            assert!(!feature.description.trim().is_empty());
            assert!(!feature.icon.is_empty());
        }
    }

    #[test]
    fn six_faqs_with_text() {
        assert_eq!(faqs().len(), 6);
        for faq in faqs() {
            assert!(faq.question.ends_with('?'));
            assert!(!faq.answer.trim().is_empty());
        }
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = steps().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<_> = features().iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), features().len());
    }

    #[test]
    fn copy_has_no_html_entities() {
        for faq in faqs() {
            assert!(!faq.answer.contains("&apos;"), "{}", faq.question);
        }
        assert!(!SUCCESS_MESSAGE.contains('&'));
    }
}
