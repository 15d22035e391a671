//! Static FAQ knowledge base the assistant answers from.
//!
//! The store is an ordered list of entries built once at startup and never
//! mutated afterwards. Order matters: the matcher resolves ties in favor of
//! the earlier entry, so reordering entries changes tie-break results.

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Topic tag for a knowledge entry. Informational only; matching never
/// looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Service,
    Contact,
    About,
}

/// One canned answer together with the keywords that trigger it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique within the store. Exists for lookups and logs, not matching.
    pub id: String,
    /// Trigger tokens, held lowercase. A keyword may contain spaces
    /// ("who are you") and is matched by plain substring containment.
    pub keywords: Vec<String>,
    pub category: Category,
    /// Returned verbatim when this entry wins the match.
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(id: &str, keywords: &[&str], category: Category, answer: &str) -> Self {
        Self {
            id: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
            answer: answer.to_string(),
        }
    }
}

/// Ordered, immutable collection of FAQ entries.
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build a store from `entries`, rejecting authoring mistakes that
    /// would otherwise surface later as odd match results: an entry with
    /// no keywords, a blank keyword, an empty answer, or a reused id.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for entry in &entries {
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(anyhow!("duplicate knowledge entry id '{}'", entry.id));
            }
            if entry.keywords.is_empty() {
                return Err(anyhow!("knowledge entry '{}' has no keywords", entry.id));
            }
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(anyhow!("knowledge entry '{}' has a blank keyword", entry.id));
            }
            if entry.answer.is_empty() {
                return Err(anyhow!("knowledge entry '{}' has an empty answer", entry.id));
            }
        }
        tracing::debug!(entries = entries.len(), "knowledge base built");
        Ok(Self { entries })
    }

    /// The knowledge base shipped with the assistant. The data is fixed at
    /// compile time and covered by tests, so construction is infallible.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        // General / greetings
        KnowledgeEntry::new(
            "greeting",
            &["hello", "hi", "hey", "greetings", "start", "begin"],
            Category::General,
            "Hello! I'm the Neurify AI Assistant. I can help you with information about our services, expertise, and how we can transform your business with AI. What can I do for you today?",
        ),
        KnowledgeEntry::new(
            "identity",
            &["who are you", "what are you", "your name"],
            Category::General,
            "I am Neurify's advanced AI assistant, designed to guide you through our futuristic marketing and technology solutions.",
        ),
        KnowledgeEntry::new(
            "capabilities",
            &["what can you do", "help", "capabilities", "features"],
            Category::General,
            "I can provide details on our AI marketing services, machine learning solutions, web development, automation, and more. Just ask!",
        ),
        // About the company
        KnowledgeEntry::new(
            "about-neurify",
            &["about", "company", "agency", "who is neurify", "what is neurify"],
            Category::About,
            "Neurify is a forward-thinking AI marketing agency. We combine artificial intelligence, data science, and premium design to build intelligent digital experiences that drive real business growth.",
        ),
        KnowledgeEntry::new(
            "mission",
            &["mission", "goal", "objective"],
            Category::About,
            "Our mission is to empower businesses with cutting-edge AI solutions that drive growth, efficiency, and innovation, making advanced technology accessible to all.",
        ),
        KnowledgeEntry::new(
            "vision",
            &["vision", "future"],
            Category::About,
            "We envision a future where intelligent technology seamlessly enhances every aspect of business and human experience, leading global digital transformation.",
        ),
        KnowledgeEntry::new(
            "values",
            &["values", "culture", "principles"],
            Category::About,
            "We are driven by Innovation, Client Focus, Excellence, and Collaboration. We push boundaries to deliver extraordinary results.",
        ),
        // Services
        KnowledgeEntry::new(
            "services-overview",
            &["services", "what do you offer", "products", "solutions"],
            Category::Service,
            "We offer a range of premium services including: Website Making & Management, Machine Learning Solutions, AI Digital Marketing, AI Chatbots, Graphic Design, Content Writing, Business Automation, and AR/VR Experiences.",
        ),
        KnowledgeEntry::new(
            "web-design",
            &["website", "web design", "web development", "site"],
            Category::Service,
            "Our Website Making & Management service builds stunning, high-performance websites engineered for SEO dominance and conversion settings. We handle design, development, and ongoing management.",
        ),
        KnowledgeEntry::new(
            "machine-learning",
            &["machine learning", "ml", "predictive", "algorithms", "data science"],
            Category::Service,
            "We build custom, production-ready Machine Learning systems for predictive intelligence, NLP, computer vision, and recommendation engines to automate and scale your business.",
        ),
        KnowledgeEntry::new(
            "ai-marketing",
            &["marketing", "digital marketing", "ads", "seo", "campaigns"],
            Category::Service,
            "Our AI Digital Marketing service uses predictive analytics and behavioral targeting to maximize ROI. We optimize SEO, paid ads, and conversion rates in real-time.",
        ),
        KnowledgeEntry::new(
            "chatbots",
            &["chatbot", "bot", "support bot", "automated support"],
            Category::Service,
            "We develop intelligent AI Chatbots that provide 24/7 support, capture leads, and integrate with your CRM. They understand natural language and drive conversions.",
        ),
        KnowledgeEntry::new(
            "graphic-design",
            &["graphic design", "design", "thumbnails", "visuals", "branding"],
            Category::Service,
            "Our Graphic Design service creates high-impact visuals, YouTube thumbnails, ad creatives, and brand assets engineered to stop the scroll and capture attention.",
        ),
        KnowledgeEntry::new(
            "content-writing",
            &["content", "writing", "copywriting", "blogs", "articles"],
            Category::Service,
            "We provide SEO-optimized Content Writing that ranks and converts. From website copy to long-form blogs, our content is driven by intent research and conversion psychology.",
        ),
        KnowledgeEntry::new(
            "business-automation",
            &["automation", "workflows", "crm", "efficiency"],
            Category::Service,
            "Our Business Automation solutions leverage AI and ML to streamline operations, eliminate manual tasks, and scale your systems effortlessly.",
        ),
        KnowledgeEntry::new(
            "ar-vr",
            &["ar", "vr", "3d", "augmented reality", "virtual reality", "metaverse"],
            Category::Service,
            "We create immersive AR, VR, and 3D experiences, including product visualizations and virtual showrooms, allowing your customers to interact with your brand in new dimensions.",
        ),
        // Contact
        KnowledgeEntry::new(
            "contact-general",
            &["contact", "reach out", "email", "phone", "call", "talk"],
            Category::Contact,
            "You can reach us at neura.mark.officialmail@gmail.com or call us at 8433541311. We'd love to discuss your project!",
        ),
        KnowledgeEntry::new(
            "location",
            &["location", "where", "address", "office"],
            Category::Contact,
            "We are located in Mumbai, India.",
        ),
        KnowledgeEntry::new(
            "cost",
            &["cost", "price", "pricing", "quote", "rates"],
            Category::Contact,
            "Our pricing is tailored to each project's specific needs and scale. Please contact us for a detailed quote based on your requirements.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, keywords: &[&str]) -> KnowledgeEntry {
        KnowledgeEntry::new(id, keywords, Category::General, "An answer.")
    }

    #[test]
    fn test_builtin_is_well_formed() {
        let kb = KnowledgeBase::new(builtin_entries()).unwrap();
        assert!(!kb.is_empty());
        assert_eq!(kb.len(), 19);
        assert_eq!(kb.len(), KnowledgeBase::builtin().len());
    }

    #[test]
    fn test_get_finds_entry_by_id() {
        let kb = KnowledgeBase::builtin();
        let greeting = kb.get("greeting").unwrap();
        assert_eq!(greeting.category, Category::General);
        assert!(greeting.keywords.contains(&"hello".to_string()));
        assert!(kb.get("no-such-entry").is_none());
    }

    #[test]
    fn test_keywords_lowercased_on_construction() {
        let e = entry("mixed", &["Hello", "HI"]);
        assert_eq!(e.keywords, vec!["hello", "hi"]);
    }

    #[test]
    fn test_rejects_entry_without_keywords() {
        let result = KnowledgeBase::new(vec![entry("empty", &[])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let result = KnowledgeBase::new(vec![entry("blank", &["ok", "   "])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_answer() {
        let bad = KnowledgeEntry::new("silent", &["hello"], Category::General, "");
        let result = KnowledgeBase::new(vec![bad]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = KnowledgeBase::new(vec![entry("dup", &["a"]), entry("dup", &["b"])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let kb = KnowledgeBase::new(vec![entry("first", &["a"]), entry("second", &["b"])]).unwrap();
        let ids: Vec<&str> = kb.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
