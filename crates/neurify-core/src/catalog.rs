//! Static catalog of the agency's service offerings.
//!
//! Display data for hosts; the answer matcher never reads it.

use serde::{Deserialize, Serialize};

/// A feature block within a service offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceFeature {
    pub title: String,
    pub details: Vec<String>,
}

/// A question and answer pair shown on a service page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceFaq {
    pub question: String,
    pub answer: String,
}

/// One service offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// URL-style slug, unique within the catalog.
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<ServiceFeature>,
    /// Engagement phases, in order.
    pub process: Vec<String>,
    pub benefits: Vec<String>,
    /// May be empty; not every service has page FAQs.
    pub faqs: Vec<ServiceFaq>,
    /// Call-to-action label.
    pub cta_text: String,
}

/// Ordered, immutable list of the services on offer.
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// The catalog shipped with the assistant.
    pub fn builtin() -> Self {
        Self {
            services: builtin_services(),
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn feature(title: &str, details: &[&str]) -> ServiceFeature {
    ServiceFeature {
        title: title.to_string(),
        details: strings(details),
    }
}

fn faq(question: &str, answer: &str) -> ServiceFaq {
    ServiceFaq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    title: &str,
    tagline: &str,
    description: &str,
    features: Vec<ServiceFeature>,
    process: &[&str],
    benefits: &[&str],
    faqs: Vec<ServiceFaq>,
    cta_text: &str,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        features,
        process: strings(process),
        benefits: strings(benefits),
        faqs,
        cta_text: cta_text.to_string(),
    }
}

fn builtin_services() -> Vec<Service> {
    vec![
        service(
            "website-making-management",
            "Website Making & Management",
            "Premium Website Design & Full-Scale Website Management",
            "Build stunning, responsive websites with cutting-edge technology and seamless management.",
            vec![
                feature(
                    "Luxury UI/UX Design",
                    &[
                        "Premium, modern, minimal interfaces",
                        "Brand-aligned visual identity",
                        "User journey mapping for higher engagement",
                    ],
                ),
                feature(
                    "SEO-First Architecture",
                    &[
                        "Clean URL structures",
                        "Schema-ready layouts",
                        "Optimized headings & crawl paths",
                        "Core Web Vitals optimization",
                    ],
                ),
                feature(
                    "Performance Engineering",
                    &[
                        "Lightning-fast load times",
                        "Mobile-first responsiveness",
                        "Secure hosting & optimization",
                    ],
                ),
                feature(
                    "Ongoing Website Management",
                    &[
                        "Content updates & feature additions",
                        "Security monitoring & backups",
                        "Speed tuning & SEO maintenance",
                    ],
                ),
            ],
            &["Discovery", "Strategy", "Design", "Build", "Optimize", "Manage"],
            &[
                "Dominate search rankings with SEO-first architecture",
                "Convert more visitors with psychology-driven design",
                "Save time with fully managed updates and security",
                "Scale effortlessly with performance-engineered code",
            ],
            vec![
                faq(
                    "How long does it take to build a website?",
                    "Most websites are delivered within 2\u{2013}6 weeks depending on complexity.",
                ),
                faq(
                    "Will my website be SEO-optimized?",
                    "Yes. Every Neurify website is built with SEO at its core.",
                ),
                faq(
                    "Do you provide long-term maintenance?",
                    "Absolutely. We manage, secure, and optimize your website continuously.",
                ),
            ],
            "Build My High-Performance Website",
        ),
        service(
            "machine-learning-tasks",
            "Machine Learning Tasks",
            "Custom Machine Learning Solutions Built for Business Impact",
            "Leverage advanced ML algorithms to solve complex problems and unlock data insights.",
            vec![
                feature(
                    "Predictive Intelligence",
                    &[
                        "Sales & demand forecasting",
                        "Customer churn prediction",
                        "Risk & trend analysis",
                    ],
                ),
                feature(
                    "NLP Solutions",
                    &[
                        "Sentiment analysis",
                        "Text classification",
                        "Intelligent document processing",
                        "Chatbot intelligence",
                    ],
                ),
                feature(
                    "Computer Vision",
                    &["Image recognition", "Object detection", "Video analysis"],
                ),
                feature(
                    "Recommendation Engines",
                    &[
                        "Product recommendations",
                        "Personalized content delivery",
                        "User behavior modeling",
                    ],
                ),
            ],
            &[
                "Data Assessment",
                "Model Selection",
                "Training & Tuning",
                "Validation",
                "Deployment",
                "Monitoring",
            ],
            &[
                "Predict trends before they happen",
                "Automate complex decision-making processes",
                "Unlock hidden value in your data",
                "Scale operations with intelligent systems",
            ],
            vec![
                faq(
                    "Do you build custom ML models?",
                    "Yes. Every solution is tailored to your business problem.",
                ),
                faq(
                    "Can you deploy models to production?",
                    "Yes. We deliver end-to-end ML systems, from training to deployment.",
                ),
                faq(
                    "What kind of data do I need?",
                    "We help you assess your data readiness during the discovery phase.",
                ),
            ],
            "Build a Custom ML Solution",
        ),
        service(
            "ai-digital-marketing",
            "AI Digital Marketing",
            "AI-Powered Digital Marketing That Maximizes ROI",
            "Marketing with AI is control, clarity, and compounding growth. Stop guessing and start scaling.",
            vec![
                feature(
                    "AI SEO Optimization",
                    &[
                        "Technical SEO audits",
                        "AI keyword research",
                        "Content optimization",
                        "Long-term ranking strategies",
                    ],
                ),
                feature(
                    "Paid Ads Performance Scaling",
                    &[
                        "Google Ads & Meta Ads optimization",
                        "Smart bidding strategies",
                        "Budget efficiency optimization",
                        "Funnel-based ad structuring",
                    ],
                ),
                feature(
                    "Conversion Rate Optimization (CRO)",
                    &[
                        "Funnel analysis",
                        "Landing page optimization",
                        "A/B testing",
                        "User journey improvements",
                    ],
                ),
                feature(
                    "Behavioral Analytics",
                    &[
                        "User behavior tracking",
                        "Drop-off analysis",
                        "Engagement insights",
                    ],
                ),
                feature(
                    "Funnel Intelligence",
                    &[
                        "Lead quality analysis",
                        "Funnel bottleneck detection",
                        "Revenue-focused optimization",
                    ],
                ),
            ],
            &["Audit & Strategy", "Setup & Integration", "Launch", "Optimize", "Scale"],
            &[
                "Smarter audience targeting",
                "Lower customer acquisition costs",
                "Higher conversion rates",
                "Faster scaling with less waste",
            ],
            vec![
                faq(
                    "Is AI marketing better than traditional marketing?",
                    "Yes. AI enables real-time optimization, predictive targeting, and data-backed decisions, outperforming traditional methods.",
                ),
                faq(
                    "Can AI marketing reduce ad spend?",
                    "Absolutely. AI eliminates wasted spend by focusing only on high-intent audiences.",
                ),
                faq(
                    "Is AI marketing suitable for small businesses?",
                    "Yes. AI helps small businesses compete efficiently with limited budgets.",
                ),
            ],
            "Scale My Marketing with AI",
        ),
        service(
            "ai-chatbots",
            "AI Chatbots",
            "Intelligent AI Chatbots That Convert, Support & Scale 24/7",
            "Intelligent conversational automation that drives business outcomes without human delay.",
            vec![
                feature(
                    "Natural Language Understanding",
                    &[
                        "Understands real human language",
                        "Context-aware responses",
                        "Handles complex queries",
                    ],
                ),
                feature(
                    "Lead Capture & Qualification",
                    &[
                        "Automatically identify leads",
                        "Filter high-quality prospects",
                        "Route to sales teams",
                    ],
                ),
                feature(
                    "CRM Integrations",
                    &[
                        "Seamlessly connect with your CRM",
                        "Sync with sales tools",
                        "Update customer databases",
                    ],
                ),
                feature(
                    "Website & WhatsApp Bots",
                    &[
                        "Deploy across websites",
                        "WhatsApp integration",
                        "Messaging platform support",
                    ],
                ),
                feature(
                    "Custom Workflows",
                    &[
                        "Tailored logic for your business",
                        "Automated booking flows",
                        "Order tracking automation",
                    ],
                ),
            ],
            &[
                "Analysis",
                "Flow Design",
                "Development",
                "Integration",
                "Testing",
                "Deployment",
            ],
            &[
                "Instant responses 24/7",
                "Scale support without hiring",
                "Capture leads outside business hours",
                "Reduce support costs",
            ],
            vec![
                faq(
                    "Can chatbots replace human support completely?",
                    "They handle up to 80% of repetitive queries, freeing humans for complex tasks.",
                ),
                faq(
                    "Are chatbots customizable?",
                    "Yes. Every chatbot is built around your business logic and goals.",
                ),
            ],
            "Build My AI Chatbot",
        ),
        service(
            "graphic-design-thumbnails",
            "Graphic Design & Thumbnails",
            "High-Impact Visual Design That Demands Attention",
            "Strategic visuals engineered to capture attention, drive clicks, and reinforce brand authority.",
            vec![
                feature(
                    "YouTube Thumbnails",
                    &[
                        "Click-optimized layouts",
                        "Emotion-driven visuals",
                        "Platform-specific sizing",
                    ],
                ),
                feature(
                    "Ad Creatives",
                    &[
                        "High-CTR ad designs",
                        "Performance-focused layouts",
                        "Brand-consistent visuals",
                    ],
                ),
                feature(
                    "Social Media Graphics",
                    &[
                        "Scroll-stopping content",
                        "Engagement-driven designs",
                        "Platform-optimized formats",
                    ],
                ),
                feature(
                    "Brand Assets",
                    &[
                        "Visual identity elements",
                        "Marketing creatives",
                        "Digital brand consistency",
                    ],
                ),
            ],
            &["Briefing", "Concept Development", "Design", "Review", "Finalization"],
            &[
                "Higher Click-Through Rates",
                "Stronger Brand Identity",
                "Increased Engagement",
                "Professional Aesthetics",
            ],
            vec![faq(
                "Do you design platform-specific creatives?",
                "Yes. Each design is optimized for its platform and audience behavior.",
            )],
            "Design High-Converting Creatives",
        ),
        service(
            "content-writing",
            "Content Writing",
            "SEO Content Writing That Ranks, Persuades & Converts",
            "SEO-optimized, intent-driven content that ranks on Google and converts readers into customers.",
            vec![
                feature(
                    "SEO Website Pages",
                    &[
                        "Keyword-optimized copy",
                        "Conversion-focused structure",
                        "Brand voice alignment",
                    ],
                ),
                feature(
                    "Long-form Blogs & Articles",
                    &["In-depth research", "Engagement-focused writing", "SEO structure"],
                ),
                feature(
                    "Conversion-Focused Landing Pages",
                    &[
                        "Persuasive copywriting",
                        "Call-to-action optimization",
                        "Benefit-driven messaging",
                    ],
                ),
                feature(
                    "Marketing & Sales Copy",
                    &["Ad copy", "Email sequences", "Sales scripts"],
                ),
            ],
            &["Research", "Strategy", "Drafting", "Optimization", "Review"],
            &[
                "Higher search rankings",
                "Increased organic traffic",
                "Better conversion rates",
                "Established authority",
            ],
            vec![faq(
                "Do you guarantee SEO optimization?",
                "Yes. Every piece is optimized for keywords, intent, and readability.",
            )],
            "Write SEO Content That Ranks",
        ),
        service(
            "business-automation",
            "Business Automation",
            "Smart Automation That Eliminates Inefficiency",
            "Design automation systems that streamline operations, reduce costs, and scale effortlessly.",
            vec![
                feature(
                    "CRM Workflows",
                    &[
                        "Automated lead entry",
                        "Follow-up sequences",
                        "Data synchronization",
                    ],
                ),
                feature(
                    "Lead Management",
                    &["Automated qualification", "Lead scoring", "Routing to sales"],
                ),
                feature(
                    "Email & Marketing Automation",
                    &[
                        "Campaign scheduling",
                        "Personalized sequences",
                        "Behavior-triggered emails",
                    ],
                ),
                feature(
                    "Reporting & Analytics",
                    &[
                        "Automated dashboards",
                        "Performance tracking",
                        "Data consolidation",
                    ],
                ),
                feature(
                    "Internal Processes",
                    &[
                        "Task assignment",
                        "Project management automation",
                        "Approval workflows",
                    ],
                ),
            ],
            &["Audit", "Strategy", "Build", "Test", "Optimize"],
            &[
                "Eliminate repetitive tasks",
                "Reduce operational costs",
                "Minimize human error",
                "Scale effortlessly",
            ],
            vec![],
            "Automate My Business",
        ),
        service(
            "automation-ai-ml",
            "Automation with AI & ML",
            "Intelligent Automation That Learns, Predicts & Improves",
            "Intelligent systems that adapt, learn, and optimize continuously using AI and ML.",
            vec![
                feature(
                    "Predictive Task Automation",
                    &["Forecast demand", "Pre-emptive actions", "Dynamic scheduling"],
                ),
                feature(
                    "Smart Customer Segmentation",
                    &["Behavior-based grouping", "Dynamic profiles", "Targeted engagement"],
                ),
                feature(
                    "Intelligent Scheduling",
                    &["Resource allocation", "Optimal timing", "Conflict resolution"],
                ),
                feature(
                    "Decision-Making Systems",
                    &[
                        "Automated approvals",
                        "Risk assessment",
                        "Strategic recommendations",
                    ],
                ),
                feature(
                    "Adaptive Workflows",
                    &[
                        "Self-optimizing processes",
                        "Error correction",
                        "Continuous improvement",
                    ],
                ),
            ],
            &["Data Analysis", "Model Training", "Integration", "Testing", "Deployment"],
            &[
                "Intelligent decision making",
                "Continuous optimization",
                "Predictive capabilities",
                "Adaptive operations",
            ],
            vec![],
            "Build Intelligent Automation",
        ),
        service(
            "ar-vr-3d-model-services",
            "AR / VR & 3D Model Services",
            "Immersive AR, VR & 3D Experiences for the Future",
            "Create AR, VR, and 3D solutions that let users interact, explore, and experience products before buying.",
            vec![
                feature(
                    "3D Product Modeling",
                    &["High-fidelity models", "Interactive viewers", "Configurable assets"],
                ),
                feature(
                    "AR Product Visualization",
                    &["Try-before-you-buy", "In-room placement", "Interactive packaging"],
                ),
                feature(
                    "VR Simulations",
                    &["Training environments", "Virtual tours", "Immersive showrooms"],
                ),
                feature(
                    "Interactive Experiences",
                    &["Gamified marketing", "Virtual events", "Brand activations"],
                ),
                feature(
                    "Metaverse-Ready Assets",
                    &["Digital collectibles", "Virtual real estate", "Avatar accessories"],
                ),
            ],
            &["Concept", "Modeling", "Development", "Testing", "Deployment"],
            &[
                "Higher engagement",
                "Reduced return rates",
                "Memorable brand experiences",
                "Cutting-edge appeal",
            ],
            vec![],
            "Create Immersive Experiences",
        ),
    ]
}
