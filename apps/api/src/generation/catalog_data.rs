//! Built-in catalog tables.

use std::collections::BTreeMap;

use crate::generation::catalog::{
    Catalog, NameRegion, Platform, RoleCategory, SalaryBand, TagRule, TagVocabulary,
};

// Name tables are shared across regions; each region owns a contiguous slice.
// Order here must match REGIONS below.
const FIRST_NAMES: &[&str] = &[
    // western
    "Emma", "Liam", "Olivia", "Noah", "Charlotte", "James",
    // african
    "Amara", "Kwame", "Zainab", "Tendai", "Chiamaka", "Kofi",
    // south asian
    "Priya", "Arjun", "Ananya", "Rohan", "Meera", "Vikram",
    // east asian
    "Mei", "Hiroshi", "Ji-woo", "Wei", "Yuki", "Min-jun",
    // latinx
    "Sofia", "Mateo", "Valentina", "Diego", "Camila", "Santiago",
    // middle eastern
    "Layla", "Omar", "Yasmin", "Karim", "Noor", "Tariq",
];

const LAST_NAMES: &[&str] = &[
    // western
    "Anderson", "Bennett", "Carter", "Fletcher", "Hughes", "Sullivan",
    // african
    "Okafor", "Mensah", "Adeyemi", "Moyo", "Nwosu", "Boateng",
    // south asian
    "Sharma", "Patel", "Iyer", "Reddy", "Kapoor", "Nair",
    // east asian
    "Chen", "Tanaka", "Kim", "Wang", "Sato", "Park",
    // latinx
    "Garcia", "Hernandez", "Rodriguez", "Morales", "Castillo", "Vargas",
    // middle eastern
    "Haddad", "Rahman", "Nasser", "Farouk", "Khalil", "Saleh",
];

const REGIONS: &[&str] = &[
    "western",
    "african",
    "south_asian",
    "east_asian",
    "latinx",
    "middle_eastern",
];

const NAMES_PER_REGION: usize = 6;

const ROLES: &[(&str, &[&str], &[&str])] = &[
    (
        "Frontend Engineer",
        &["React", "TypeScript", "Next.js", "CSS", "Redux", "Jest", "Tailwind CSS"],
        &["E-commerce", "SaaS", "Media"],
    ),
    (
        "Backend Engineer",
        &["Node.js", "Python", "Go", "PostgreSQL", "Redis", "Docker", "GraphQL", "AWS"],
        &["Fintech", "SaaS", "Infrastructure"],
    ),
    (
        "Full Stack Engineer",
        &["React", "Node.js", "TypeScript", "PostgreSQL", "GraphQL", "Docker"],
        &["SaaS", "Marketplace", "E-commerce"],
    ),
    (
        "Mobile Engineer",
        &["Swift", "Kotlin", "React Native", "Flutter", "Firebase", "GraphQL"],
        &["Consumer Apps", "Health", "Fintech"],
    ),
    (
        "DevOps Engineer",
        &["Kubernetes", "Terraform", "AWS", "Docker", "CI/CD", "Prometheus"],
        &["Infrastructure", "SaaS", "Security"],
    ),
    (
        "Data Scientist",
        &["Python", "SQL", "PyTorch", "Pandas", "scikit-learn", "dbt"],
        &["AI", "Fintech", "Health"],
    ),
    (
        "Product Designer",
        &["Figma", "Prototyping", "Design Systems", "User Research", "Interaction Design"],
        &["SaaS", "Consumer Apps", "E-commerce"],
    ),
    (
        "UX Designer",
        &["User Research", "Wireframing", "Figma", "Usability Testing", "Information Architecture"],
        &["Health", "Edtech", "SaaS"],
    ),
    (
        "Product Manager",
        &["Roadmapping", "User Stories", "A/B Testing", "SQL", "Stakeholder Management", "Analytics"],
        &["SaaS", "Marketplace", "Fintech"],
    ),
    (
        "Growth Marketer",
        &["SEO", "Paid Acquisition", "Lifecycle Marketing", "A/B Testing", "Google Analytics"],
        &["E-commerce", "Consumer Apps", "SaaS"],
    ),
    (
        "Content Marketer",
        &["Copywriting", "SEO", "Content Strategy", "Social Media", "Email Marketing"],
        &["Media", "Edtech", "SaaS"],
    ),
    (
        "Operations Manager",
        &["Process Design", "Vendor Management", "Budgeting", "Hiring", "Notion", "OKRs"],
        &["Logistics", "Marketplace", "Health"],
    ),
];

const DEFAULT_DOMAINS: &[&str] = &[
    "SaaS", "Fintech", "Health", "E-commerce", "Edtech", "AI", "Climate", "Marketplace",
];

const GENERAL_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Project Management",
    "Data Analysis",
    "Agile",
    "Leadership",
    "Mentoring",
];

const STAGE_RULES: &[(&[&str], [&str; 2])] = &[
    (
        &["pre-seed", "preseed", "idea stage"],
        ["Zero-to-One Builder", "Pre-seed Pioneer"],
    ),
    (&["seed"], ["Seed-stage Fit", "Post-Launch Optimizer"]),
    (&["series a"], ["Series A Scaler", "Product-Market Fit Hunter"]),
    (
        &["series b", "series c", "growth stage", "scale-up"],
        ["Scale-up Operator", "Series B Veteran"],
    ),
];

const CULTURE_RULES: &[(&[&str], [&str; 2])] = &[
    (&["remote", "async"], ["Remote-first Collaborator", "Async Communicator"]),
    (&["fast", "speed", "move quickly"], ["Fast-paced Executor", "Bias for Action"]),
    (&["ownership", "autonomy"], ["High Ownership", "Self-directed Driver"]),
    (&["collaborat", "team"], ["Team Player", "Cross-functional Partner"]),
    (&["innovat", "creativ"], ["Creative Problem Solver", "Innovation Driver"]),
    (&["customer", "user"], ["Customer Obsessed", "User Champion"]),
    (&["learning", "growth mindset", "curious"], ["Growth Mindset", "Continuous Learner"]),
];

const INDUSTRY_RULES: &[(&[&str], [&str; 2])] = &[
    (&["fintech", "finance", "bank", "payment"], ["Fintech Savvy", "Payments Insider"]),
    (&["health", "medical", "bio"], ["Healthtech Experience", "Patient-centric Builder"]),
    (&["commerce", "retail", "shop"], ["E-commerce Native", "Retail Innovator"]),
    (
        &["artificial intelligence", "machine learning", "genai", "ai/ml", " ai"],
        ["AI-native Builder", "ML Product Experience"],
    ),
    (&["edtech", "education", "learning"], ["Edtech Experience", "Learning Platform Builder"]),
    (&["saas", "b2b", "enterprise"], ["B2B SaaS Veteran", "Enterprise Ready"]),
    (&["climate", "energy", "sustainab"], ["Climate Tech Advocate", "Sustainability Builder"]),
    (&["game", "gaming", "media"], ["Media & Gaming Experience", "Consumer Entertainment Builder"]),
];

const ENGINEERING_ACTIONS: &[&str] = &[
    "Architected and shipped",
    "Built from scratch",
    "Scaled",
    "Re-platformed",
    "Led the rewrite of",
];

const DESIGN_ACTIONS: &[&str] = &[
    "Designed end-to-end",
    "Redesigned",
    "Crafted the design system for",
    "Led user research for",
];

const MARKETING_ACTIONS: &[&str] = &[
    "Launched the growth engine for",
    "Ran acquisition campaigns for",
    "Built the content program behind",
    "Owned lifecycle marketing for",
];

const PRODUCT_ACTIONS: &[&str] = &[
    "Drove the roadmap for",
    "Led discovery and launch of",
    "Owned the product vision for",
    "Shipped the v1 of",
];

const OPERATIONS_ACTIONS: &[&str] = &[
    "Streamlined operations for",
    "Stood up the processes behind",
    "Scaled the support org for",
    "Built the vendor network for",
];

const PRODUCTS: &[&str] = &[
    "a B2B analytics platform",
    "a consumer mobile app",
    "a real-time payments API",
    "a self-serve onboarding flow",
    "a two-sided marketplace",
    "an internal developer platform",
    "a subscription billing system",
];

const OUTCOMES: &[&str] = &[
    "that grew monthly active users 3x",
    "that cut churn by 20%",
    "that reached 10k paying customers",
    "that reduced onboarding time by half",
    "that unlocked a new revenue line",
    "that raised NPS by 25 points",
];

const CULTURE_TRAITS: &[&str] = &[
    "bringing a {culture} mindset to every team",
    "known across the team as a {culture}",
    "consistently recognized as a {culture}",
];

const DOMAIN_TRAITS: &[&str] = &[
    "with deep roots in {domain}",
    "combining craft with hands-on {domain} expertise",
    "drawing on years of {domain} experience",
];

const JARGON: &[&str] = &[
    "during MVP phase",
    "with focus on ARR",
    "while iterating toward product-market fit",
    "on a lean runway",
    "ahead of a Series A raise",
    "through hypergrowth",
];

const STARTUP_ACCOMPLISHMENTS: &[&str] = &[
    "Joined as an early hire and helped take the product from zero to first revenue.",
    "Wore multiple hats at a seed-stage startup, shipping features weekly with a team of five.",
    "Helped a founding team find product-market fit and close their first institutional round.",
    "Built core systems at a startup that went on to be acquired.",
    "Thrived in ambiguity as one of the first ten employees at a venture-backed company.",
];

const BONUS_CLAIMS: &[&str] = &[
    "Grew the team from {from} to {to} people.",
    "Scaled the function from {from} to {to} headcount within a year.",
    "Mentored {from} juniors who grew into a team of {to}.",
];

const STARTUP_KEYWORDS: &[&str] = &[
    "startup",
    "seed",
    "series",
    "founding",
    "early-stage",
    "early stage",
    "venture",
    "stealth",
];

const ENGINEERING_PLATFORMS: &[(&str, &str)] = &[
    ("GitHub", "github.com"),
    ("GitLab", "gitlab.com"),
    ("Dev.to", "dev.to"),
    ("Hashnode", "hashnode.com"),
];

const DESIGN_PLATFORMS: &[(&str, &str)] = &[
    ("Dribbble", "dribbble.com"),
    ("Behance", "behance.net"),
    ("Figma Community", "figma.com/community"),
];

const GENERAL_PLATFORMS: &[(&str, &str)] = &[
    ("Medium", "medium.com"),
    ("Notion", "notion.site"),
    ("Substack", "substack.com"),
    ("LinkedIn", "linkedin.com/pulse"),
];

const ENGINEERING_PROJECTS: &[&str] = &[
    "Realtime Analytics Pipeline",
    "Distributed Job Scheduler",
    "Open Source CLI Toolkit",
    "Feature Flag Service",
    "Edge Caching Layer",
];

const DESIGN_PROJECTS: &[&str] = &[
    "Fintech App Redesign",
    "Design System Case Study",
    "Onboarding Flow Teardown",
    "Accessibility Audit",
    "Dashboard Concept",
];

const MARKETING_PROJECTS: &[&str] = &[
    "Zero to 50k Newsletter",
    "Paid Acquisition Playbook",
    "Launch Campaign Retrospective",
    "SEO Growth Case Study",
];

const PRODUCT_PROJECTS: &[&str] = &[
    "Pricing Experiment Writeup",
    "Roadmap Prioritization Framework",
    "Marketplace Liquidity Case Study",
    "Product Discovery Playbook",
];

const OPERATIONS_PROJECTS: &[&str] = &[
    "Support Scaling Playbook",
    "Vendor Consolidation Case Study",
    "Remote Onboarding Handbook",
    "Ops Metrics Dashboard",
];

const VERIFICATIONS: &[&str] = &[
    "Identity Verified",
    "Employment Verified",
    "Skills Assessed",
    "Education Verified",
    "References Checked",
    "Background Check Cleared",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Toronto, ON",
    "London, UK",
    "Berlin, Germany",
    "Remote (US)",
    "Remote (EU)",
];

const AVAILABILITY: &[&str] = &[
    "Immediately",
    "2 weeks notice",
    "1 month notice",
    "Open to offers",
    "Available in 6 weeks",
];

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Financial Services",
    "Healthcare",
    "Retail",
    "Education",
    "Media",
    "Energy",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn vocabulary(rules: &[(&[&str], [&str; 2])]) -> TagVocabulary {
    TagVocabulary {
        rules: rules
            .iter()
            .map(|(keywords, labels)| TagRule {
                keywords: strings(keywords),
                labels: strings(labels),
            })
            .collect(),
    }
}

fn platforms(items: &[(&str, &str)]) -> Vec<Platform> {
    items
        .iter()
        .map(|(name, host)| Platform {
            name: name.to_string(),
            host: host.to_string(),
        })
        .collect()
}

fn per_category<T>(
    engineering: T,
    design: T,
    marketing: T,
    product: T,
    operations: T,
) -> BTreeMap<RoleCategory, T> {
    BTreeMap::from([
        (RoleCategory::Engineering, engineering),
        (RoleCategory::Design, design),
        (RoleCategory::Marketing, marketing),
        (RoleCategory::Product, product),
        (RoleCategory::Operations, operations),
    ])
}

impl Catalog {
    pub fn builtin() -> Self {
        let regions = REGIONS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let span = i * NAMES_PER_REGION..(i + 1) * NAMES_PER_REGION;
                NameRegion {
                    name: name.to_string(),
                    first_names: span.clone(),
                    last_names: span,
                }
            })
            .collect();

        let role_skills = ROLES
            .iter()
            .map(|(role, skills, _)| (role.to_string(), strings(skills)))
            .collect();
        let role_domains = ROLES
            .iter()
            .map(|(role, _, domains)| (role.to_string(), strings(domains)))
            .collect();

        let general_platforms = platforms(GENERAL_PLATFORMS);

        Catalog {
            first_names: strings(FIRST_NAMES),
            last_names: strings(LAST_NAMES),
            regions,

            roles: ROLES.iter().map(|(role, _, _)| role.to_string()).collect(),
            role_domains,
            default_domains: strings(DEFAULT_DOMAINS),
            role_skills,
            general_skills: strings(GENERAL_SKILLS),

            stage_tags: vocabulary(STAGE_RULES),
            culture_tags: vocabulary(CULTURE_RULES),
            industry_tags: vocabulary(INDUSTRY_RULES),

            action_phrases: per_category(
                strings(ENGINEERING_ACTIONS),
                strings(DESIGN_ACTIONS),
                strings(MARKETING_ACTIONS),
                strings(PRODUCT_ACTIONS),
                strings(OPERATIONS_ACTIONS),
            ),
            products: strings(PRODUCTS),
            outcomes: strings(OUTCOMES),
            culture_traits: strings(CULTURE_TRAITS),
            domain_traits: strings(DOMAIN_TRAITS),
            jargon: strings(JARGON),

            startup_accomplishments: strings(STARTUP_ACCOMPLISHMENTS),
            bonus_claims: strings(BONUS_CLAIMS),
            startup_keywords: strings(STARTUP_KEYWORDS),

            platforms: per_category(
                platforms(ENGINEERING_PLATFORMS),
                platforms(DESIGN_PLATFORMS),
                general_platforms.clone(),
                general_platforms.clone(),
                general_platforms,
            ),
            project_types: per_category(
                strings(ENGINEERING_PROJECTS),
                strings(DESIGN_PROJECTS),
                strings(MARKETING_PROJECTS),
                strings(PRODUCT_PROJECTS),
                strings(OPERATIONS_PROJECTS),
            ),
            verifications: strings(VERIFICATIONS),

            locations: strings(LOCATIONS),
            availability: strings(AVAILABILITY),
            industries: strings(INDUSTRIES),
            salary_bands: vec![
                SalaryBand {
                    job_type: "full-time".to_string(),
                    min: 90_000.0,
                    max: 160_000.0,
                    hourly: false,
                },
                SalaryBand {
                    job_type: "part-time".to_string(),
                    min: 40_000.0,
                    max: 80_000.0,
                    hourly: false,
                },
                SalaryBand {
                    job_type: "contract".to_string(),
                    min: 60.0,
                    max: 140.0,
                    hourly: true,
                },
                SalaryBand {
                    job_type: "freelance".to_string(),
                    min: 50.0,
                    max: 120.0,
                    hourly: true,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_tables_cover_every_region() {
        assert_eq!(FIRST_NAMES.len(), REGIONS.len() * NAMES_PER_REGION);
        assert_eq!(LAST_NAMES.len(), REGIONS.len() * NAMES_PER_REGION);
    }

    #[test]
    fn test_every_role_has_enough_skills() {
        for (role, skills, domains) in ROLES {
            assert!(skills.len() >= 5, "{role} needs at least 5 skills");
            assert!(!domains.is_empty(), "{role} needs a domain");
        }
    }

    #[test]
    fn test_seed_rule_carries_expected_labels() {
        let catalog = Catalog::builtin();
        let rule = catalog.stage_tags.match_text("Seed").unwrap();
        assert_eq!(rule.labels, vec!["Seed-stage Fit", "Post-Launch Optimizer"]);
    }

    #[test]
    fn test_pre_seed_is_not_mistaken_for_seed() {
        let catalog = Catalog::builtin();
        let rule = catalog.stage_tags.match_text("Pre-seed").unwrap();
        assert!(rule.labels.contains(&"Pre-seed Pioneer".to_string()));
    }
}
