use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Page,
    Blog,
    CaseStudy,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Page, ContentKind::Blog, ContentKind::CaseStudy];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ContentKind::Page => "page",
            ContentKind::Blog => "blog",
            ContentKind::CaseStudy => "case-study",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Page => "Page",
            ContentKind::Blog => "Blog Post",
            ContentKind::CaseStudy => "Case Study",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub id: u32,
    pub kind: ContentKind,
    pub title: &'static str,
    pub path: &'static str,
    pub category: Option<&'static str>,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Minutes.
    pub read_time: Option<u8>,
    /// ISO date, `YYYY-MM-DD`.
    pub date: Option<&'static str>,
}

impl ContentEntry {
    /// `"5 min read"` for entries with a reading time.
    #[must_use]
    pub fn read_time_label(&self) -> Option<String> {
        self.read_time.map(|minutes| format!("{minutes} min read"))
    }
}

const fn page(
    id: u32,
    title: &'static str,
    path: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
) -> ContentEntry {
    ContentEntry {
        id,
        kind: ContentKind::Page,
        title,
        path,
        category: None,
        description,
        tags,
        read_time: None,
        date: None,
    }
}

/// Site content searchable from the search view.
pub static CONTENT: &[ContentEntry] = &[
    page(1, "Home", "/", "Welcome to Predicto AI", &["navigation", "main"]),
    page(
        2,
        "About Us",
        "/about",
        "Learn about our mission and team",
        &["company", "team", "navigation"],
    ),
    page(
        3,
        "Services",
        "/services",
        "Our comprehensive service offerings",
        &["services", "navigation"],
    ),
    page(
        4,
        "Pricing",
        "/pricing",
        "Transparent pricing for all plans",
        &["pricing", "plans", "navigation"],
    ),
    page(
        5,
        "Blog",
        "/blog",
        "Latest insights and industry trends",
        &["blog", "content", "navigation"],
    ),
    page(
        6,
        "Case Studies",
        "/case-studies",
        "Success stories from our clients",
        &["cases", "results", "navigation"],
    ),
    page(
        7,
        "API Documentation",
        "/api-docs",
        "Complete API reference and examples",
        &["api", "developers", "technical"],
    ),
    page(
        8,
        "Contact",
        "/contact",
        "Get in touch with our team",
        &["contact", "support", "navigation"],
    ),
    ContentEntry {
        id: 101,
        kind: ContentKind::Blog,
        title: "The Future of AI-Powered Project Estimation",
        path: "/blog/1",
        category: Some("AI & Technology"),
        description: "Exploring how machine learning is revolutionizing project estimation accuracy and timelines",
        tags: &["ai", "estimation", "machine-learning", "technology", "future"],
        read_time: Some(5),
        date: Some("2024-01-20"),
    },
    ContentEntry {
        id: 102,
        kind: ContentKind::Blog,
        title: "Agile Estimation: Best Practices from 100+ Teams",
        path: "/blog/2",
        category: Some("Agile & Management"),
        description: "Data-driven insights from agile teams on effective estimation techniques and common pitfalls",
        tags: &["agile", "estimation", "best-practices", "teams", "development"],
        read_time: Some(7),
        date: Some("2024-01-15"),
    },
    ContentEntry {
        id: 201,
        kind: ContentKind::CaseStudy,
        title: "TechStart: 60% Faster Project Planning",
        path: "/case-studies/1",
        category: Some("SaaS"),
        description: "How TechStart reduced planning time and improved estimation accuracy dramatically",
        tags: &["saas", "case-study", "success", "planning", "improvement"],
        read_time: Some(4),
        date: Some("2024-01-10"),
    },
    ContentEntry {
        id: 202,
        kind: ContentKind::CaseStudy,
        title: "Digital Ventures: 3x ROI in 6 Months",
        path: "/case-studies/2",
        category: Some("Digital Agency"),
        description: "Digital agency achieved 3x return on investment through better estimation and delivery",
        tags: &["agency", "case-study", "roi", "success", "delivery"],
        read_time: Some(4),
        date: Some("2024-01-05"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_articles_have_read_times() {
        let labels: Vec<(&str, Option<String>)> = CONTENT
            .iter()
            .filter(|e| e.kind != ContentKind::Page)
            .map(|e| (e.title, e.read_time_label()))
            .collect();
        assert!(labels.iter().all(|(_, label)| label.is_some()));
        assert_eq!(
            labels[0],
            (
                "The Future of AI-Powered Project Estimation",
                Some("5 min read".to_string())
            )
        );

        let home = CONTENT.iter().find(|e| e.id == 1).unwrap();
        assert_eq!(home.read_time_label(), None);
    }
}
