use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post. `content` is trusted HTML and is stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic-concurrency token, bumped on every update.
    #[serde(default)]
    pub revision: u64,
}

pub const DEFAULT_AUTHOR: &str = "Emtiaz Ahmed";

fn seeded(id: &str, title: &str, summary: &str, content: &str, tags: &[&str], days_ago: i64) -> BlogPost {
    let stamp = Utc::now() - Duration::days(days_ago);
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        summary: Some(summary.to_string()),
        cover_image: None,
        author: Some(DEFAULT_AUTHOR.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: stamp,
        updated_at: stamp,
        revision: 1,
    }
}

/// The hard-coded dataset the store starts from. A restart (or `?reset=true`)
/// brings the collection back to exactly this.
pub fn seed_blogs() -> Vec<BlogPost> {
    vec![
        seeded(
            "1",
            "Getting Started with Next.js and Framer Motion",
            "Learn how to combine Next.js and Framer Motion to create beautiful, animated user interfaces",
            "<p>Next.js is a powerful React framework that enables server-side rendering, static site generation, and more. When combined with Framer Motion, you can create beautiful, animated user interfaces with ease.</p><p>In this article, we'll explore how to set up a Next.js project with Framer Motion and create some basic animations that will impress your users.</p><p>Let's dive in!</p>",
            &["Next.js", "Framer Motion", "React"],
            7,
        ),
        seeded(
            "2",
            "Building a Modern Portfolio with Aceternity UI",
            "Create a stunning portfolio website using Aceternity UI, Tailwind CSS, and Next.js",
            "<p>Aceternity UI offers a collection of beautifully designed, responsive components that you can use to build modern websites and applications.</p><p>In this tutorial, we'll walk through the process of creating a portfolio website using Aceternity UI components, Tailwind CSS, and Next.js.</p><p>By the end, you'll have a stunning portfolio that showcases your work in the best light possible.</p>",
            &["Aceternity UI", "Portfolio", "Tailwind CSS"],
            14,
        ),
        seeded(
            "3",
            "Mastering Redux Toolkit with TypeScript",
            "A comprehensive guide to using Redux Toolkit with TypeScript in React applications",
            "<p>Redux Toolkit is the official, opinionated, batteries-included toolset for efficient Redux development. When paired with TypeScript, it becomes even more powerful, offering type safety and intellisense.</p><p>In this comprehensive guide, we'll explore how to set up and use Redux Toolkit with TypeScript in a React application.</p><p>You'll learn about creating slices, thunks, and selectors, all with proper TypeScript typing.</p>",
            &["Redux", "TypeScript", "React"],
            21,
        ),
    ]
}
