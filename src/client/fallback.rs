//! Hard-coded datasets served when the backend is unreachable. Read paths
//! degrade to these instead of failing; the connection indicator goes to
//! Warning so the UI can say so.

use chrono::{Duration, Utc};

use crate::blog::domain::BlogPost;
use crate::experience::domain::{seed_experiences, Experience};
use crate::profile::domain::{canonical_profile, Profile};
use crate::project::domain::{seed_projects, Project};
use crate::skill::domain::{Skill, SkillCategory};

fn mock_blog(
    id: &str,
    title: &str,
    summary: &str,
    content: &str,
    cover_image: &str,
    tags: &[&str],
    days_ago: i64,
) -> BlogPost {
    let stamp = Utc::now() - Duration::days(days_ago);
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        summary: Some(summary.to_string()),
        cover_image: Some(cover_image.to_string()),
        author: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: stamp,
        updated_at: stamp,
        revision: 1,
    }
}

pub fn blogs() -> Vec<BlogPost> {
    vec![
        mock_blog(
            "mock-blog-1",
            "Getting Started with Next.js and Framer Motion",
            "Learn how to combine Next.js and Framer Motion to create beautiful, animated user interfaces",
            "<p>Next.js is a powerful React framework that enables server-side rendering, static site generation, and more. When combined with Framer Motion, you can create beautiful, animated user interfaces with ease.</p><p>In this article, we'll explore how to set up a Next.js project with Framer Motion and create some basic animations that will impress your users.</p><p>Let's dive in!</p>",
            "https://images.unsplash.com/photo-1617042375876-a13e36732a04?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&w=800",
            &["Next.js", "Framer Motion", "React"],
            7,
        ),
        mock_blog(
            "mock-blog-2",
            "Building a Modern Portfolio with Aceternity UI",
            "Create a stunning portfolio website using Aceternity UI, Tailwind CSS, and Next.js",
            "<p>Aceternity UI offers a collection of beautifully designed, responsive components that you can use to build modern websites and applications.</p><p>In this tutorial, we'll walk through the process of creating a portfolio website using Aceternity UI components, Tailwind CSS, and Next.js.</p><p>By the end, you'll have a stunning portfolio that showcases your work in the best light possible.</p>",
            "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&w=800",
            &["Aceternity UI", "Portfolio", "Tailwind CSS"],
            14,
        ),
        mock_blog(
            "mock-blog-3",
            "Mastering Redux Toolkit with TypeScript",
            "A comprehensive guide to using Redux Toolkit with TypeScript in React applications",
            "<p>Redux Toolkit is the official, opinionated, batteries-included toolset for efficient Redux development. When paired with TypeScript, it becomes even more powerful, offering type safety and intellisense.</p><p>In this comprehensive guide, we'll explore how to set up and use Redux Toolkit with TypeScript in a React application.</p><p>You'll learn about creating slices, thunks, and selectors, all with proper TypeScript typing.</p>",
            "https://images.unsplash.com/photo-1605379399642-870262d3d051?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&w=800",
            &["Redux", "TypeScript", "React"],
            21,
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    seed_projects()
}

fn category(id: u32, name: &str, items: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        id,
        category: name.to_string(),
        items: items
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
        revision: 1,
    }
}

// The frontend's offline copy only carried the three technical categories.
pub fn skills() -> Vec<SkillCategory> {
    vec![
        category(
            1,
            "Frontend",
            &[
                ("React", 90),
                ("Next.js", 85),
                ("TypeScript", 80),
                ("Tailwind CSS", 95),
                ("HTML/CSS", 90),
            ],
        ),
        category(
            2,
            "Backend",
            &[
                ("Node.js", 85),
                ("Express", 80),
                ("MongoDB", 75),
                ("PostgreSQL", 70),
                ("RESTful APIs", 85),
            ],
        ),
        category(
            3,
            "Tools & Technologies",
            &[
                ("Git", 90),
                ("Docker", 70),
                ("AWS", 65),
                ("CI/CD", 75),
                ("Jest/Testing", 80),
            ],
        ),
    ]
}

pub fn experiences() -> Vec<Experience> {
    seed_experiences()
}

pub fn profile() -> Profile {
    canonical_profile()
}
