use serde::{Deserialize, Serialize};

/// A portfolio project card: tech tags plus demo and repository links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub github_link: String,
    #[serde(default)]
    pub revision: u64,
}

fn seeded(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    image: &str,
    demo_link: &str,
    github_link: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: image.to_string(),
        demo_link: demo_link.to_string(),
        github_link: github_link.to_string(),
        revision: 1,
    }
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        seeded(
            "682bf7059ed95f87600647b0",
            "Opinia review Protal",
            "A modern Review protal website where you can ",
            &["NextJs", "Redux", "Node.js", "Express", "prisma", "TypeScript"],
            "https://i.postimg.cc/g2sd66cF/Screenshot-2025-05-20-at-9-27-59-AM.png",
            "https://review-protal.vercel.app/",
            "https://github.com/Emtiaz-ahmed-13/review-protal",
        ),
        seeded(
            "682bf8ac9ed95f87600647b2",
            "A comprehenssive Book store",
            "A book store where you can find your favourite books ",
            &["NextJs", "Redux", "Node.js", "Express", "MongoDb", "TypeScript"],
            "https://i.postimg.cc/rmnKGP8T/Screenshot-2025-05-20-at-9-35-14-AM.png",
            "https://librant-client.vercel.app/",
            "https://github.com/Emtiaz-ahmed-13/Librant_client?tab=readme-ov-file",
        ),
        seeded(
            "682bf9a79ed95f87600647b4",
            "FileDock - Secure Document Storage",
            "FileDock is a full-stack web app to securely store, manage, and access all your documents in one place. Built with Next.js and TypeScript for a fast and reliable experience.",
            &["NextJs", "TypeScript", "neon"],
            "https://i.postimg.cc/wx56dPKj/Screenshot-2025-05-20-at-9-39-47-AM.png",
            "http://localhost:3000/",
            "https://github.com/Emtiaz-ahmed-13/filedock",
        ),
    ]
}
