use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
}

/// A named group of skills. Skill names are unique within a category; the
/// name is the key the admin panel edits and deletes by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: u32,
    pub category: String,
    pub items: Vec<Skill>,
    #[serde(default)]
    pub revision: u64,
}

pub const MAX_SKILL_LEVEL: u8 = 100;

fn seeded(id: u32, category: &str, items: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        id,
        category: category.to_string(),
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

pub fn seed_skills() -> Vec<SkillCategory> {
    vec![
        seeded(
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
        seeded(
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
        seeded(
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
        seeded(
            4,
            "Soft Skills",
            &[
                ("Problem Solving", 95),
                ("Communication", 90),
                ("Team Collaboration", 95),
                ("Time Management", 85),
                ("Adaptability", 90),
            ],
        ),
    ]
}
