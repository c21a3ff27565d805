use serde::{Deserialize, Serialize};

/// A work-history entry. `period` is free text ("2022-Present").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub revision: u64,
}

fn seeded(id: &str, company: &str, position: &str, period: &str, description: &str) -> Experience {
    Experience {
        id: id.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        period: period.to_string(),
        description: description.to_string(),
        revision: 1,
    }
}

pub fn seed_experiences() -> Vec<Experience> {
    vec![
        seeded(
            "1",
            "Tech Solutions Ltd.",
            "Senior Developer",
            "2022-Present",
            "Leading development of web applications using MERN stack.",
        ),
        seeded(
            "2",
            "Startup BD",
            "Junior Developer",
            "2020-2022",
            "Developed responsive user interfaces and implemented backend features.",
        ),
    ]
}
