use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub avatar_url: String,
    pub social: SocialLinks,
    pub resume: Resume,
}

/// The single authoritative profile dataset. The original carried three
/// divergent copies; this one is the richest and the one the profile
/// endpoint served.
pub fn canonical_profile() -> Profile {
    Profile {
        name: "Emtiaz Ahmed".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "I'm a passionate Full Stack developer building modern web applications. I love creating intuitive user interfaces and solving complex problems with clean, efficient code.".to_string(),
        email: "emtiaz2060@gmail.com".to_string(),
        location: "Natore, Bangladesh".to_string(),
        avatar_url: "https://i.postimg.cc/jdqjvZvj/emtiazP.jpg".to_string(),
        social: SocialLinks {
            github: "https://github.com/Emtiaz-ahmed-13".to_string(),
            linkedin: "https://www.linkedin.com/in/emtiaz-ahmed-2892871a2/".to_string(),
            twitter: "https://x.com/emtiaza62570877".to_string(),
        },
        resume: Resume {
            education: vec![Education {
                institution: "BRAC University".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                year: "2021-2026".to_string(),
            }],
        },
    }
}
