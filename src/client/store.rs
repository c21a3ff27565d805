use crate::blog::domain::BlogPost;
use crate::experience::domain::Experience;
use crate::profile::domain::Profile;
use crate::project::domain::Project;
use crate::skill::domain::SkillCategory;

use super::api::{ApiClient, FetchOutcome};

/// How healthy the last round of backend calls looked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Warning,
    Unknown,
}

impl ConnectionStatus {
    fn severity(self) -> u8 {
        match self {
            ConnectionStatus::Connected => 0,
            ConnectionStatus::Unknown => 1,
            ConnectionStatus::Warning => 2,
            ConnectionStatus::Disconnected => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionReport {
    pub status: ConnectionStatus,
    pub message: String,
}

impl ConnectionReport {
    pub fn connected() -> Self {
        Self {
            status: ConnectionStatus::Connected,
            message: String::new(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            status: ConnectionStatus::Unknown,
            message: String::new(),
        }
    }

    pub fn warning(message: &str) -> Self {
        Self {
            status: ConnectionStatus::Warning,
            message: message.to_string(),
        }
    }

    pub fn disconnected(message: &str) -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            message: message.to_string(),
        }
    }

    /// Keeps whichever of the two reports is worse off.
    pub fn worst(self, other: Self) -> Self {
        if other.status.severity() > self.status.severity() {
            other
        } else {
            self
        }
    }
}

/// Last-fetched collections plus the connection indicator. Mutations after a
/// successful write are spliced in locally rather than refetched, so the
/// store is last-write-wins; the server-side revision token is what actually
/// guards concurrent edits.
pub struct PortfolioStore {
    pub blogs: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub profile: Option<Profile>,
    pub connection: ConnectionReport,
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self {
            blogs: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            experiences: Vec::new(),
            profile: None,
            connection: ConnectionReport::unknown(),
        }
    }

    pub fn apply_blogs(&mut self, outcome: FetchOutcome<Vec<BlogPost>>) {
        self.blogs = outcome.data;
        self.merge_report(outcome.report);
    }

    pub fn apply_projects(&mut self, outcome: FetchOutcome<Vec<Project>>) {
        self.projects = outcome.data;
        self.merge_report(outcome.report);
    }

    pub fn apply_skills(&mut self, outcome: FetchOutcome<Vec<SkillCategory>>) {
        self.skills = outcome.data;
        self.merge_report(outcome.report);
    }

    pub fn apply_experiences(&mut self, outcome: FetchOutcome<Vec<Experience>>) {
        self.experiences = outcome.data;
        self.merge_report(outcome.report);
    }

    pub fn apply_profile(&mut self, outcome: FetchOutcome<Profile>) {
        self.profile = Some(outcome.data);
        self.merge_report(outcome.report);
    }

    /// Explicit refresh: refetch everything and overwrite what is held.
    pub async fn refresh_all(&mut self, client: &ApiClient) {
        let (landing, profile) = tokio::join!(client.fetch_all(), client.profile());
        self.connection = landing.report;
        self.blogs = landing.blogs;
        self.projects = landing.projects;
        self.skills = landing.skills;
        self.experiences = landing.experiences;
        self.apply_profile(profile);
    }

    // Optimistic splices, applied once the corresponding write has
    // succeeded server-side.

    pub fn insert_blog(&mut self, blog: BlogPost) {
        self.blogs.insert(0, blog);
    }

    pub fn replace_blog(&mut self, blog: BlogPost) {
        if let Some(slot) = self.blogs.iter_mut().find(|b| b.id == blog.id) {
            *slot = blog;
        }
    }

    pub fn remove_blog(&mut self, id: &str) {
        self.blogs.retain(|b| b.id != id);
    }

    pub fn insert_experience(&mut self, experience: Experience) {
        self.experiences.insert(0, experience);
    }

    pub fn replace_experience(&mut self, experience: Experience) {
        if let Some(slot) = self.experiences.iter_mut().find(|e| e.id == experience.id) {
            *slot = experience;
        }
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.experiences.retain(|e| e.id != id);
    }

    pub fn replace_project(&mut self, project: Project) {
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
    }

    pub fn replace_skill_category(&mut self, category: SkillCategory) {
        if let Some(slot) = self.skills.iter_mut().find(|c| c.id == category.id) {
            *slot = category;
        }
    }

    pub fn set_connection(&mut self, report: ConnectionReport) {
        self.connection = report;
    }

    fn merge_report(&mut self, report: ConnectionReport) {
        self.connection = self.connection.clone().worst(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fallback;

    #[test]
    fn worst_report_wins() {
        let connected = ConnectionReport::connected();
        let warning = ConnectionReport::warning("fallback in use");

        assert_eq!(
            connected.clone().worst(warning.clone()),
            warning.clone()
        );
        assert_eq!(warning.clone().worst(connected), warning);
    }

    #[test]
    fn apply_overwrites_collection_and_degrades_status() {
        let mut store = PortfolioStore::new();
        store.set_connection(ConnectionReport::connected());

        store.apply_blogs(FetchOutcome {
            data: fallback::blogs(),
            report: ConnectionReport::warning("offline"),
        });

        assert_eq!(store.blogs.len(), 3);
        assert_eq!(store.connection.status, ConnectionStatus::Warning);
    }

    #[test]
    fn optimistic_insert_prepends() {
        let mut store = PortfolioStore::new();
        store.blogs = fallback::blogs();

        let mut created = fallback::blogs().remove(0);
        created.id = "4".to_string();
        store.insert_blog(created);

        assert_eq!(store.blogs[0].id, "4");
        assert_eq!(store.blogs.len(), 4);
    }

    #[test]
    fn optimistic_replace_swaps_in_place_without_reordering() {
        let mut store = PortfolioStore::new();
        store.blogs = fallback::blogs();

        let mut edited = store.blogs[1].clone();
        edited.title = "Edited".to_string();
        store.replace_blog(edited);

        assert_eq!(store.blogs[1].title, "Edited");
        assert_eq!(store.blogs.len(), 3);
    }

    #[test]
    fn optimistic_remove_filters_by_id() {
        let mut store = PortfolioStore::new();
        store.experiences = fallback::experiences();

        store.remove_experience("1");

        assert_eq!(store.experiences.len(), 1);
        assert!(store.experiences.iter().all(|e| e.id != "1"));
    }

    #[test]
    fn replace_of_unknown_id_is_a_no_op() {
        let mut store = PortfolioStore::new();
        store.blogs = fallback::blogs();
        let before = store.blogs.clone();

        let mut ghost = before[0].clone();
        ghost.id = "no-such-id".to_string();
        store.replace_blog(ghost);

        assert_eq!(store.blogs, before);
    }
}
