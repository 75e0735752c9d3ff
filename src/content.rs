use serde::{Deserialize, Serialize};

/// Category id that matches every project regardless of its own category.
pub const ALL_CATEGORY: &str = "all";

/// A portfolio project shown in the showcase grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Recognised project status values.
///
/// The `status` field itself is open-ended; anything that does not parse to
/// one of these variants carries no badge semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Working,
    InProgress,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Working => write!(f, "working"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    // Exact match: the wire values are case-sensitive, so "Working" is an
    // unrecognised status rather than a badge trigger.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "working" => Ok(ProjectStatus::Working),
            "in-progress" => Ok(ProjectStatus::InProgress),
            _ => Err(format!("unrecognised project status: {s}")),
        }
    }
}

impl ProjectRecord {
    /// The recognised status, if any.
    pub fn status(&self) -> Option<ProjectStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// Whether the card carries the hover-revealed "Still Working" ribbon.
    pub fn still_working(&self) -> bool {
        matches!(
            self.status(),
            Some(ProjectStatus::Working | ProjectStatus::InProgress)
        )
    }

    /// Whether the card carries the always-visible "Work in Progress" chip.
    ///
    /// Deliberately narrower than [`Self::still_working`]: a `working`
    /// project gets the hover ribbon but not the persistent chip.
    pub fn work_in_progress(&self) -> bool {
        self.status() == Some(ProjectStatus::InProgress)
    }

    /// Demo URL, if one is set and non-empty.
    pub fn demo_url(&self) -> Option<&str> {
        self.link.as_deref().filter(|url| !url.is_empty())
    }

    /// Source URL, if one is set and non-empty.
    pub fn source_url(&self) -> Option<&str> {
        self.github.as_deref().filter(|url| !url.is_empty())
    }
}

/// A filter control entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Everything the showcase renders: filter categories plus the ordered
/// project list. Built once and handed to the component by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseContent {
    pub categories: Vec<Category>,
    pub projects: Vec<ProjectRecord>,
}

impl ShowcaseContent {
    /// The shipped portfolio content.
    pub fn built_in() -> Self {
        Self {
            categories: vec![Category::new(ALL_CATEGORY, "All Projects", "🏁")],
            projects: vec![
                ProjectRecord {
                    title: "EmotionEcho".to_string(),
                    description:
                        "Facial Emotion Recognition Using OpenCV and DeepFace Python libraries"
                            .to_string(),
                    image: "https://learn.g2.com/hubfs/G2CM_FI454_Learn_Article_Images_%5BFacial_recognition%5D_V1a-1.png"
                        .to_string(),
                    tech: vec![
                        "Python".to_string(),
                        "OpenCV".to_string(),
                        "DeepFace".to_string(),
                        "AI".to_string(),
                    ],
                    category: "ai".to_string(),
                    link: None,
                    github: Some(
                        "https://github.com/anupkumarsharma9705/EmotionEcho.git".to_string(),
                    ),
                    status: None,
                },
                ProjectRecord {
                    title: "SFTG – Secure File Transfer Gateway".to_string(),
                    description: "Developing a secure file transfer platform that ensures \
                                  encryption, authentication, and cloud-based delivery. \
                                  Integrated Spring Boot backend with React frontend, and \
                                  containerized with Docker for CI/CD deployment."
                        .to_string(),
                    image: "/pics/letter-s.png".to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Spring Boot".to_string(),
                        "MySQL".to_string(),
                        "AWS".to_string(),
                        "Docker".to_string(),
                    ],
                    category: "DevSecOps".to_string(),
                    link: Some(String::new()),
                    github: None,
                    status: Some("working".to_string()),
                },
            ],
        }
    }
}

/// Select the projects visible under a category filter.
///
/// [`ALL_CATEGORY`] passes every record through; any other id keeps exactly
/// the records whose `category` matches it, case-sensitively. Relative order
/// is preserved. An id matching nothing yields an empty list.
pub fn visible_projects(projects: &[ProjectRecord], active: &str) -> Vec<ProjectRecord> {
    if active == ALL_CATEGORY {
        return projects.to_vec();
    }

    projects
        .iter()
        .filter(|p| p.category == active)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            tech: Vec::new(),
            category: category.to_string(),
            link: None,
            github: None,
            status: None,
        }
    }

    fn titles(projects: &[ProjectRecord]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn status_from_str_valid() {
        assert_eq!(
            "working".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Working
        );
        assert_eq!(
            "in-progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
    }

    #[test]
    fn status_from_str_is_case_sensitive() {
        assert!("Working".parse::<ProjectStatus>().is_err());
        assert!("WORKING".parse::<ProjectStatus>().is_err());
        assert!("In-Progress".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_from_str_invalid() {
        assert!("done".parse::<ProjectStatus>().is_err());
        assert!("".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_roundtrip() {
        for status in [ProjectStatus::Working, ProjectStatus::InProgress] {
            let s = status.to_string();
            let parsed: ProjectStatus = s.parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn all_category_keeps_everything_in_order() {
        let projects = vec![
            record("A", "ai"),
            record("B", "DevSecOps"),
            record("C", "ai"),
        ];

        let visible = visible_projects(&projects, ALL_CATEGORY);
        assert_eq!(visible.len(), projects.len());
        assert_eq!(titles(&visible), vec!["A", "B", "C"]);
    }

    #[test]
    fn category_filter_selects_exact_matches_in_order() {
        let projects = vec![
            record("A", "ai"),
            record("B", "DevSecOps"),
            record("C", "ai"),
        ];

        let visible = visible_projects(&projects, "ai");
        assert_eq!(titles(&visible), vec!["A", "C"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let projects = vec![record("A", "ai")];

        assert!(visible_projects(&projects, "AI").is_empty());
        assert!(visible_projects(&projects, "Ai").is_empty());
    }

    #[test]
    fn unmatched_category_yields_empty_list() {
        let projects = vec![record("A", "ai")];

        assert!(visible_projects(&projects, "web").is_empty());
    }

    #[test]
    fn empty_dataset_yields_empty_list() {
        assert!(visible_projects(&[], ALL_CATEGORY).is_empty());
        assert!(visible_projects(&[], "ai").is_empty());
    }

    #[test]
    fn absent_status_carries_no_badges() {
        let project = record("A", "ai");

        assert_eq!(project.status(), None);
        assert!(!project.still_working());
        assert!(!project.work_in_progress());
    }

    #[test]
    fn working_status_gets_ribbon_but_not_chip() {
        let mut project = record("A", "ai");
        project.status = Some("working".to_string());

        assert!(project.still_working());
        assert!(!project.work_in_progress());
    }

    #[test]
    fn in_progress_status_gets_both_badges() {
        let mut project = record("A", "ai");
        project.status = Some("in-progress".to_string());

        assert!(project.still_working());
        assert!(project.work_in_progress());
    }

    #[test]
    fn unrecognised_status_behaves_like_absent() {
        let mut project = record("A", "ai");
        project.status = Some("shipped".to_string());

        assert_eq!(project.status(), None);
        assert!(!project.still_working());
        assert!(!project.work_in_progress());
    }

    #[test]
    fn empty_link_renders_no_demo_action() {
        let mut project = record("A", "ai");
        assert_eq!(project.demo_url(), None);

        project.link = Some(String::new());
        assert_eq!(project.demo_url(), None);

        project.link = Some("https://demo.example".to_string());
        assert_eq!(project.demo_url(), Some("https://demo.example"));
    }

    #[test]
    fn empty_github_renders_no_code_action() {
        let mut project = record("A", "ai");
        assert_eq!(project.source_url(), None);

        project.github = Some(String::new());
        assert_eq!(project.source_url(), None);

        project.github = Some("https://github.com/a/b".to_string());
        assert_eq!(project.source_url(), Some("https://github.com/a/b"));
    }

    #[test]
    fn record_deserialises_with_optional_fields_absent() {
        let json = r#"{
            "title": "A",
            "description": "d",
            "image": "img.png",
            "tech": ["Rust"],
            "category": "ai"
        }"#;

        let project: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(project.link, None);
        assert_eq!(project.github, None);
        assert_eq!(project.status, None);
    }

    #[test]
    fn built_in_content_is_well_formed() {
        let content = ShowcaseContent::built_in();

        assert!(!content.projects.is_empty());
        assert_eq!(content.categories[0].id, ALL_CATEGORY);
        for project in &content.projects {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.image.is_empty());
        }
    }

    // The two-record walkthrough: filter on "all", hover the second card.
    #[test]
    fn mixed_dataset_scenario() {
        let mut a = record("A", "ai");
        a.status = Some("working".to_string());
        a.github = Some("g1".to_string());

        let mut b = record("B", "DevSecOps");
        b.status = Some("in-progress".to_string());
        b.link = Some(String::new());
        b.github = Some(String::new());

        let visible = visible_projects(&[a, b], ALL_CATEGORY);
        assert_eq!(titles(&visible), vec!["A", "B"]);

        // B carries both badge kinds; its ribbon shows only while hovered.
        assert!(visible[1].still_working());
        assert!(visible[1].work_in_progress());

        // A only has the hover ribbon, so an unhovered A shows nothing.
        assert!(visible[0].still_working());
        assert!(!visible[0].work_in_progress());

        // Both of B's action links are empty strings, so neither renders.
        assert_eq!(visible[1].demo_url(), None);
        assert_eq!(visible[1].source_url(), None);
        assert_eq!(visible[0].source_url(), Some("g1"));
    }
}
