use serde::{Deserialize, Serialize};

use super::{trim_list, ValidationError};

/// Untyped posting as it arrives in a request body or from the remote backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingInput {
    pub id: Option<String>,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub required_skills: Vec<String>,
    #[serde(alias = "nice_skills")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(alias = "remote")]
    pub is_remote: bool,
}

/// A validated job posting. `required_skills` is never empty for values built
/// through `new` or `TryFrom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub is_remote: bool,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        required_skills: impl IntoIterator<Item = impl Into<String>>,
        nice_to_have_skills: impl IntoIterator<Item = impl Into<String>>,
        is_remote: bool,
    ) -> Result<Self, ValidationError> {
        let posting = Self::unchecked(title, required_skills, nice_to_have_skills, is_remote);
        posting.validate()?;
        Ok(posting)
    }

    /// Builds a posting without the non-empty checks. Used for records whose
    /// shape is trusted but may still be degenerate, e.g. legacy fixtures.
    pub fn unchecked(
        title: impl Into<String>,
        required_skills: impl IntoIterator<Item = impl Into<String>>,
        nice_to_have_skills: impl IntoIterator<Item = impl Into<String>>,
        is_remote: bool,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into().trim().to_string(),
            company: String::new(),
            location: String::new(),
            salary: String::new(),
            // Every entry counts toward the overlap ratio, so duplicates stay.
            required_skills: trim_list(required_skills.into_iter().map(Into::into)),
            nice_to_have_skills: trim_list(nice_to_have_skills.into_iter().map(Into::into)),
            is_remote,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_company(
        mut self,
        company: impl Into<String>,
        location: impl Into<String>,
        salary: impl Into<String>,
    ) -> Self {
        self.company = company.into();
        self.location = location.into();
        self.salary = salary.into();
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if self.required_skills.is_empty() {
            return Err(ValidationError::Empty {
                field: "required_skills",
            });
        }
        Ok(())
    }
}

impl TryFrom<JobPostingInput> for JobPosting {
    type Error = ValidationError;

    fn try_from(input: JobPostingInput) -> Result<Self, Self::Error> {
        let posting = JobPosting::new(
            input.title,
            input.required_skills,
            input.nice_to_have_skills,
            input.is_remote,
        )?
        .with_id(input.id.unwrap_or_default())
        .with_company(
            input.company.unwrap_or_default(),
            input.location.unwrap_or_default(),
            input.salary.unwrap_or_default(),
        );
        Ok(posting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_skills_rejected() {
        let err = JobPosting::new("ML Engineer", Vec::<String>::new(), ["AWS"], true).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "required_skills"
            }
        );
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = JobPosting::new("   ", ["Python"], Vec::<String>::new(), false).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn test_unchecked_allows_degenerate_posting() {
        let posting = JobPosting::unchecked("Intern", Vec::<String>::new(), Vec::<String>::new(), false);
        assert!(posting.required_skills.is_empty());
    }

    #[test]
    fn test_skill_lists_are_trimmed_but_keep_duplicates() {
        let posting =
            JobPosting::new("X", [" React ", "react", "", "Go"], ["Docker", "docker"], false)
                .unwrap();
        assert_eq!(posting.required_skills, vec!["React", "react", "Go"]);
        assert_eq!(posting.nice_to_have_skills, vec!["Docker", "docker"]);
    }

    #[test]
    fn test_blank_only_required_skills_rejected() {
        let err = JobPosting::new("X", ["  ", ""], Vec::<String>::new(), false).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "required_skills"
            }
        );
    }

    #[test]
    fn test_input_accepts_backend_field_names() {
        let input: JobPostingInput = serde_json::from_value(serde_json::json!({
            "id": "job_1",
            "title": "DevOps Lead",
            "required_skills": ["AWS", "Kubernetes"],
            "nice_skills": ["Docker"],
            "remote": true
        }))
        .unwrap();
        let posting = JobPosting::try_from(input).unwrap();
        assert_eq!(posting.id, "job_1");
        assert_eq!(posting.nice_to_have_skills, vec!["Docker"]);
        assert!(posting.is_remote);
    }
}
