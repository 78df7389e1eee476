//! Minimal serde view of a workflow document.
//!
//! Only the `jobs → steps → uses` path matters for pinning; every other key
//! in the document is ignored. The parsed shape is used to *find* references
//! — rewriting is textual, against the original bytes, so comments and
//! formatting survive untouched.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub jobs: BTreeMap<String, Job>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uses: Option<String>,
}

impl Workflow {
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Every step `uses:` string, jobs in name order, steps in file order.
    pub fn action_references(&self) -> impl Iterator<Item = &str> {
        self.jobs
            .values()
            .flat_map(|job| job.steps.iter())
            .filter_map(|step| step.uses.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKFLOW: &str = r#"
name: ci
on: [push]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: checkout
        uses: actions/checkout@v4
      - run: cargo test
  lint:
    steps:
      - uses: actions/setup-node@v3.1
"#;

    #[test]
    fn collects_uses_in_job_then_step_order() {
        let wf = Workflow::parse(WORKFLOW).unwrap();
        let refs: Vec<&str> = wf.action_references().collect();
        assert_eq!(refs, vec!["actions/checkout@v4", "actions/setup-node@v3.1"]);
    }

    #[test]
    fn steps_without_uses_are_skipped() {
        let wf = Workflow::parse("jobs:\n  a:\n    steps:\n      - run: make\n").unwrap();
        assert_eq!(wf.action_references().count(), 0);
    }

    #[test]
    fn document_without_jobs_parses_empty() {
        let wf = Workflow::parse("name: nothing\n").unwrap();
        assert!(wf.jobs.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(Workflow::parse("jobs: [unclosed").is_err());
    }
}
