//! The fixed company-information record.
//!
//! Static site content, not derived data — the company endpoint returns it
//! verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContact {
  pub email:   String,
  pub phone:   String,
  pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
  pub name:         String,
  pub description:  String,
  pub established:  String,
  pub location:     String,
  pub services:     Vec<String>,
  pub technologies: Vec<String>,
  pub contact:      CompanyContact,
}

impl CompanyInfo {
  /// The record served by the company endpoint.
  pub fn fixed() -> Self {
    Self {
      name: "Vitrine Digital".to_owned(),
      description: "A full-stack development studio specialising in modern web \
                    applications and innovative technology solutions."
        .to_owned(),
      established: "2024".to_owned(),
      location: "Global".to_owned(),
      services: strings(&[
        "Full-Stack Web Development",
        "Mobile Application Development",
        "Cloud Infrastructure Solutions",
        "Database Design & Optimization",
        "API Development & Integration",
        "DevOps & Deployment Services",
      ]),
      technologies: strings(&[
        "Vue.js",
        "React",
        "Node.js",
        "Python",
        "PostgreSQL",
        "MongoDB",
        "AWS",
        "Google Cloud",
        "Docker",
        "Kubernetes",
        "CI/CD",
      ]),
      contact: CompanyContact {
        email:   "hello@vitrine.dev".to_owned(),
        phone:   "+1 (555) 010-4477".to_owned(),
        address: "Remote-First Company".to_owned(),
      },
    }
  }
}

fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|s| (*s).to_owned()).collect()
}
