//! CV fixtures shared by the checker tests.

use crate::models::cv::{
    CvDocument, EducationItem, EducationSection, ExperienceItem, ExperienceSection, Header,
    LanguageItem, LanguagesSection, ProjectItem, ProjectsSection, SkillCategory, SkillsSection,
    Summary,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A complete, well-formed CV: full header, three-sentence summary, two quantified jobs,
/// one degree, one project, three skill categories and two languages.
pub fn full_cv() -> CvDocument {
    CvDocument {
        template_id: Some("jake".to_string()),
        locale: None,
        section_order: None,
        custom_sections: None,
        custom_latex: None,
        header: Header {
            name: "Jane Doe".to_string(),
            location: "San Francisco, CA".to_string(),
            phone: "+1 555 010 0199".to_string(),
            email: "jane@example.com".to_string(),
            linkedin: "https://linkedin.com/in/janedoe".to_string(),
            github: "https://github.com/janedoe".to_string(),
        },
        summary: Summary {
            title: "Professional Summary".to_string(),
            text: "Backend engineer with eight years of experience building payment platforms \
                   that move billions of dollars for merchants across three continents. \
                   Specializes in distributed systems, data modeling and reliability engineering \
                   for high-volume transactional workloads. \
                   Known for mentoring engineers, shaping technical roadmaps with product \
                   partners and shipping complex migrations on schedule without downtime."
                .to_string(),
        },
        education: EducationSection {
            title: "Education".to_string(),
            items: vec![EducationItem {
                institution: "State University".to_string(),
                degree: "B.S. Computer Science".to_string(),
                date: "2013 - 2017".to_string(),
                location: "Springfield".to_string(),
                highlights: vec![],
            }],
        },
        experience: ExperienceSection {
            title: "Experience".to_string(),
            items: vec![
                ExperienceItem {
                    company: "Acme Payments".to_string(),
                    role: "Senior Backend Engineer".to_string(),
                    date: "Jan 2021 - Present".to_string(),
                    location: "Remote".to_string(),
                    highlights: strings(&[
                        "Led a team of 6 engineers to rebuild the settlement pipeline, cutting nightly batch time by 40% and removing manual reconciliation steps",
                        "Designed an idempotent ledger API handling 12,000 requests per second with strict ordering guarantees across regions",
                        "Reduced cloud spend by $250,000 per year through capacity planning, autoscaling policies and storage tiering",
                        "Mentored 5 junior engineers through structured code reviews, pairing sessions and a shared design document practice",
                    ]),
                },
                ExperienceItem {
                    company: "Globex".to_string(),
                    role: "Backend Engineer".to_string(),
                    date: "Jun 2017 - Dec 2020".to_string(),
                    location: "Chicago, IL".to_string(),
                    highlights: strings(&[
                        "Built a fraud scoring service that blocked 95% of chargebacks while keeping false positives under 2%",
                        "Migrated 30 services from a shared monolith to Kubernetes with zero customer-facing incidents",
                        "Automated release tooling, reducing deploy time from 2 hours to 15 minutes for every product team",
                    ]),
                },
            ],
        },
        projects: ProjectsSection {
            title: "Projects".to_string(),
            items: vec![ProjectItem {
                name: "ledger-rs".to_string(),
                tech: "Rust".to_string(),
                date: "2023".to_string(),
                highlights: strings(&[
                    "Built an open-source double-entry ledger library adopted by 40 contributors and several fintech startups",
                ]),
            }],
        },
        skills: SkillsSection {
            title: "Skills".to_string(),
            categories: vec![
                SkillCategory {
                    name: "Languages".to_string(),
                    values: "Rust, Go, Python, SQL".to_string(),
                },
                SkillCategory {
                    name: "Infrastructure".to_string(),
                    values: "Kubernetes, Terraform, AWS".to_string(),
                },
                SkillCategory {
                    name: "Data".to_string(),
                    values: "PostgreSQL, Kafka, Redis".to_string(),
                },
            ],
        },
        languages: LanguagesSection {
            title: "Languages".to_string(),
            items: vec![
                LanguageItem {
                    name: "English".to_string(),
                    level: "Native".to_string(),
                },
                LanguageItem {
                    name: "Spanish".to_string(),
                    level: "Fluent".to_string(),
                },
            ],
        },
    }
}

/// Every string empty and every list empty.
pub fn empty_cv() -> CvDocument {
    CvDocument::default()
}
