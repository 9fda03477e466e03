//! Content domain: CV data definitions deserialized from RON.

use serde::Deserialize;

/// Everything the pages render, loaded once at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CvData {
    pub personal: PersonalInfo,
    pub objective: String,
    #[serde(default)]
    pub experience: Vec<ExperienceDef>,
    #[serde(default)]
    pub education: Vec<EducationDef>,
    #[serde(default)]
    pub skills: SkillsDef,
    #[serde(default)]
    pub awards: Vec<AwardDef>,
    #[serde(default)]
    pub certificates: Vec<CertificateDef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceDef {
    pub id: String,
    pub company: String,
    pub position: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationDef {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SkillsDef {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwardDef {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub year: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificateDef {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub year: String,
}
