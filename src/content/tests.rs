//! Content domain: tests for the RON loader.

use super::parse_cv;

const SAMPLE: &str = r#"
CvData(
    personal: PersonalInfo(
        name: "TEST PERSON",
        title: "Engineer",
        email: "test@example.com",
    ),
    objective: "Build things.",
    experience: [
        ExperienceDef(
            id: "exp1",
            company: "Acme",
            position: "Developer",
            period: "2020 - Present",
            current: true,
            responsibilities: ["Shipped features"],
            tech_stack: ["Rust"],
        ),
    ],
    education: [
        EducationDef(
            id: "edu1",
            institution: "State University",
            degree: "BSc",
            field: "Computer Science",
            period: "2012 - 2016",
        ),
    ],
    skills: SkillsDef(
        technical: ["Rust", "SQL"],
        soft: ["Communication"],
    ),
)
"#;

#[test]
fn test_parse_sample_cv() {
    let cv = parse_cv(SAMPLE, "sample").expect("sample should parse");
    assert_eq!(cv.personal.name, "TEST PERSON");
    assert_eq!(cv.experience.len(), 1);
    assert!(cv.experience[0].current);
    assert_eq!(cv.experience[0].tech_stack, vec!["Rust".to_string()]);
    assert_eq!(cv.skills.technical.len(), 2);
    // Optional sections default to empty.
    assert!(cv.awards.is_empty());
    assert!(cv.certificates.is_empty());
}

#[test]
fn test_parse_error_reports_file() {
    let err = parse_cv("not ron at all (", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_optional_fields_default() {
    let minimal = r#"
CvData(
    personal: PersonalInfo(name: "A", title: "B"),
    objective: "",
)
"#;
    let cv = parse_cv(minimal, "minimal").expect("minimal should parse");
    assert!(cv.personal.phone.is_empty());
    assert!(cv.experience.is_empty());
    assert!(cv.skills.technical.is_empty());
}
