mod test_profile;

use serde_json::{json, Value};
use test_profile::*;

use portfolio_content::use_cases::validation::{
    validate_all, validate_contact, validate_education, validate_hackathon, validate_navbar_item,
    validate_profile, validate_project, validate_social_link, validate_tweet, validate_work_experience,
};

#[test]
fn valid_profile_is_returned_unchanged() {
    let input = valid_profile();

    let profile = validate_profile(&input).expect("valid profile");

    assert_eq!(profile.name, "Ada Example");
    assert_eq!(profile.first_name(), "Ada");
    assert_eq!(profile.contact.social.len(), 2);
    assert_eq!(profile.projects[0].links[1].kind, "Source");
    assert_eq!(serde_json::to_value(&profile).unwrap(), input);
}

#[test]
fn validation_is_idempotent() {
    let input = valid_profile();
    let first = validate_profile(&input).unwrap();
    let second = validate_profile(&serde_json::to_value(&first).unwrap()).unwrap();
    assert_eq!(first, second);

    let broken = profile_with("skills", json!([]));
    assert_eq!(validate_profile(&broken).unwrap_err(), validate_profile(&broken).unwrap_err());
}

#[test]
fn project_reports_every_broken_field() {
    let input = json!({
        "title": "",
        "href": "https://x.com",
        "dates": "2024",
        "active": true,
        "description": "short",
        "technologies": [],
        "links": [],
        "image": "/a.png"
    });

    let report = validate_project(&input).unwrap_err();

    assert_eq!(report.entity, "Project");
    assert_eq!(report.len(), 3);
    assert!(report.has_path("title"));
    assert!(report.has_path("description"));
    assert!(report.has_path("technologies"));
    assert_eq!(
        report.at("description").next().unwrap().message,
        "Description must be at least 10 characters"
    );
}

#[test]
fn missing_required_field_is_named() {
    let mut input = valid_project();
    input.as_object_mut().unwrap().remove("active");

    let report = validate_project(&input).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "active");
    assert_eq!(report.violations[0].message, "Active flag is required");
}

#[test]
fn nested_link_violation_points_at_the_link() {
    let mut input = valid_project();
    input["links"][1]["href"] = json!("not a url");

    let report = validate_project(&input).unwrap_err();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "links[1].href");
}

#[test]
fn broken_social_link_is_located_in_contact() {
    let mut contact = valid_contact();
    contact["social"]["GitHub"]["url"] = json!("not-a-url");

    let report = validate_contact(&contact).unwrap_err();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "social.GitHub.url");

    let profile = profile_with("contact", contact);
    let report = validate_profile(&profile).unwrap_err();
    assert!(report.has_path("contact.social.GitHub.url"));
}

#[test]
fn empty_projects_are_allowed_but_empty_skills_are_not() {
    assert!(validate_profile(&profile_with("projects", json!([]))).is_ok());

    let report = validate_profile(&profile_with("skills", json!([]))).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "skills");
    assert_eq!(report.violations[0].message, "At least one skill is required");
}

#[test]
fn absent_collections_are_empty() {
    let profile = validate_profile(&profile_without("hackathons")).unwrap();
    assert!(profile.hackathons.is_empty());
}

#[test]
fn missing_contact_is_reported() {
    let report = validate_profile(&profile_without("contact")).unwrap_err();
    assert_eq!(report.violations[0].path, "contact");
    assert_eq!(report.violations[0].message, "Contact details are required");
}

#[test]
fn violations_across_the_tree_are_aggregated() {
    let mut input = valid_profile();
    input["summary"] = json!("too short");
    input["work"][0]["company"] = json!("  ");
    input["tweets"][0]["id"] = json!("abc");
    input["education"][0]["href"] = json!("");

    let report = validate_profile(&input).unwrap_err();

    let paths: Vec<&str> = report.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["summary", "work[0].company", "education[0].href", "tweets[0].id"]
    );
}

#[test]
fn type_errors_are_reported_where_they_occur() {
    let mut input = profile_with("summary", json!("short"));
    input["skills"] = json!([]);
    input["projects"][0]["active"] = json!("yes");
    input["projects"][0]["title"] = Value::Null;

    let report = validate_profile(&input).unwrap_err();

    assert_eq!(report.len(), 4);
    assert_eq!(report.violations[0].path, "projects[0].active");
    assert_eq!(report.violations[0].message, "Expected a boolean, received string");
    assert_eq!(report.at("projects[0].title").next().unwrap().message, "Title is required");
    assert!(report.has_path("summary"));
    assert!(report.has_path("skills"));
    assert!(!report.has_path("$"));
}

#[test]
fn ill_typed_fields_are_not_also_reported_as_missing() {
    let report = validate_project(&json!({ "title": 42 })).unwrap_err();

    let title: Vec<&str> = report.at("title").map(|v| v.message.as_str()).collect();
    assert_eq!(title, vec!["Expected a string, received number"]);
    assert!(report.has_path("active"));
    assert!(report.has_path("description"));
}

#[test]
fn non_objects_are_rejected_at_their_path() {
    let report = validate_profile(&json!(["not", "an", "object"])).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "$");
    assert_eq!(report.violations[0].message, "Expected an object, received array");

    let positional = json!([
        "Site", "https://x.com", "2024", true, "A long enough description",
        ["Rust"], [], "/a.png"
    ]);
    let report = validate_project(&positional).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "$");

    let mut input = valid_project();
    input["links"][0] = json!(["Website", "https://x.com"]);
    let report = validate_project(&input).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "links[0]");
    assert_eq!(report.violations[0].message, "Expected an object, received array");

    let mut input = valid_profile();
    input["contact"]["social"]["GitHub"] = json!("https://github.com");
    let report = validate_profile(&input).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "contact.social.GitHub");
}

#[test]
fn blank_description_is_too_short() {
    let mut input = valid_project();
    input["description"] = json!("            ");

    let report = validate_project(&input).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(report.violations[0].path, "description");
    assert_eq!(report.violations[0].message, "Description must be at least 10 characters");

    let report = validate_profile(&profile_with("summary", json!("   padded   "))).unwrap_err();
    assert!(report.has_path("summary"));
}

#[test]
fn standalone_entities_validate() {
    assert!(validate_work_experience(&valid_work_experience()).is_ok());
    assert!(validate_education(&valid_education()).is_ok());
    assert!(validate_hackathon(&valid_hackathon()).is_ok());
    assert!(validate_tweet(&valid_tweet()).is_ok());
    assert!(validate_navbar_item(&json!({ "href": "/", "label": "Home" })).is_ok());

    let report = validate_social_link(&json!({ "name": "GitHub", "url": "https://github.com" })).unwrap_err();
    assert_eq!(report.violations[0].path, "navbar");
}

#[test]
fn ongoing_work_has_no_end() {
    let mut input = valid_work_experience();
    input.as_object_mut().unwrap().remove("end");

    let work = validate_work_experience(&input).unwrap();

    assert!(work.is_ongoing());
    assert_eq!(work.period(), "May 2021 – Present");
}

#[test]
fn icons_are_not_checked() {
    let mut input = valid_hackathon();
    input["links"][0]["icon"] = json!("");
    assert!(validate_hackathon(&input).is_ok());
}

#[test]
fn validate_all_is_a_pass_fail_check() {
    assert!(validate_all(&valid_profile()));
    assert!(!validate_all(&profile_with("url", json!("nope"))));
}
