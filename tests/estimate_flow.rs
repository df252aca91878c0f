use estimator::engine::Estimator;
use estimator::export::{export_csv, export_to_dir, load_json};
use estimator::model::{Complexity, EstimateInput, Feature, ProjectType, TechStack};
use estimator::search::{search, ContentKind, KindFilter, SortBy};
use estimator::wizard::{Step, Wizard};
use pretty_assertions::assert_eq;

fn web_project(wizard: &mut Wizard) {
    wizard.input_mut().project_type = Some(ProjectType::Web);
    wizard.next().unwrap();

    let input = wizard.input_mut();
    input.complexity = Some(Complexity::Medium);
    input.set_team_size(4);
    input.set_duration(8);
    input.toggle_feature(Feature::Authentication);
    input.toggle_feature(Feature::Analytics);
    input.addons.cloud = true;
    wizard.next().unwrap();

    let input = wizard.input_mut();
    input.tech_stack = Some(TechStack::from("MERN".to_string()));
    input.requirements = "Customer portal with SSO".to_string();
}

#[test]
fn wizard_produces_full_estimate() {
    let mut wizard = Wizard::default();
    web_project(&mut wizard);
    let result = wizard.generate().unwrap().clone();

    assert_eq!(wizard.step(), Step::Results);
    assert_eq!(wizard.input().tech_stack, Some(TechStack::Mern));
    assert_eq!(result.total_cost, 98_500);
    assert_eq!(result.timeline, 10);
    assert_eq!(result.risk_score, 0);
    assert_eq!(
        result.team_structure,
        vec!["Frontend Developer", "Backend Developer", "QA Engineer"]
    );
    assert_eq!(
        result.ai_insights,
        vec![
            "Estimated team productivity: 6 units/week",
            "Risk level acceptable for standard delivery",
            "Market fluctuation range: ₹88650 - ₹123125",
        ]
    );

    let b = &result.breakdown;
    assert_eq!(
        (b.development, b.design, b.testing, b.project_management, b.contingency),
        (54_175, 14_775, 11_820, 9_850, 7_880)
    );
    assert_eq!(b.total(), result.total_cost);
}

#[test]
fn high_complexity_ai_project_gets_extended_roster() {
    let mut input = EstimateInput::new();
    input.project_type = Some(ProjectType::Ai);
    input.complexity = Some(Complexity::High);
    input.set_team_size(10);
    input.set_duration(20);

    let result = Estimator::default().estimate(&input.validate().unwrap());
    assert_eq!(
        result.team_structure,
        vec![
            "ML Engineer",
            "Data Scientist",
            "Backend Engineer",
            "Solution Architect",
            "AI Researcher",
        ]
    );
    assert_eq!(result.risk_score, 65);
    assert_eq!(result.timeline, 29);
    assert!(result.ai_insights[1].starts_with("High risk detected"));
}

#[test]
fn exported_estimate_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut wizard = Wizard::default();
    web_project(&mut wizard);
    let result = wizard.generate().unwrap().clone();

    let json_path = export_to_dir(&result, dir.path()).unwrap();
    let name = json_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("AI-Estimate-"));
    assert!(name.ends_with(".json"));
    assert_eq!(load_json(&json_path).unwrap(), result);

    let raw = std::fs::read_to_string(&json_path).unwrap();
    assert!(raw.contains("\"totalCost\": 98500"));
    assert!(raw.contains("\"projectManagement\""));

    let csv_path = dir.path().join("breakdown.csv");
    export_csv(&result, &csv_path).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().next(), Some("Category,Amount,Share"));
    assert_eq!(csv.lines().last(), Some("Total,98500,100.0%"));
}

#[test]
fn case_studies_sort_newest_first() {
    let results = search("case-study");
    let hits = results.view(KindFilter::Only(ContentKind::CaseStudy), SortBy::Date);
    let titles: Vec<&str> = hits.iter().map(|h| h.entry.title).collect();

    assert_eq!(
        titles,
        vec![
            "TechStart: 60% Faster Project Planning",
            "Digital Ventures: 3x ROI in 6 Months",
        ]
    );
    assert_eq!(search("").empty_message().as_deref(), Some("Start searching"));
}
