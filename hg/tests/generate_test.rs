//! End-to-end tests for the generation pipeline using the shipped templates

use std::fs;
use std::path::PathBuf;

use htmlgen::prompt::Answer;
use htmlgen::{
    GenError, Generator, OutputData, OutputFormat, RawInput, Request, ScriptedPrompter, Settings, TemplateStore, Theme,
    collect_request, read_json,
};
use serde_json::json;
use tempfile::TempDir;

fn shipped_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../templates")
}

fn settings_for(temp: &TempDir) -> Settings {
    Settings {
        output_dir: temp.path().join("output"),
        templates_dir: shipped_templates(),
        auto_open_browser: false,
        ..Settings::default()
    }
}

// =============================================================================
// Template store
// =============================================================================

#[test]
fn test_shipped_templates_exist() {
    let store = TemplateStore::new(shipped_templates());
    assert!(store.exists("page"));
    assert!(store.exists("oboe-course"));
    assert!(!store.exists("nonexistent"));
}

#[test]
fn test_shipped_page_template_renders_fields() {
    let store = TemplateStore::new(shipped_templates());
    let html = store
        .render(
            "page",
            &json!({
                "title": "Test Page",
                "content": "Test content here",
                "generator": "test-generator",
                "version": "1.0.0",
            }),
        )
        .unwrap();

    assert!(html.contains("Test Page"));
    assert!(html.contains("Test content here"));
    assert!(html.contains("test-generator v1.0.0"));
}

// =============================================================================
// Generator
// =============================================================================

#[test]
fn test_generate_simple_page_both_formats() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp);
    let request = Request {
        input: RawInput::Simple {
            title: "Test Page".to_string(),
            content: "Test content here".to_string(),
            theme: Some(Theme::Dark),
        },
        format: OutputFormat::Both,
    };

    let report = Generator::new(&settings).generate(&request).unwrap();
    assert_eq!(report.files.len(), 2);

    let html = fs::read_to_string(report.html_path().unwrap()).unwrap();
    assert!(html.contains("Test Page"));
    assert!(html.contains("Test content here"));
    assert!(html.contains("script-html-generator v1.0.0"));
    assert!(html.contains(Theme::Dark.style().theme_styles));

    let back = read_json(report.json_path().unwrap()).unwrap();
    assert_eq!(back, report.data);
}

#[test]
fn test_generate_course_page() {
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        site_name: "Acme".to_string(),
        ..settings_for(&temp)
    };
    let request = Request {
        input: RawInput::Course {
            title: "Finding Your Ideal Trousers".to_string(),
            subtitle: None,
            description: None,
            image: Some("https://example.com/pants.png".to_string()),
        },
        format: OutputFormat::Html,
    };

    let report = Generator::new(&settings).generate(&request).unwrap();
    let html_path = report.html_path().unwrap();
    let name = html_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("oboe-course-"));
    assert!(name.ends_with(".html"));

    let html = fs::read_to_string(html_path).unwrap();
    assert!(html.contains("Finding Your Ideal Trousers"));
    assert!(html.contains("for Every Occasion"));
    assert!(html.contains("Acme"));
    assert!(html.contains("Deep Dive"));
    assert!(html.contains("sidebar deep-dive"));
    assert!(html.contains("Exploring Sustainable Practices in Trouser Manufacturing"));
    assert!(html.contains("<img src="));
}

#[test]
fn test_course_render_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp);
    let store = TemplateStore::new(&settings.templates_dir);
    let renderer = htmlgen::Renderer::new(&store);

    let input = RawInput::Course {
        title: "Repeatable".to_string(),
        subtitle: None,
        description: None,
        image: None,
    };
    let data = htmlgen::assemble(&input, &settings).unwrap();
    let first = renderer.render(&data).unwrap();
    let second = renderer.render(&data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_with_missing_templates_dir() {
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        templates_dir: temp.path().join("no-templates"),
        ..settings_for(&temp)
    };
    let request = Request {
        input: RawInput::Simple {
            title: "T".to_string(),
            content: "C".to_string(),
            theme: None,
        },
        format: OutputFormat::Html,
    };

    let err = Generator::new(&settings).generate(&request).unwrap_err();
    assert!(matches!(err, GenError::TemplateNotFound { .. }));
    assert!(!settings.output_dir.exists());
}

// =============================================================================
// Prompt flow into generation
// =============================================================================

#[test]
fn test_scripted_session_generates_page() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp);
    let mut prompter = ScriptedPrompter::new(vec![
        Answer::Choice(0),
        Answer::Text("Scripted".to_string()),
        Answer::Text("From a script".to_string()),
        Answer::Choice(1),
        Answer::Choice(1),
    ]);

    let request = collect_request(&mut prompter, &settings).unwrap().unwrap();
    let report = Generator::new(&settings).generate(&request).unwrap();

    assert_eq!(report.files.len(), 1);
    let OutputData::Simple(page) = read_json(&report.files[0]).unwrap() else {
        panic!("expected simple page data");
    };
    assert_eq!(page.title, "Scripted");
    assert_eq!(page.theme, Theme::Dark);
}
