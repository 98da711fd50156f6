use std::path::PathBuf;

use vitrine::{content::PortfolioContent, error::VitrineError};

fn temp_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vitrine-{}-{}", std::process::id(), name));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn content_file_replaces_builtin_text() {
    let mut content = PortfolioContent::builtin().unwrap();
    content.profile.name = "Ada Lovelace".into();
    content.projects.truncate(2);
    let text = ron::ser::to_string_pretty(&content, ron::ser::PrettyConfig::default()).unwrap();

    let path = temp_file("content.ron", &text);
    let loaded = PortfolioContent::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.profile.name, "Ada Lovelace");
    assert_eq!(loaded.projects.len(), 2);
    assert_eq!(loaded.title_letters()[0], 'A');
    assert_eq!(loaded.project(1).map(|p| &p.title), Some(&content.projects[1].title));
    assert!(loaded.project(2).is_none());
}

#[test]
fn contact_links_are_optional() {
    let content = PortfolioContent::builtin().unwrap();
    assert!(content.contact.items.iter().any(|item| item.link.is_none()));
    assert!(content.contact.items.iter().any(|item| item.link.is_some()));
}

#[test]
fn missing_content_file_is_an_io_error() {
    let result = PortfolioContent::from_path(&std::env::temp_dir().join("vitrine-no-such-file.ron"));
    assert!(matches!(result, Err(VitrineError::Io(_))));
}

#[test]
fn invalid_file_is_rejected_after_parsing() {
    let mut content = PortfolioContent::builtin().unwrap();
    content.profile.name = "   ".into();
    let text = ron::to_string(&content).unwrap();

    let path = temp_file("blank-name.ron", &text);
    let result = PortfolioContent::from_path(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(VitrineError::InvalidContent(_))));
}
