use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use crate::classifier::ScopeConfig;
use crate::config::ScanConfig;
use crate::scan::{DeclarationKind, ProgressTracker, ScanProcessor};

// Helper function to create a test source file
fn create_test_source_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

fn processor(scopes: &[&str]) -> ScanProcessor {
    let config = ScanConfig {
        scopes: ScopeConfig::new(scopes.iter().copied()),
        parallel_threads: Some(2),
        ..ScanConfig::default()
    };
    ScanProcessor::new(config).with_progress_tracker(ProgressTracker::hidden())
}

fn project() -> Result<TempDir> {
    let dir = tempdir()?;

    create_test_source_file(dir.path(), "classes/AccountService.cls", r#"
/**
 * Service for account operations.
 * @see https://example.com/accounts
 */
public with sharing class AccountService {
    public static final Integer LIMIT_SIZE = 200;

    AccountService() {
        Integer unused = 0;
    }

    /** Loads accounts by id. */
    @AuraEnabled
    public static List<Account> load(Set<Id> ids) {
        List<Account> result = new List<Account>();
        return result;
    }

    void recalculate() {
    }

    private class Cache {
        Map<Id, Account> byId() {
            return null;
        }
    }
}
"#)?;

    create_test_source_file(dir.path(), "classes/Shape.cls", r#"
global interface Shape {
    Decimal area();
    String describe();
}
"#)?;

    create_test_source_file(dir.path(), "classes/Empty.cls", "// nothing here\n")?;
    create_test_source_file(dir.path(), "classes/Notes.txt", "public class NotApex {}")?;

    Ok(dir)
}

#[test]
fn test_scan_directory() -> Result<()> {
    let dir = project()?;
    let result = processor(&["public", "global"]).scan_path(dir.path())?;

    assert_eq!(result.stats.total_files, 3);
    assert_eq!(result.stats.files_with_declarations, 2);
    assert_eq!(result.stats.empty_files, 1);
    assert_eq!(result.stats.error_files, 0);

    let service = result.files.iter()
        .find(|f| f.file_path.ends_with("AccountService.cls"))
        .expect("AccountService.cls not scanned");
    assert_eq!(service.content_hash.len(), 64);

    let names: Vec<(DeclarationKind, &str)> = service.declarations.iter()
        .map(|d| (d.kind, d.name.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(names, vec![
        (DeclarationKind::Class, "AccountService"),
        (DeclarationKind::Property, "LIMIT_SIZE"),
        (DeclarationKind::Constructor, "AccountService"),
        (DeclarationKind::Method, "load"),
        (DeclarationKind::Class, "Cache"),
    ]);

    Ok(())
}

#[test]
fn test_private_scope_infers_members() -> Result<()> {
    let dir = project()?;
    let result = processor(&["public", "private"]).scan_path(dir.path())?;

    let recalculate = result.declarations()
        .find(|d| d.name.as_deref() == Some("recalculate"))
        .expect("recalculate not kept");
    assert_eq!(recalculate.scope.as_deref(), Some("private"));
    assert_eq!(recalculate.parent.as_deref(), Some("AccountService"));

    let by_id = result.declarations()
        .find(|d| d.name.as_deref() == Some("byId"))
        .expect("byId not kept");
    assert_eq!(by_id.parent.as_deref(), Some("AccountService.Cache"));
    assert_eq!(by_id.scope.as_deref(), Some("private"));

    Ok(())
}

#[test]
fn test_doc_comments_and_links() -> Result<()> {
    let dir = project()?;
    let result = processor(&["public"]).scan_path(dir.path())?;

    let service = result.declarations()
        .find(|d| d.name.as_deref() == Some("AccountService") && d.kind == DeclarationKind::Class)
        .expect("class not kept");
    assert_eq!(service.line_number, 6);
    assert_eq!(service.links, vec!["https://example.com/accounts".to_string()]);
    assert!(service.doc_comment.as_deref().unwrap_or("").starts_with("Service for account operations."));

    let load = result.declarations()
        .find(|d| d.name.as_deref() == Some("load"))
        .expect("load not kept");
    assert_eq!(load.doc_comment.as_deref(), Some("Loads accounts by id."));

    Ok(())
}

#[test]
fn test_interface_methods_are_kept() -> Result<()> {
    let dir = project()?;
    let result = processor(&["global"]).scan_path(dir.path())?;

    let shape: Vec<_> = result.declarations()
        .filter(|d| d.parent.as_deref() == Some("Shape"))
        .map(|d| (d.kind, d.name.clone(), d.scope.clone()))
        .collect();
    assert_eq!(shape, vec![
        (DeclarationKind::Method, Some("area".to_string()), None),
        (DeclarationKind::Method, Some("describe".to_string()), None),
    ]);

    Ok(())
}

#[test]
fn test_max_files_and_missing_files() -> Result<()> {
    let dir = project()?;
    let existing = create_test_source_file(dir.path(), "Extra.cls", "public class Extra {}")?;
    let missing = dir.path().join("Missing.cls");

    let result = processor(&["public"]).process_files(&[existing.clone(), missing.clone()])?;
    assert_eq!(result.stats.total_files, 2);
    assert_eq!(result.stats.error_files, 1);
    assert_eq!(result.stats.error_file_paths, vec![missing.clone()]);
    assert_eq!(result.stats.success_rate(), 50.0);

    let limited = ScanProcessor::new(ScanConfig { max_files: Some(1), ..ScanConfig::default() })
        .with_progress_tracker(ProgressTracker::hidden())
        .process_files(&[existing, missing])?;
    assert_eq!(limited.stats.total_files, 1);

    Ok(())
}
